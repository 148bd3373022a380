//! Shared input handling: coordinate conversion, click targets, and event types.

use ratzilla::ratatui::layout::Rect;

/// Key sent for Backspace in the minutes field.
pub const KEY_BACKSPACE: char = '\u{8}';
/// Key sent for Enter.
pub const KEY_ENTER: char = '\n';

/// All possible input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press. Arrow keys arrive as `w`/`a`/`s`/`d`, Esc as `q`.
    Key(char),
    /// A click/tap on a registered target, identified by a semantic action ID
    /// from `grove::actions`.
    Click(u16),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// The rectangular region (in terminal cell coordinates) for hit testing.
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared state between the render loop and click handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region and a semantic action ID.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-row click target at the given row within an area.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Hit-test a terminal cell coordinate against all registered targets.
    /// Later registrations win where targets overlap, so an overlay drawn
    /// after the main screen takes the click.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Determine whether a screen width (in columns) should use narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel Y coordinate (relative to the grid container's top edge)
/// to a terminal row index. `None` if outside the grid or inputs are invalid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }

    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;

    if row >= terminal_rows {
        return None;
    }

    Some(row)
}

/// Convert a pixel X coordinate to a terminal column index.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols { None } else { Some(col) }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test tests ──────────────────────────────────────────────

    #[test]
    fn hit_test_rows() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
        assert_eq!(cs.hit_test(5, 12), None);
    }

    #[test]
    fn hit_test_side_by_side_buttons() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 6, 1), 26);
        cs.add_click_target(Rect::new(6, 5, 6, 1), 27);

        assert_eq!(cs.hit_test(5, 5), Some(26));
        assert_eq!(cs.hit_test(6, 5), Some(27));
        assert_eq!(cs.hit_test(12, 5), None);
    }

    #[test]
    fn overlay_target_wins() {
        let mut cs = ClickState::new();
        // Main screen button underneath
        cs.add_click_target(Rect::new(0, 8, 80, 1), 20);
        // Shop row registered later, on top
        cs.add_click_target(Rect::new(10, 8, 40, 1), 41);

        assert_eq!(cs.hit_test(20, 8), Some(41));
        assert_eq!(cs.hit_test(2, 8), Some(20));
    }

    #[test]
    fn add_row_target_outside_area_ignored() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 9, 99);
        cs.add_row_target(area, 15, 98);
        assert!(cs.targets.is_empty());

        cs.add_row_target(area, 12, 97);
        assert_eq!(cs.hit_test(15, 12), Some(97));
    }

    #[test]
    fn click_state_clear() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 1, 80, 1), 1);
        cs.clear_targets();
        assert_eq!(cs.hit_test(0, 1), None);
    }

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(59));
        assert!(!is_narrow_layout(60));
    }

    // ── pixel coordinate conversion tests ──────────────────────────

    #[test]
    fn pixel_to_row_basic() {
        assert_eq!(pixel_y_to_row(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_y_to_row(449.0, 450.0, 30), Some(29));
    }

    #[test]
    fn pixel_to_row_invalid() {
        assert_eq!(pixel_y_to_row(450.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(-1.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 0.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 450.0, 0), None);
    }

    #[test]
    fn pixel_x_to_col_basic() {
        assert_eq!(pixel_x_to_col(0.0, 800.0, 80), Some(0));
        assert_eq!(pixel_x_to_col(10.0, 800.0, 80), Some(1));
        assert_eq!(pixel_x_to_col(800.0, 800.0, 80), None);
        assert_eq!(pixel_x_to_col(-1.0, 800.0, 80), None);
    }

    #[test]
    fn tap_on_shop_row_pipeline() {
        let mut cs = ClickState::new();
        cs.terminal_cols = 80;
        cs.terminal_rows = 30;
        for i in 0..7 {
            cs.add_click_target(Rect::new(10, 8 + i, 60, 1), 40 + i);
        }

        let (grid_w, grid_h) = (800.0, 450.0);
        let row = pixel_y_to_row(11.0 * 15.0 + 7.0, grid_h, cs.terminal_rows).unwrap();
        let col = pixel_x_to_col(305.0, grid_w, cs.terminal_cols).unwrap();
        assert_eq!((col, row), (30, 11));
        assert_eq!(cs.hit_test(col, row), Some(43));
    }
}
