//! Reusable clickable UI components.
//!
//! [`ClickableList`] pairs rendered lines with click actions, so a render
//! function never computes target rows by hand.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;
use ratzilla::ratatui::widgets::Paragraph;

use crate::input::ClickState;

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// # Example
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Shop (not clickable)"));
/// cl.push_clickable(Line::from("Buy Tea Set"), BUY_ITEM_BASE + 6);
/// cl.register_targets(area, &mut cs, 1, 1);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line. The action follows the line if lines are
    /// inserted before it.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Rows the lines occupy when rendered unwrapped at `width` columns.
    pub fn visual_height(&self, width: u16) -> u16 {
        Paragraph::new(self.lines.clone()).line_count(width) as u16
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines, one row per line.
    ///
    /// * `top_offset`: rows before content (e.g. 1 for a top border).
    /// * `bottom_offset`: rows after content (e.g. 1 for a bottom border).
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);
        for &(line_idx, action_id) in &self.actions {
            let row = content_y + line_idx;
            if row >= content_end {
                continue;
            }
            cs.add_row_target(area, row, action_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clickable_rows_follow_headers() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("Shop"));
        cl.push(Line::from(""));
        cl.push_clickable(Line::from("Cat Companion"), 40);
        cl.push_clickable(Line::from("Dog Companion"), 41);
        assert_eq!(cl.len(), 4);

        let area = Rect::new(10, 5, 40, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1);

        // "Cat Companion" is line 2 → row = 5 + 1 + 2 = 8
        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(12, 8), Some(40));
        assert_eq!(cs.hit_test(12, 9), Some(41));
        assert_eq!(cs.hit_test(12, 7), None);
        // Outside the area horizontally
        assert_eq!(cs.hit_test(5, 8), None);
    }

    #[test]
    fn rows_clipped_by_bottom_border() {
        let mut cl = ClickableList::new();
        for i in 0..7 {
            cl.push_clickable(Line::from(format!("item {}", i)), 40 + i as u16);
        }
        // height 5 with borders → 3 content rows
        let area = Rect::new(0, 0, 40, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(1, 3), Some(42));
        assert_eq!(cs.hit_test(1, 4), None);
    }

    #[test]
    fn visual_height_counts_lines() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("a"));
        cl.push_clickable(Line::from("b"), 1);
        cl.push(Line::from("c"));
        assert_eq!(cl.visual_height(20), 3);
        assert_eq!(cl.into_lines().len(), 3);
    }
}
