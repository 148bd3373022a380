//! Avatar position, outside/room view and zoom.

pub const WORLD_W: i32 = 3000;
pub const WORLD_H: i32 = 3000;
pub const VIEW_W: i32 = 1100;
pub const VIEW_H: i32 = 600;
/// Closest the avatar may walk to the world edge.
pub const EDGE_MARGIN: i32 = 100;
pub const MOVE_SPEED: i32 = 12;
pub const START_X: i32 = 1550;
pub const START_Y: i32 = 2425;

/// Zoom is stored in tenths to keep the steps exact.
pub const MIN_ZOOM_TENTHS: u8 = 8;
pub const MAX_ZOOM_TENTHS: u8 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Outside,
    Room,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub x: i32,
    pub y: i32,
    pub view: View,
    pub zoom_tenths: u8,
}

impl World {
    pub fn new() -> Self {
        Self {
            x: START_X,
            y: START_Y,
            view: View::Outside,
            zoom_tenths: 10,
        }
    }

    /// Step one `MOVE_SPEED` in `heading`. Only possible outside.
    /// Returns false when the step was refused.
    pub fn step(&mut self, heading: Heading) -> bool {
        if self.view == View::Room {
            return false;
        }
        match heading {
            Heading::Up => self.y -= MOVE_SPEED,
            Heading::Down => self.y += MOVE_SPEED,
            Heading::Left => self.x -= MOVE_SPEED,
            Heading::Right => self.x += MOVE_SPEED,
        }
        self.x = self.x.clamp(EDGE_MARGIN, WORLD_W - EDGE_MARGIN);
        self.y = self.y.clamp(EDGE_MARGIN, WORLD_H - EDGE_MARGIN);
        true
    }

    pub fn toggle_view(&mut self) -> View {
        self.view = match self.view {
            View::Outside => View::Room,
            View::Room => View::Outside,
        };
        self.view
    }

    pub fn zoom_in(&mut self) {
        self.zoom_tenths = (self.zoom_tenths + 1).min(MAX_ZOOM_TENTHS);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_tenths = self.zoom_tenths.saturating_sub(1).max(MIN_ZOOM_TENTHS);
    }

    pub fn zoom(&self) -> f64 {
        f64::from(self.zoom_tenths) / 10.0
    }

    /// Background offset that keeps the avatar centred in the viewport.
    pub fn background_offset(&self) -> (i32, i32) {
        (-(self.x - VIEW_W / 2), -(self.y - VIEW_H / 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_outside_at_spawn() {
        let w = World::new();
        assert_eq!((w.x, w.y), (1550, 2425));
        assert_eq!(w.view, View::Outside);
        assert_eq!(w.zoom_tenths, 10);
    }

    #[test]
    fn step_moves_by_speed() {
        let mut w = World::new();
        assert!(w.step(Heading::Up));
        assert_eq!(w.y, 2413);
        w.step(Heading::Right);
        assert_eq!(w.x, 1562);
    }

    #[test]
    fn step_clamps_to_margin() {
        let mut w = World::new();
        for _ in 0..500 {
            w.step(Heading::Down);
            w.step(Heading::Left);
        }
        assert_eq!((w.x, w.y), (EDGE_MARGIN, WORLD_H - EDGE_MARGIN));
    }

    #[test]
    fn no_walking_in_room() {
        let mut w = World::new();
        assert_eq!(w.toggle_view(), View::Room);
        assert!(!w.step(Heading::Up));
        assert_eq!(w.y, START_Y);
        assert_eq!(w.toggle_view(), View::Outside);
    }

    #[test]
    fn zoom_bounds() {
        let mut w = World::new();
        for _ in 0..10 {
            w.zoom_in();
        }
        assert_eq!(w.zoom_tenths, MAX_ZOOM_TENTHS);
        assert!((w.zoom() - 1.6).abs() < 1e-9);
        for _ in 0..20 {
            w.zoom_out();
        }
        assert_eq!(w.zoom_tenths, MIN_ZOOM_TENTHS);
    }

    #[test]
    fn background_offset_centres_player() {
        let w = World::new();
        assert_eq!(w.background_offset(), (-1000, -2125));
    }
}
