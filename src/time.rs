//! Whole-second study clock using an accumulator pattern.
//!
//! `draw_web()` calls at ~60fps with variable delta. `StudyClock` turns
//! that into whole seconds, and only while it is running, so the study
//! timer sees exactly one tick per elapsed second. Gaps between frames
//! are counted in full: a hidden tab draws nothing but the session keeps
//! running, and the missed seconds arrive with the next frame.

const MS_PER_SECOND: f64 = 1000.0;

pub struct StudyClock {
    /// Accumulated milliseconds not yet consumed as seconds
    accumulator: f64,
    /// Timestamp of the last update (ms), None right after a restart
    last_timestamp: Option<f64>,
    running: bool,
}

impl StudyClock {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            last_timestamp: None,
            running: false,
        }
    }

    /// Start counting from the next frame. Any leftover fraction is dropped,
    /// so the first second lands a full second after the restart.
    pub fn restart(&mut self) {
        self.accumulator = 0.0;
        self.last_timestamp = None;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_timestamp = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed wall-clock timestamp (from `performance.now()` or similar).
    /// Returns the number of whole seconds elapsed this frame.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        if !self.running {
            return 0;
        }
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let seconds = (self.accumulator / MS_PER_SECOND) as u32;
        self.accumulator -= seconds as f64 * MS_PER_SECOND;
        seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> StudyClock {
        let mut c = StudyClock::new();
        c.restart();
        c
    }

    #[test]
    fn stopped_clock_yields_nothing() {
        let mut c = StudyClock::new();
        assert_eq!(c.update(0.0), 0);
        assert_eq!(c.update(3_000.0), 0);
    }

    #[test]
    fn first_frame_after_restart_returns_zero() {
        let mut c = running();
        assert_eq!(c.update(12_345.0), 0);
    }

    #[test]
    fn one_second() {
        let mut c = running();
        c.update(0.0);
        assert_eq!(c.update(999.0), 0);
        assert_eq!(c.update(1_000.0), 1);
    }

    #[test]
    fn remainder_carried_over() {
        let mut c = running();
        c.update(0.0);
        assert_eq!(c.update(1_500.0), 1); // 500ms left over
        assert_eq!(c.update(2_000.0), 1); // 500 + 500
    }

    #[test]
    fn restart_drops_leftover() {
        let mut c = running();
        c.update(0.0);
        c.update(900.0);
        c.restart();
        c.update(1_000.0);
        assert_eq!(c.update(1_200.0), 0);
        assert_eq!(c.update(2_000.0), 1);
    }

    #[test]
    fn long_gap_counted_in_full() {
        let mut c = running();
        c.update(0.0);
        // Tab backgrounded for a minute
        assert_eq!(c.update(60_000.0), 60);
        assert_eq!(c.update(60_500.0), 0);
    }

    #[test]
    fn clock_going_backwards_counts_nothing() {
        let mut c = running();
        c.update(5_000.0);
        assert_eq!(c.update(4_000.0), 0);
        assert_eq!(c.update(5_000.0), 1);
    }

    #[test]
    fn steady_60fps() {
        let mut c = running();
        c.update(0.0);
        let mut total = 0u32;
        // 600 frames at ~16.67ms each = 10 seconds
        for i in 1..=600 {
            total += c.update(i as f64 * 16.667);
        }
        assert!(total >= 9 && total <= 10, "expected ~10 seconds, got {}", total);
    }

    #[test]
    fn stop_halts_counting() {
        let mut c = running();
        c.update(0.0);
        c.stop();
        assert!(!c.is_running());
        assert_eq!(c.update(5_000.0), 0);
    }
}
