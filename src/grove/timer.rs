//! Countdown study timer: Idle → Running → Idle.
//!
//! The timer owns its countdown and is advanced by exactly one second per
//! `tick()`. Wall-clock handling lives in `crate::time`, so sessions can be
//! driven to completion in tests without waiting.

use super::error::Rejection;

pub const SECONDS_PER_MINUTE: u64 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running {
        remaining_seconds: u64,
        /// Currency paid on completion; equal to the requested minutes.
        reward: u32,
    },
}

/// What a single tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    Progress { remaining_seconds: u64 },
    Completed { reward: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyTimer {
    state: TimerState,
}

impl StudyTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn remaining_seconds(&self) -> Option<u64> {
        match self.state {
            TimerState::Running {
                remaining_seconds, ..
            } => Some(remaining_seconds),
            TimerState::Idle => None,
        }
    }

    /// Begin a session of `minutes`. Returns the starting countdown in seconds.
    pub fn start(&mut self, minutes: i64) -> Result<u64, Rejection> {
        if self.is_running() {
            return Err(Rejection::SessionAlreadyActive);
        }
        if minutes <= 0 {
            return Err(Rejection::InvalidInput);
        }
        let reward = u32::try_from(minutes).map_err(|_| Rejection::InvalidInput)?;
        let remaining_seconds = u64::from(reward) * SECONDS_PER_MINUTE;
        self.state = TimerState::Running {
            remaining_seconds,
            reward,
        };
        Ok(remaining_seconds)
    }

    /// Advance the countdown by one second. Idle timers ignore ticks.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        let TimerState::Running {
            remaining_seconds,
            reward,
        } = self.state
        else {
            return None;
        };

        let remaining_seconds = remaining_seconds.saturating_sub(1);
        if remaining_seconds > 0 {
            self.state = TimerState::Running {
                remaining_seconds,
                reward,
            };
            Some(TimerEvent::Progress { remaining_seconds })
        } else {
            self.state = TimerState::Idle;
            Some(TimerEvent::Completed { reward })
        }
    }
}

/// Parse the minutes field the way a browser `parseInt` would: leading
/// whitespace, an optional sign, then as many digits as are present.
pub fn parse_minutes(text: &str) -> Result<i64, Rejection> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(Rejection::InvalidInput);
    }
    let value: i64 = rest[..digits_len]
        .parse()
        .map_err(|_| Rejection::InvalidInput)?;
    Ok(if negative { -value } else { value })
}

/// Format seconds as `MM:SS`.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_sets_countdown() {
        let mut t = StudyTimer::new();
        assert_eq!(t.start(25), Ok(1500));
        assert_eq!(
            t.state(),
            TimerState::Running {
                remaining_seconds: 1500,
                reward: 25
            }
        );
    }

    #[test]
    fn start_rejects_non_positive() {
        let mut t = StudyTimer::new();
        assert_eq!(t.start(0), Err(Rejection::InvalidInput));
        assert_eq!(t.start(-3), Err(Rejection::InvalidInput));
        assert_eq!(t.start(i64::MAX), Err(Rejection::InvalidInput));
        assert_eq!(t.state(), TimerState::Idle);
    }

    #[test]
    fn start_while_running_keeps_countdown() {
        let mut t = StudyTimer::new();
        t.start(2).unwrap();
        t.tick();
        assert_eq!(t.start(10), Err(Rejection::SessionAlreadyActive));
        assert_eq!(t.start(0), Err(Rejection::SessionAlreadyActive));
        assert_eq!(t.remaining_seconds(), Some(119));
    }

    #[test]
    fn one_minute_session_completes_once() {
        let mut t = StudyTimer::new();
        t.start(1).unwrap();
        for expected in (1..60).rev() {
            assert_eq!(
                t.tick(),
                Some(TimerEvent::Progress {
                    remaining_seconds: expected
                })
            );
        }
        assert_eq!(t.tick(), Some(TimerEvent::Completed { reward: 1 }));
        assert_eq!(t.state(), TimerState::Idle);
        assert_eq!(t.tick(), None);
    }

    #[test]
    fn idle_tick_is_noop() {
        let mut t = StudyTimer::new();
        assert_eq!(t.tick(), None);
        assert_eq!(t.state(), TimerState::Idle);
    }

    #[test]
    fn can_restart_after_completion() {
        let mut t = StudyTimer::new();
        t.start(1).unwrap();
        for _ in 0..60 {
            t.tick();
        }
        assert_eq!(t.start(3), Ok(180));
    }

    #[test]
    fn parse_minutes_like_parse_int() {
        assert_eq!(parse_minutes("25"), Ok(25));
        assert_eq!(parse_minutes("  12min"), Ok(12));
        assert_eq!(parse_minutes("-5"), Ok(-5));
        assert_eq!(parse_minutes("+7"), Ok(7));
        assert_eq!(parse_minutes(""), Err(Rejection::InvalidInput));
        assert_eq!(parse_minutes("abc"), Err(Rejection::InvalidInput));
        assert_eq!(parse_minutes("-"), Err(Rejection::InvalidInput));
    }

    #[test]
    fn format_time_pads() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(6000), "100:00");
    }
}
