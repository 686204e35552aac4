//! Countdown arithmetic for the live footer.

use std::fmt;

use jiff::Timestamp;

/// Whole-second distance from now to the meeting instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// The target is strictly in the future.
    Pending { days: i64, hours: i64, minutes: i64, seconds: i64 },
    /// The target is now or already behind us.
    Passed,
}

impl Countdown {
    /// Splits `target - now` into day, hour, minute and second components.
    /// Anything not strictly in the future collapses to [`Countdown::Passed`];
    /// a negative countdown is never produced.
    pub fn between(now: Timestamp, target: Timestamp) -> Countdown {
        let total = target.as_second() - now.as_second();
        if total <= 0 {
            return Countdown::Passed;
        }
        Countdown::Pending {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Countdown::Pending { .. })
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Countdown::Pending { days: 0, hours, minutes, seconds } => {
                write!(f, "{hours}h {minutes}m {seconds}s")
            }
            Countdown::Pending { days, hours, minutes, seconds } => {
                write!(f, "{days}d {hours}h {minutes}m {seconds}s")
            }
            Countdown::Passed => write!(f, "Started / Passed"),
        }
    }
}
