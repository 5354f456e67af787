//! Release-date evaluation for viewers.
//!
//! The codec never looks at the clock. Viewing surfaces call these with their
//! own notion of "now" to decide whether a scheduled letter may be opened.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::types::Letter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Unlocked,
    Locked { remaining: Countdown },
}

impl LockState {
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked { .. })
    }
}

/// Whole days and leftover hours until a release instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
}

impl Countdown {
    pub fn between(now: DateTime<Utc>, release: DateTime<Utc>) -> Self {
        let remaining = release - now;
        Self {
            days: remaining.num_days(),
            hours: remaining.num_hours() % 24,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{} day{} left", self.days, plural(self.days))
        } else if self.hours > 0 {
            write!(f, "{} hour{} left", self.hours, plural(self.hours))
        } else {
            write!(f, "Opening soon...")
        }
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

/// A letter is locked while its release date lies strictly in the future.
pub fn lock_state(letter: &Letter, now: DateTime<Utc>) -> LockState {
    match letter.release_date {
        Some(release) if release > now => LockState::Locked {
            remaining: Countdown::between(now, release),
        },
        _ => LockState::Unlocked,
    }
}

/// Short human date, e.g. `Feb 14, 2025`.
pub fn format_release_date(release: &DateTime<Utc>) -> String {
    release.format("%b %-d, %Y").to_string()
}
