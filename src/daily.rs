//! Daily puzzle keys and the countdown to the next puzzle
//!
//! Keys are derived from the calendar date at the point of use, so a process
//! that runs past midnight picks up the new day on its next lookup.
//!
//! Format is `day-YYYY-DDD` (year and zero-padded day of year). Histories
//! written with the older day-of-year-only format (`day-DDD`) still parse.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;
use std::str::FromStr;

/// Identifier of one calendar day's puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyKey {
    /// Year-scoped key
    Dated(NaiveDate),
    /// Day-of-year only; collides across years
    Legacy(u32),
}

impl DailyKey {
    /// Key for the given date
    #[must_use]
    pub const fn for_date(date: NaiveDate) -> Self {
        Self::Dated(date)
    }

    /// Key for the local calendar day right now
    #[must_use]
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Check whether `next` is the calendar day right after `self`
    ///
    /// Dated keys follow the calendar, so Dec 31 → Jan 1 is adjacent. Legacy
    /// keys compare day-of-year numbers. Mixed formats are never adjacent.
    #[must_use]
    pub fn is_followed_by(self, next: Self) -> bool {
        match (self, next) {
            (Self::Dated(prev), Self::Dated(next)) => prev.succ_opt() == Some(next),
            (Self::Legacy(prev), Self::Legacy(next)) => prev.checked_add(1) == Some(next),
            _ => false,
        }
    }
}

impl fmt::Display for DailyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dated(date) => write!(f, "day-{}-{:03}", date.year(), date.ordinal()),
            Self::Legacy(day) => write!(f, "day-{day}"),
        }
    }
}

impl FromStr for DailyKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid daily key: {s}");
        let rest = s.strip_prefix("day-").ok_or_else(invalid)?;

        match rest.split_once('-') {
            Some((year, day)) => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                let day: u32 = day.parse().map_err(|_| invalid())?;
                NaiveDate::from_yo_opt(year, day)
                    .map(Self::Dated)
                    .ok_or_else(invalid)
            }
            None => {
                let day: u32 = rest.parse().map_err(|_| invalid())?;
                if (1..=366).contains(&day) {
                    Ok(Self::Legacy(day))
                } else {
                    Err(invalid())
                }
            }
        }
    }
}

/// Key for the given date, as stored
#[must_use]
pub fn daily_key(date: NaiveDate) -> String {
    DailyKey::for_date(date).to_string()
}

/// Whole seconds from `now` until the next local midnight
#[must_use]
pub fn seconds_until_tomorrow(now: NaiveDateTime) -> u64 {
    let midnight = now
        .date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0));

    midnight
        .map(|m| m - now)
        .and_then(|delta: TimeDelta| u64::try_from(delta.num_seconds()).ok())
        .unwrap_or(0)
}

/// Format a second count as `HH:MM:SS`
#[must_use]
pub fn format_countdown(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
