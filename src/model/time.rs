//! Canonical time values and their wheel projection.
//!
//! A [`TimeValue`] is the stored 24-hour `(hour, minute)` pair. A [`WheelState`] is
//! what the picker shows while editing: a display hour in the active
//! [`ClockMode`] domain, a minute, and an AM/PM flag.
//!
//! # Hour mapping (12h mode)
//!
//! | hour24 | display | period |
//! |--------|---------|--------|
//! | 0      | 12      | AM     |
//! | 1..=11 | 1..=11  | AM     |
//! | 12     | 12      | PM     |
//! | 13..=23| 1..=11  | PM     |
//!
//! The inverse folds 12 to 0 with `% 12` before adding the PM offset, so
//! `to_canonical(from_canonical(t)) == t` for every valid `t` in both modes.

use crate::model::error::TimeParseError;
use chrono::Timelike;
use serde::Deserialize;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const HOURS_PER_DAY: u8 = 24;
pub const MINUTES_PER_HOUR: u8 = 60;

// ===== ClockMode =====

/// Display convention for hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum ClockMode {
    /// `1..=12` with AM/PM.
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `0..=23`, no period.
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ClockMode {
    /// Selectable display hours for this mode, in wheel order.
    pub fn hour_domain(self) -> RangeInclusive<u8> {
        match self {
            ClockMode::TwelveHour => 1..=12,
            ClockMode::TwentyFourHour => 0..=23,
        }
    }

    /// Parse the configuration spelling (`"12h"` / `"24h"`).
    pub fn from_config_str(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "12h" | "12" => Some(ClockMode::TwelveHour),
            "24h" | "24" => Some(ClockMode::TwentyFourHour),
            _ => None,
        }
    }
}

impl fmt::Display for ClockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockMode::TwelveHour => f.write_str("12h"),
            ClockMode::TwentyFourHour => f.write_str("24h"),
        }
    }
}

// ===== TimeValue =====

/// Canonical stored time. `hour24` is always in `0..=23`, `minute` in `0..=59`.
///
/// Fields are private: the only ways in are the checked [`TimeValue::new`], the
/// clamping [`TimeValue::clamped`], and string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeValue {
    hour24: u8,
    minute: u8,
}

impl TimeValue {
    pub const MIDNIGHT: TimeValue = TimeValue {
        hour24: 0,
        minute: 0,
    };

    /// Checked constructor.
    pub fn new(hour24: u8, minute: u8) -> Result<Self, TimeParseError> {
        if hour24 >= HOURS_PER_DAY {
            return Err(TimeParseError::HourOutOfRange(u32::from(hour24)));
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(TimeParseError::MinuteOutOfRange(u32::from(minute)));
        }
        Ok(Self { hour24, minute })
    }

    /// Clamp arbitrary integers into range. Never fails.
    pub fn clamped(hour24: i64, minute: i64) -> Self {
        Self {
            hour24: hour24.clamp(0, i64::from(HOURS_PER_DAY - 1)) as u8,
            minute: minute.clamp(0, i64::from(MINUTES_PER_HOUR - 1)) as u8,
        }
    }

    pub fn hour24(&self) -> u8 {
        self.hour24
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Parse the canonical boundary string without ever failing.
    ///
    /// Numeric fields are clamped into range; a missing or non-numeric field
    /// becomes 0. `"7:5"` → 07:05, `"99:99"` → 23:59, `"garbage"` → 00:00.
    pub fn parse_lenient(raw: &str) -> Self {
        let mut parts = raw.trim().splitn(2, ':');
        let hour = parts
            .next()
            .and_then(|h| h.trim().parse::<i64>().ok())
            .unwrap_or(0);
        let minute = parts
            .next()
            .and_then(|m| m.trim().parse::<i64>().ok())
            .unwrap_or(0);
        Self::clamped(hour, minute)
    }

    /// Render for display in the given mode.
    ///
    /// 24h: zero-padded `HH:MM`. 12h: `H:MM AM|PM` with the hour unpadded.
    pub fn format(&self, mode: ClockMode) -> String {
        match mode {
            ClockMode::TwentyFourHour => self.to_string(),
            ClockMode::TwelveHour => {
                let wheel = WheelState::from_canonical(*self, mode);
                format!(
                    "{}:{:02} {}",
                    wheel.display_hour(),
                    wheel.minute(),
                    wheel.period()
                )
            }
        }
    }

    /// Wall-clock time from the local timezone, truncated to the minute.
    pub fn now() -> Self {
        SystemClock.now()
    }
}

impl fmt::Display for TimeValue {
    /// Canonical boundary format: `HH:MM`, 24-hour, zero-padded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour24, self.minute)
    }
}

impl FromStr for TimeValue {
    type Err = TimeParseError;

    /// Strict parse of `H:MM` / `HH:MM`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeParseError::Malformed(raw.to_string());
        let (h, m) = raw.trim().split_once(':').ok_or_else(malformed)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(malformed());
        }
        let hour: u32 = h.parse().map_err(|_| malformed())?;
        let minute: u32 = m.parse().map_err(|_| malformed())?;
        if hour >= u32::from(HOURS_PER_DAY) {
            return Err(TimeParseError::HourOutOfRange(hour));
        }
        if minute >= u32::from(MINUTES_PER_HOUR) {
            return Err(TimeParseError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour24: hour as u8,
            minute: minute as u8,
        })
    }
}

// ===== Clock =====

/// Source of "now" for seeding the wheel.
pub trait Clock: Send {
    fn now(&self) -> TimeValue;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeValue {
        let now = chrono::Local::now();
        TimeValue::clamped(i64::from(now.hour()), i64::from(now.minute()))
    }
}

/// Clock frozen at a fixed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub TimeValue);

impl Clock for FixedClock {
    fn now(&self) -> TimeValue {
        self.0
    }
}

// ===== WheelState =====

/// Period half of a 12-hour time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => f.write_str("AM"),
            Period::Pm => f.write_str("PM"),
        }
    }
}

/// Uncommitted picker state while an editing session is open.
///
/// `display_hour` always lies in `mode.hour_domain()`; setters clamp. `is_am` is
/// tracked in both modes but only consulted in 12h mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelState {
    display_hour: u8,
    minute: u8,
    is_am: bool,
    mode: ClockMode,
}

impl WheelState {
    /// Project a canonical time onto the wheel.
    pub fn from_canonical(time: TimeValue, mode: ClockMode) -> Self {
        let display_hour = match mode {
            ClockMode::TwentyFourHour => time.hour24,
            ClockMode::TwelveHour => match time.hour24 % 12 {
                0 => 12,
                h => h,
            },
        };
        Self {
            display_hour,
            minute: time.minute,
            is_am: time.hour24 < 12,
            mode,
        }
    }

    /// Fold the wheel back into a canonical time.
    ///
    /// 12 AM → 0, 12 PM → 12, 1 AM → 1, 1 PM → 13, 11 PM → 23.
    pub fn to_canonical(&self) -> TimeValue {
        let hour24 = match self.mode {
            ClockMode::TwentyFourHour => self.display_hour,
            ClockMode::TwelveHour => {
                let folded = self.display_hour % 12;
                if self.is_am { folded } else { folded + 12 }
            }
        };
        TimeValue::clamped(i64::from(hour24), i64::from(self.minute))
    }

    /// Wheel seeded from the local wall clock.
    pub fn now(mode: ClockMode) -> Self {
        Self::now_from(&SystemClock, mode)
    }

    /// Wheel seeded from an arbitrary clock.
    pub fn now_from(clock: &dyn Clock, mode: ClockMode) -> Self {
        Self::from_canonical(clock.now(), mode)
    }

    pub fn display_hour(&self) -> u8 {
        self.display_hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn is_am(&self) -> bool {
        self.is_am
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    pub fn period(&self) -> Period {
        if self.is_am { Period::Am } else { Period::Pm }
    }

    /// Select a display hour, clamped into the mode's hour domain.
    pub fn set_display_hour(&mut self, hour: u8) {
        let domain = self.mode.hour_domain();
        self.display_hour = hour.clamp(*domain.start(), *domain.end());
    }

    /// Select a minute, clamped into `0..=59`.
    pub fn set_minute(&mut self, minute: u8) {
        self.minute = minute.min(MINUTES_PER_HOUR - 1);
    }

    pub fn set_am(&mut self, is_am: bool) {
        self.is_am = is_am;
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
