use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// Tailwind lime-300 / lime-950, the highlight used by the calendar modal.
pub const SELECTED_COLOR: &str = "#bef264";
pub const SELECTED_TEXT_COLOR: &str = "#1a2e05";

#[derive(Debug, Error)]
#[error("invalid calendar day {input:?}: expected YYYY-MM-DD")]
pub struct CalendarDayError {
    pub input: String,
}

/// A single day as handed over by the calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// ISO `YYYY-MM-DD` form, used as the key in [`MarkedDates`].
    pub fn date_string(&self) -> String {
        self.0.format(ISO_DATE_FORMAT).to_string()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Milliseconds since the Unix epoch at UTC midnight.
    pub fn timestamp(&self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDay {
    type Err = CalendarDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|_| CalendarDayError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date_string())
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.date_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Current calendar selection. A complete range always has `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectedRange {
    #[default]
    Empty,
    Start(CalendarDay),
    Complete {
        start: CalendarDay,
        end: CalendarDay,
    },
}

impl SelectedRange {
    /// Builds a complete range from two days in either order.
    pub fn between(a: CalendarDay, b: CalendarDay) -> Self {
        if b < a {
            Self::Complete { start: b, end: a }
        } else {
            Self::Complete { start: a, end: b }
        }
    }

    pub fn start_date(&self) -> Option<CalendarDay> {
        match self {
            Self::Empty => None,
            Self::Start(start) | Self::Complete { start, .. } => Some(*start),
        }
    }

    pub fn end_date(&self) -> Option<CalendarDay> {
        match self {
            Self::Complete { end, .. } => Some(*end),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedDate {
    pub color: String,
    pub text_color: String,
}

impl MarkedDate {
    pub fn selected() -> Self {
        Self {
            color: SELECTED_COLOR.to_string(),
            text_color: SELECTED_TEXT_COLOR.to_string(),
        }
    }
}

pub type MarkedDates = BTreeMap<String, MarkedDate>;
