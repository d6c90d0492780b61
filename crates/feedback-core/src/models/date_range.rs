use std::fmt;
use std::str::FromStr;

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Time window applied to records before reporting.
///
/// Windows are fixed-length approximations (a month is 30 days, a year is
/// 365 days), not calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DateRange {
    #[default]
    All,
    #[serde(alias = "day")]
    LastDay,
    #[serde(alias = "week")]
    LastWeek,
    #[serde(alias = "month")]
    LastMonth,
    #[serde(alias = "year")]
    LastYear,
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::All,
        DateRange::LastDay,
        DateRange::LastWeek,
        DateRange::LastMonth,
        DateRange::LastYear,
    ];

    /// Label shown in report headers.
    pub fn label(self) -> &'static str {
        match self {
            DateRange::All => "All Time",
            DateRange::LastDay => "Last Day",
            DateRange::LastWeek => "Last Week",
            DateRange::LastMonth => "Last Month",
            DateRange::LastYear => "Last Year",
        }
    }

    /// Short form used in filenames and query strings.
    pub fn slug(self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::LastDay => "day",
            DateRange::LastWeek => "week",
            DateRange::LastMonth => "month",
            DateRange::LastYear => "year",
        }
    }

    /// Length of the window, or `None` for `All`.
    pub fn window(self) -> Option<SignedDuration> {
        let days = match self {
            DateRange::All => return None,
            DateRange::LastDay => 1,
            DateRange::LastWeek => 7,
            DateRange::LastMonth => 30,
            DateRange::LastYear => 365,
        };
        Some(SignedDuration::from_hours(days * 24))
    }

    /// Inclusive lower bound relative to `now`, or `None` for `All`.
    ///
    /// Saturates to `Timestamp::MIN` if `now` is too close to the start of
    /// the representable range.
    pub fn cutoff(self, now: Timestamp) -> Option<Timestamp> {
        self.window()
            .map(|window| now.checked_sub(window).unwrap_or(Timestamp::MIN))
    }

    /// Whether a record created at `created_at` falls inside the window.
    pub fn contains(self, created_at: Timestamp, now: Timestamp) -> bool {
        match self.cutoff(now) {
            Some(cutoff) => created_at >= cutoff,
            None => true,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DateRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "all_time" => Ok(DateRange::All),
            "day" | "last_day" => Ok(DateRange::LastDay),
            "week" | "last_week" => Ok(DateRange::LastWeek),
            "month" | "last_month" => Ok(DateRange::LastMonth),
            "year" | "last_year" => Ok(DateRange::LastYear),
            _ => Err(CoreError::InvalidDateRange(s.to_string())),
        }
    }
}
