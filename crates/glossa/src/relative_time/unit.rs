use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar unit for relative-time phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// A string that is not a time unit name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time unit '{0}'")]
pub struct ParseTimeUnitError(pub String);

impl TimeUnit {
    /// All units, largest first.
    pub const DESCENDING: [TimeUnit; 7] = [
        TimeUnit::Year,
        TimeUnit::Month,
        TimeUnit::Week,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    /// Nominal length in seconds. Months are 30 days and years 365 days.
    pub fn seconds(self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3_600.0,
            TimeUnit::Day => 86_400.0,
            TimeUnit::Week => 604_800.0,
            TimeUnit::Month => 2_592_000.0,
            TimeUnit::Year => 31_536_000.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = ParseTimeUnitError;

    /// Accepts singular and plural English names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let singular = s.strip_suffix('s').unwrap_or(s);
        TimeUnit::DESCENDING
            .into_iter()
            .find(|unit| unit.as_str() == singular)
            .ok_or_else(|| ParseTimeUnitError(s.to_string()))
    }
}

/// Pick the largest unit in which `delta_seconds` exceeds half a unit.
///
/// Returns the unit and the delta expressed in it, keeping the sign. Exactly
/// half a unit stays in the smaller unit. Deltas of at most half a second,
/// and non-finite deltas, are expressed in seconds.
///
/// ```
/// use glossa::relative_time::{TimeUnit, select_unit};
///
/// assert_eq!(select_unit(-259_200.0), (TimeUnit::Day, -3.0));
/// assert_eq!(select_unit(90.0), (TimeUnit::Minute, 1.5));
/// assert_eq!(select_unit(-30.0), (TimeUnit::Second, -30.0));
/// assert_eq!(select_unit(0.2), (TimeUnit::Second, 0.2));
/// ```
pub fn select_unit(delta_seconds: f64) -> (TimeUnit, f64) {
    TimeUnit::DESCENDING
        .into_iter()
        .map(|unit| (unit, delta_seconds / unit.seconds()))
        .find(|(_, scaled)| scaled.abs() > 0.5)
        .unwrap_or((TimeUnit::Second, delta_seconds))
}
