//! Wall-clock time of day for a coaching session.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const FORMAT: &str = "%H:%M";

/// Time of day at minute precision, written as `HH:MM`.
///
/// Ordering is chronological, which is what the date listings sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionTime(NaiveTime);

impl SessionTime {
    /// Builds a time from hour and minute.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| ValidationError::invalid_format("time", "expected HH:MM"))
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for SessionTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 5 {
            return Err(ValidationError::invalid_format("time", "expected HH:MM"));
        }
        NaiveTime::parse_from_str(s, FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("time", "expected HH:MM"))
    }
}

impl fmt::Display for SessionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl Serialize for SessionTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SessionTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
