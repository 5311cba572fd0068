//! Weekday keys and week-start arithmetic.

use chrono::{Datelike, Days, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of a plan week, serialized by its three-letter abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All days in plan order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monday of the week containing `today`, shifted by `offset` weeks.
///
/// Negative offsets move into past weeks. `None` when the shifted week
/// falls outside the representable calendar.
pub fn week_start_for(today: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let back = Days::new(u64::from(today.weekday().num_days_from_monday()));
    let monday = today.checked_sub_days(back)?;
    monday.checked_add_signed(Duration::try_weeks(offset)?)
}

/// True if `date` falls on a Monday.
pub fn is_week_start(date: NaiveDate) -> bool {
    date.weekday() == chrono::Weekday::Mon
}
