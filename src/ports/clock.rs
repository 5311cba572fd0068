//! Clock port.
//!
//! Repositories read "now" and "today" through this port so tests can pin
//! the date.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
