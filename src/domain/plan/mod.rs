//! Plan domain module.
//!
//! Weekly workout plans per client, keyed by the Monday that starts the week.

mod aggregate;
mod week;

pub use aggregate::{DayPlan, WeekPlan, Workout};
pub use week::{is_week_start, week_start_for, Weekday};
