//! Weekly workout plan.
//!
//! A plan is keyed by `(client_id, week_start)` and always holds seven days,
//! Monday first. Saving a plan replaces the whole week.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{is_week_start, Weekday};
use crate::domain::foundation::{ClientId, ValidationError};

/// A single exercise prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub rest_sec: u32,
    #[serde(default)]
    pub notes: String,
}

/// Ordered workouts for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

impl DayPlan {
    pub fn rest(day: Weekday) -> Self {
        Self {
            day,
            workouts: Vec::new(),
        }
    }
}

/// One client's plan for the week starting `week_start`.
///
/// # Invariants
///
/// - `week_start` is a Monday
/// - `days` holds exactly seven entries in `Mon..Sun` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub client_id: ClientId,
    #[serde(rename = "week_start_iso")]
    pub week_start: NaiveDate,
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    /// Empty Mon..Sun skeleton for a week nobody has written yet.
    pub fn empty(client_id: ClientId, week_start: NaiveDate) -> Self {
        Self {
            client_id,
            week_start,
            days: Weekday::ALL.iter().copied().map(DayPlan::rest).collect(),
        }
    }

    /// Total number of workouts across the week.
    pub fn workout_count(&self) -> usize {
        self.days.iter().map(|d| d.workouts.len()).sum()
    }

    /// Checks the week shape and every workout.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_week_start(self.week_start) {
            return Err(ValidationError::invalid_format(
                "week_start_iso",
                format!("{} is not a Monday", self.week_start),
            ));
        }
        if self.days.len() != Weekday::ALL.len() {
            return Err(ValidationError::out_of_range(
                "days",
                7,
                7,
                self.days.len() as i64,
            ));
        }
        for (day, expected) in self.days.iter().zip(Weekday::ALL) {
            if day.day != expected {
                return Err(ValidationError::invalid_format(
                    "days",
                    format!("expected {} but found {}", expected, day.day),
                ));
            }
            for workout in &day.workouts {
                if workout.exercise.trim().is_empty() {
                    return Err(ValidationError::empty_field("exercise"));
                }
            }
        }
        Ok(())
    }
}
