//! Client domain module.
//!
//! Gym-client profiles: body measurements, activity level, goals and the
//! coach-computed nutrition figures.

mod aggregate;
mod profile;

pub use aggregate::{Client, ClientUpdate, NewClient, AGE_RANGE, MAX_CALORIES, MAX_NAME_LENGTH};
pub use profile::{ActivityLevel, Sex};

#[cfg(test)]
pub(crate) use aggregate::tests::sample_new_client;
