//! Session domain module.
//!
//! Coaching appointments between the coach and a client on a given date
//! and time.

mod aggregate;
mod time;

pub use aggregate::{sort_by_time, NewSession, Session, SessionUpdate};
pub use time::SessionTime;
