//! Domain models for the schedule generator
//!
//! Contains date parsing, meeting-day patterns and the week calendar,
//! without any I/O concerns.

pub mod date;
mod weekday;
mod calendar;

pub use date::{DateError, DateRange};
pub use weekday::{DayError, MeetingDays};
pub use calendar::{Schedule, Week, Weeks};
