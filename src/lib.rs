//! make-weeks - weekly PreTeXt schedule generator
//!
//! Turns a term's date range, meeting days and no-class dates into one
//! `weekNN.ptx` subsection per calendar week plus a `main.ptx` section that
//! XIncludes them in order.

pub mod domain;
pub mod document;
pub mod storage;
pub mod cli;

pub use domain::{DateRange, MeetingDays, Schedule, Week};
