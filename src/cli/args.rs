//! Typed schedule inputs built from raw command-line tokens

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use thiserror::Error;

use super::app::Cli;
use crate::domain::date::{parse_date, parse_date_list};
use crate::domain::{DateRange, MeetingDays, Schedule};
use crate::storage::CourseConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("Missing required arguments")]
    Usage,

    #[error("{0} requires a value")]
    MissingValue(String),
}

/// Everything a generate run needs, parsed once at the boundary
#[derive(Debug, Clone)]
pub struct ScheduleArgs {
    pub schedule: Schedule,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

impl ScheduleArgs {
    /// Parses the command line, merging in no-class dates from the course config
    pub fn from_cli(cli: &Cli, course: &CourseConfig) -> Result<Self> {
        let start = parse_date(&cli.start).context("Invalid start date")?;
        let end = parse_date(&cli.end).context("Invalid end date")?;
        let range = DateRange::new(start, end)?;

        let days: MeetingDays = cli.days.parse()?;

        let mut no_class: BTreeSet<NaiveDate> = match &cli.no_class {
            None => BTreeSet::new(),
            Some(None) => return Err(ArgsError::MissingValue("--no-class".to_string()).into()),
            Some(Some(dates)) => parse_date_list(dates).context("Invalid --no-class value")?,
        };
        no_class.extend(course.no_class_dates()?);

        Ok(Self {
            schedule: Schedule::new(range, days, no_class),
            output_dir: cli.output_dir.clone(),
            dry_run: cli.dry_run,
        })
    }
}
