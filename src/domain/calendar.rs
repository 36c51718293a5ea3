//! Week-by-week meeting calendar
//!
//! The first week starts on the Monday on or before the range start, and
//! weeks continue in 7-day steps until a week would start after the range
//! end. Every such week is produced, even when holidays leave it with no
//! meetings.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::date::DateRange;
use super::weekday::MeetingDays;

/// One Monday-Sunday calendar week and its class meetings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Week {
    /// 1-based, contiguous week number
    pub number: u32,
    /// Monday of this week
    pub start: NaiveDate,
    /// Sunday of this week
    pub end: NaiveDate,
    /// Meeting dates in ascending order
    pub meetings: Vec<NaiveDate>,
}

impl Week {
    /// Zero-padded two-digit week identifier (`01`, `02`, ...)
    pub fn id(&self) -> String {
        format!("{:02}", self.number)
    }
}

/// Inputs to the calendar computation
#[derive(Debug, Clone)]
pub struct Schedule {
    range: DateRange,
    days: MeetingDays,
    no_class: BTreeSet<NaiveDate>,
}

impl Schedule {
    pub fn new(range: DateRange, days: MeetingDays, no_class: BTreeSet<NaiveDate>) -> Self {
        Self {
            range,
            days,
            no_class,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn days(&self) -> &MeetingDays {
        &self.days
    }

    pub fn no_class(&self) -> &BTreeSet<NaiveDate> {
        &self.no_class
    }

    /// Monday on or before the range start
    pub fn first_monday(&self) -> NaiveDate {
        let start = self.range.start();
        let offset = i64::from(start.weekday().num_days_from_monday());
        start
            .checked_sub_signed(Duration::days(offset))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Returns true if a class meets on this date
    fn is_meeting(&self, date: NaiveDate) -> bool {
        self.range.contains(date) && !self.no_class.contains(&date)
    }

    /// Iterates the weeks intersecting the range, starting from week 1
    pub fn weeks(&self) -> Weeks<'_> {
        Weeks {
            schedule: self,
            next_start: Some(self.first_monday()),
            number: 1,
        }
    }
}

/// Iterator over the weeks of a [`Schedule`]
#[derive(Debug, Clone)]
pub struct Weeks<'a> {
    schedule: &'a Schedule,
    next_start: Option<NaiveDate>,
    number: u32,
}

impl Iterator for Weeks<'_> {
    type Item = Week;

    fn next(&mut self) -> Option<Week> {
        let start = self.next_start.take()?;
        if start > self.schedule.range.end() {
            return None;
        }

        let end = start
            .checked_add_signed(Duration::days(6))
            .unwrap_or(NaiveDate::MAX);

        let meetings = self
            .schedule
            .days
            .weekdays()
            .iter()
            .filter_map(|day| {
                start.checked_add_signed(Duration::days(i64::from(day.num_days_from_monday())))
            })
            .filter(|date| self.schedule.is_meeting(*date))
            .collect();

        let week = Week {
            number: self.number,
            start,
            end,
            meetings,
        };

        self.next_start = start.checked_add_signed(Duration::weeks(1));
        self.number += 1;

        Some(week)
    }
}
