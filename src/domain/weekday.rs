//! Meeting day patterns
//!
//! A pattern is either compact letters (`MWF`, `TR`) or a list of day
//! names separated by spaces and/or commas (`Mon Wed`, `tuesday,thursday`).
//! In compact form `T` is Tuesday and `R` is Thursday.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DayError {
    #[error("Unknown day token: '{0}'")]
    Unknown(String),
}

/// Looks up a single day token, ignoring case
fn lookup_day(token: &str) -> Option<Weekday> {
    let day = match token.to_lowercase().as_str() {
        "m" | "mon" | "monday" => Weekday::Mon,
        "t" | "tu" | "tue" | "tues" | "tuesday" => Weekday::Tue,
        "w" | "wed" | "wednesday" => Weekday::Wed,
        "r" | "th" | "thu" | "thur" | "thurs" | "thursday" => Weekday::Thu,
        "f" | "fri" | "friday" => Weekday::Fri,
        "sa" | "sat" | "saturday" => Weekday::Sat,
        "su" | "sun" | "sunday" => Weekday::Sun,
        _ => return None,
    };
    Some(day)
}

/// Splits a pattern string into individual day tokens
fn tokenize(s: &str) -> Vec<String> {
    let normalized = s.replace(',', " ");
    let normalized = normalized.trim();

    let is_compact = !normalized.contains(char::is_whitespace)
        && normalized.chars().all(char::is_alphabetic)
        && (2..=3).contains(&normalized.chars().count());

    if is_compact {
        normalized.chars().map(String::from).collect()
    } else {
        normalized.split_whitespace().map(String::from).collect()
    }
}

/// Ordered set of weekdays on which the course meets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeetingDays {
    days: Vec<Weekday>,
}

impl MeetingDays {
    /// Builds a pattern from arbitrary weekdays, dropping duplicates
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort_by_key(Weekday::num_days_from_monday);
        days.dedup();
        Self { days }
    }

    /// Weekdays in ascending order, Monday first
    pub fn weekdays(&self) -> &[Weekday] {
        &self.days
    }

    /// Weekday numbers with Monday = 0 and Sunday = 6
    pub fn numbers(&self) -> Vec<u32> {
        self.days.iter().map(Weekday::num_days_from_monday).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromStr for MeetingDays {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = tokenize(s)
            .into_iter()
            .map(|token| lookup_day(&token).ok_or(DayError::Unknown(token)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(days))
    }
}

impl fmt::Display for MeetingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.days.iter().map(ToString::to_string).collect();
        write!(f, "{}", names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Vec<u32> {
        s.parse::<MeetingDays>().unwrap().numbers()
    }

    #[test]
    fn compact_letters() {
        assert_eq!(parse("MWF"), vec![0, 2, 4]);
        assert_eq!(parse("TR"), vec![1, 3]);
        assert_eq!(parse("mwf"), vec![0, 2, 4]);
    }

    #[test]
    fn named_days() {
        assert_eq!(parse("Mon Wed"), vec![0, 2]);
        assert_eq!(parse("tuesday"), vec![1]);
        assert_eq!(parse("Tue, Thurs"), vec![1, 3]);
        assert_eq!(parse("sat,sun"), vec![5, 6]);
    }

    #[test]
    fn single_letter_is_a_name() {
        assert_eq!(parse("M"), vec![0]);
        assert_eq!(parse("R"), vec![3]);
    }

    #[test]
    fn short_alphabetic_run_is_split_into_letters() {
        assert_eq!(
            "Mon".parse::<MeetingDays>(),
            Err(DayError::Unknown("o".to_string()))
        );
        assert_eq!(
            "Th".parse::<MeetingDays>(),
            Err(DayError::Unknown("h".to_string()))
        );
        for pattern in ["Thu", "Tu", "Sa", "sun", "Wed", "Fri"] {
            assert!(
                pattern.parse::<MeetingDays>().is_err(),
                "{} should be read as compact letters",
                pattern
            );
        }
    }

    #[test]
    fn short_names_in_a_list_are_names() {
        assert_eq!(parse("Wed, Fri"), vec![2, 4]);
        assert_eq!(parse("Thu Sat"), vec![3, 5]);
    }

    #[test]
    fn duplicates_collapse_and_sort() {
        assert_eq!(parse("Fri Mon monday M"), vec![0, 4]);
        assert_eq!(parse("FWM"), vec![0, 2, 4]);
    }

    #[test]
    fn unknown_token_is_named() {
        assert_eq!(
            "Mon Funday".parse::<MeetingDays>(),
            Err(DayError::Unknown("Funday".to_string()))
        );
        // "S" is ambiguous between Saturday and Sunday
        assert_eq!(
            "MS".parse::<MeetingDays>(),
            Err(DayError::Unknown("S".to_string()))
        );
    }

    #[test]
    fn long_compact_run_is_one_token() {
        assert_eq!(
            "MTWRF".parse::<MeetingDays>(),
            Err(DayError::Unknown("MTWRF".to_string()))
        );
    }

    #[test]
    fn display_lists_days() {
        let days: MeetingDays = "TR".parse().unwrap();
        assert_eq!(days.to_string(), "Tue Thu");
    }
}
