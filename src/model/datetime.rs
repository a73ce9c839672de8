// File: ./src/model/datetime.rs
//! Interpretation of the free-text date fields attached to deadlines and events.
//!
//! A raw field is tried against an ordered list of strict patterns; the first
//! one that matches decides whether the field is a precise instant or a whole
//! day. Anything else stays opaque and is shown exactly as typed.
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

const DATETIME_INPUT: &str = "%Y-%m-%d %H%M";
const DATE_INPUT: &str = "%Y-%m-%d";

const DATETIME_DISPLAY: &str = "%b %-d %Y, %-I:%M%p";
const DATE_DISPLAY: &str = "%b %-d %Y";
const SHORT_DISPLAY: &str = "%b %-d";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DateType {
    AllDay(NaiveDate),
    Specific(NaiveDateTime),
}

impl DateType {
    /// "Dec 2 2019, 6:00PM" for instants, "Dec 2 2019" for days.
    pub fn format_display(&self) -> String {
        match self {
            DateType::AllDay(d) => d.format(DATE_DISPLAY).to_string(),
            DateType::Specific(dt) => dt.format(DATETIME_DISPLAY).to_string(),
        }
    }

    pub fn as_specific(&self) -> Option<NaiveDateTime> {
        match self {
            DateType::Specific(dt) => Some(*dt),
            DateType::AllDay(_) => None,
        }
    }
}

type Attempt = fn(&str) -> Option<DateType>;

// Order matters: the combined pattern must win over the date-only one.
const ATTEMPTS: [Attempt; 2] = [parse_specific, parse_all_day];

fn parse_specific(raw: &str) -> Option<DateType> {
    if !has_shape(raw, "dddd-dd-dd dddd") {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, DATETIME_INPUT)
        .ok()
        .map(DateType::Specific)
}

fn parse_all_day(raw: &str) -> Option<DateType> {
    if !has_shape(raw, "dddd-dd-dd") {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_INPUT)
        .ok()
        .map(DateType::AllDay)
}

/// chrono accepts single-digit fields and signed years; the input patterns
/// are fixed-width, so the shape is checked first. `d` stands for an ASCII digit.
fn has_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'd' => c.is_ascii_digit(),
            other => c == other,
        })
}

/// Narrows a raw string to an instant, a day, or nothing. Never fails.
pub fn parse(raw: &str) -> Option<DateType> {
    ATTEMPTS.iter().find_map(|attempt| attempt(raw))
}

/// "Dec 17", used for projected occurrences.
pub fn format_short(dt: &NaiveDateTime) -> String {
    dt.format(SHORT_DISPLAY).to_string()
}

/// A user-supplied date field: the verbatim text plus what it was understood as.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TimeField {
    raw: String,
    parsed: Option<DateType>,
}

impl TimeField {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse(&raw);
        Self { raw, parsed }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn parsed(&self) -> Option<&DateType> {
        self.parsed.as_ref()
    }

    pub fn is_opaque(&self) -> bool {
        self.parsed.is_none()
    }

    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.parsed.as_ref().and_then(DateType::as_specific)
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parsed {
            Some(d) => f.write_str(&d.format_display()),
            None => f.write_str(&self.raw),
        }
    }
}
