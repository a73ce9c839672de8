// File: ./src/model/recurrence.rs
use crate::model::item::{Task, TaskKind};
use chrono::{Days, Months, NaiveDateTime};
use std::iter;
use strum::{Display, EnumIter, EnumString};

/// Number of projected occurrences shown next to a recurring event.
pub const PREVIEW_COUNT: usize = 3;

/// Named repeat interval of an event.
///
/// The parser keeps whatever followed `/repeat` verbatim; only these names
/// have behavior attached. Anything else parses to an error here and simply
/// projects nothing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Recurrence {
    #[strum(serialize = "none")]
    Never,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    /// Unknown names are treated the same as no recurrence.
    pub fn from_raw(raw: &str) -> Option<Recurrence> {
        raw.trim().parse().ok()
    }

    /// One calendar step forward. Monthly keeps the day-of-month when the
    /// target month has it and clamps to the month's last day otherwise.
    fn advance(self, from: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Recurrence::Never => None,
            Recurrence::Daily => from.checked_add_days(Days::new(1)),
            Recurrence::Weekly => from.checked_add_days(Days::new(7)),
            Recurrence::Monthly => from.checked_add_months(Months::new(1)),
        }
    }
}

pub struct RecurrenceEngine;

impl RecurrenceEngine {
    /// Projects `count` occurrences after `start`.
    /// Each occurrence is derived from the previous one, not from `start`,
    /// so month clamping carries forward (Jan 31 -> Feb 29 -> Mar 29).
    pub fn next_occurrences(
        start: NaiveDateTime,
        pattern: Recurrence,
        count: usize,
    ) -> Vec<NaiveDateTime> {
        iter::successors(pattern.advance(start), |prev| pattern.advance(*prev))
            .take(count)
            .collect()
    }

    /// Occurrences of an event task. Empty for anything that is not an event
    /// with a precise start instant and a recognized repeat name.
    pub fn for_task(task: &Task, count: usize) -> Vec<NaiveDateTime> {
        let TaskKind::Event { from, repeat, .. } = task.kind() else {
            return vec![];
        };
        let Some(start) = from.instant() else {
            return vec![];
        };
        let Some(pattern) = repeat.as_deref().and_then(Recurrence::from_raw) else {
            return vec![];
        };
        Self::next_occurrences(start, pattern, count)
    }
}
