// File: src/model/adapter.rs
// Conversion between tasks and the one-line records of the task file.
use crate::model::item::{Task, TaskKind};
use thiserror::Error;

pub const FIELD_SEPARATOR: &str = " | ";
const STATUS_DONE: &str = "1";
const STATUS_NOT_DONE: &str = "0";
const NO_REPEAT: &str = "none";

const MIN_FIELDS: usize = 3;
const DEADLINE_FIELDS: usize = 4;
const EVENT_FIELDS: usize = 5;

const IDX_TYPE: usize = 0;
const IDX_STATUS: usize = 1;
const IDX_DESCRIPTION: usize = 2;
const IDX_DUE: usize = 3;
const IDX_FROM: usize = 3;
const IDX_TO: usize = 4;
const IDX_REPEAT: usize = 5;

/// Why a record could not be turned back into a task.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RecordError {
    #[error("expected at least 3 fields, found {0}")]
    TooFewFields(usize),
    #[error("line is not valid UTF-8")]
    InvalidEncoding,
    #[error("unknown task type '{0}'")]
    UnknownType(String),
    #[error("'{code}' record needs {needed} fields, found {found}")]
    MissingFields {
        code: &'static str,
        needed: usize,
        found: usize,
    },
}

impl Task {
    /// `TYPE | STATUS | DESCRIPTION | ...` with the raw date text as typed.
    /// Events without a repeat interval use the older 5-field layout.
    pub fn to_record(&self) -> String {
        let status = if self.is_done() {
            STATUS_DONE
        } else {
            STATUS_NOT_DONE
        };
        let mut fields = vec![self.type_code(), status, self.description()];
        match self.kind() {
            TaskKind::Plain => {}
            TaskKind::Deadline { due } => fields.push(due.raw()),
            TaskKind::Event { from, to, repeat } => {
                fields.push(from.raw());
                fields.push(to.raw());
                if let Some(r) = repeat {
                    fields.push(r);
                }
            }
        }
        fields.join(FIELD_SEPARATOR)
    }

    pub fn from_record(line: &str) -> Result<Task, RecordError> {
        let mut fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        // A dangling separator leaves an empty tail that does not count as a field
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        if fields.len() < MIN_FIELDS {
            return Err(RecordError::TooFewFields(fields.len()));
        }

        let description = fields[IDX_DESCRIPTION];
        let require = |code: &'static str, needed: usize| {
            if fields.len() < needed {
                Err(RecordError::MissingFields {
                    code,
                    needed,
                    found: fields.len(),
                })
            } else {
                Ok(())
            }
        };

        let mut task = match fields[IDX_TYPE] {
            "T" => Task::todo(description),
            "D" => {
                require("D", DEADLINE_FIELDS)?;
                Task::deadline(description, fields[IDX_DUE])
            }
            "E" => {
                require("E", EVENT_FIELDS)?;
                let repeat = fields
                    .get(IDX_REPEAT)
                    .copied()
                    .filter(|r| *r != NO_REPEAT);
                Task::event(description, fields[IDX_FROM], fields[IDX_TO], repeat)
            }
            other => return Err(RecordError::UnknownType(other.to_string())),
        };

        if fields[IDX_STATUS] == STATUS_DONE {
            task.mark_done();
        }
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_record() {
        let mut t = Task::todo("buy milk");
        assert_eq!(t.to_record(), "T | 0 | buy milk");
        t.mark_done();
        assert_eq!(t.to_record(), "T | 1 | buy milk");
    }

    #[test]
    fn test_dated_records_keep_raw_text() {
        assert_eq!(
            Task::deadline("homework", "2019-12-15 1800").to_record(),
            "D | 0 | homework | 2019-12-15 1800"
        );
        assert_eq!(
            Task::event("conference", "2019-12-10", "2019-12-12", None).to_record(),
            "E | 0 | conference | 2019-12-10 | 2019-12-12"
        );
        assert_eq!(
            Task::event("standup", "2024-12-16 0900", "0915", Some("daily")).to_record(),
            "E | 0 | standup | 2024-12-16 0900 | 0915 | daily"
        );
    }

    #[test]
    fn test_parse_status() {
        assert!(Task::from_record("T | 1 | a").unwrap().is_done());
        assert!(!Task::from_record("T | 0 | a").unwrap().is_done());
        // Anything but "1" counts as not done
        assert!(!Task::from_record("T | yes | a").unwrap().is_done());
    }

    #[test]
    fn test_parse_event_repeat_variants() {
        let old = Task::from_record("E | 0 | meeting | Mon 2pm | 4pm").unwrap();
        let none = Task::from_record("E | 0 | meeting | Mon 2pm | 4pm | none").unwrap();
        assert_eq!(old, none);

        let daily = Task::from_record("E | 0 | standup | 2024-12-16 0900 | 0915 | daily").unwrap();
        assert_eq!(daily.recurrence(), Some(crate::model::Recurrence::Daily));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Task::from_record("CORRUPTED"),
            Err(RecordError::TooFewFields(1))
        );
        assert_eq!(Task::from_record("T | 0"), Err(RecordError::TooFewFields(2)));
        assert_eq!(Task::from_record("T | 0 | "), Err(RecordError::TooFewFields(2)));
        assert_eq!(
            Task::from_record("X | 0 | what"),
            Err(RecordError::UnknownType("X".to_string()))
        );
        assert_eq!(
            Task::from_record("D | 0 | homework"),
            Err(RecordError::MissingFields {
                code: "D",
                needed: 4,
                found: 3
            })
        );
        assert_eq!(
            Task::from_record("E | 0 | meeting | Mon"),
            Err(RecordError::MissingFields {
                code: "E",
                needed: 5,
                found: 4
            })
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let t = Task::from_record("D |  0  |  homework  | Sunday ").unwrap();
        assert_eq!(t.description(), "homework");
        assert_eq!(t.to_record(), "D | 0 | homework | Sunday");
    }
}
