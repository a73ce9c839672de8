// File: ./src/model/item.rs
use crate::model::datetime::TimeField;
use crate::model::recurrence::Recurrence;

/// What distinguishes one kind of task from another.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TaskKind {
    Plain,
    Deadline {
        due: TimeField,
    },
    Event {
        from: TimeField,
        to: TimeField,
        /// Raw text given after `/repeat`. `None` when the event does not repeat.
        repeat: Option<String>,
    },
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Task {
    description: String,
    is_done: bool,
    kind: TaskKind,
}

impl Task {
    // The entity does not check for an empty description; the parser does.
    fn with_kind(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            is_done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::with_kind(description, TaskKind::Plain)
    }

    pub fn deadline(description: impl Into<String>, due: impl Into<String>) -> Self {
        Self::with_kind(
            description,
            TaskKind::Deadline {
                due: TimeField::new(due),
            },
        )
    }

    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        repeat: Option<&str>,
    ) -> Self {
        // "none" is the stored spelling of "no recurrence"
        let repeat = repeat
            .map(str::trim)
            .filter(|r| !r.is_empty() && Recurrence::from_raw(r) != Some(Recurrence::Never))
            .map(str::to_string);
        Self::with_kind(
            description,
            TaskKind::Event {
                from: TimeField::new(from),
                to: TimeField::new(to),
                repeat,
            },
        )
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn mark_done(&mut self) {
        self.is_done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.is_done = false;
    }

    /// Single-letter tag used both on screen and in the task file.
    pub fn type_code(&self) -> &'static str {
        match self.kind {
            TaskKind::Plain => "T",
            TaskKind::Deadline { .. } => "D",
            TaskKind::Event { .. } => "E",
        }
    }

    /// Recognized repeat interval, if any. Unknown names yield `None`.
    pub fn recurrence(&self) -> Option<Recurrence> {
        match &self.kind {
            TaskKind::Event {
                repeat: Some(raw), ..
            } => Recurrence::from_raw(raw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_not_done() {
        let t = Task::todo("read book");
        assert_eq!(t.description(), "read book");
        assert!(!t.is_done());
        assert_eq!(t.type_code(), "T");
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut t = Task::deadline("return book", "Sunday");
        t.mark_done();
        t.mark_done();
        assert!(t.is_done());
        t.mark_not_done();
        t.mark_not_done();
        assert!(!t.is_done());
    }

    #[test]
    fn test_deadline_keeps_raw_and_parsed() {
        let t = Task::deadline("homework", "2019-12-15 1800");
        let TaskKind::Deadline { due } = t.kind() else {
            panic!("expected deadline");
        };
        assert_eq!(due.raw(), "2019-12-15 1800");
        assert!(due.instant().is_some());
    }

    #[test]
    fn test_event_fields_parse_independently() {
        let t = Task::event("trip", "2019-12-10", "evening", None);
        let TaskKind::Event { from, to, repeat } = t.kind() else {
            panic!("expected event");
        };
        assert!(!from.is_opaque());
        assert!(from.instant().is_none());
        assert!(to.is_opaque());
        assert!(repeat.is_none());
    }

    #[test]
    fn test_event_repeat_none_is_dropped() {
        let t = Task::event("sync", "Mon", "Tue", Some("none"));
        assert_eq!(
            t.kind(),
            &TaskKind::Event {
                from: TimeField::new("Mon"),
                to: TimeField::new("Tue"),
                repeat: None
            }
        );
        assert_eq!(t.recurrence(), None);
    }

    #[test]
    fn test_event_keeps_unknown_repeat_text() {
        let t = Task::event("sync", "Mon", "Tue", Some("fortnightly"));
        let TaskKind::Event { repeat, .. } = t.kind() else {
            panic!("expected event");
        };
        assert_eq!(repeat.as_deref(), Some("fortnightly"));
        assert_eq!(t.recurrence(), None);

        let t = Task::event("sync", "Mon", "Tue", Some("weekly"));
        assert_eq!(t.recurrence(), Some(Recurrence::Weekly));
    }
}
