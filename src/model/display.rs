// File: ./src/model/display.rs
use crate::model::datetime::format_short;
use crate::model::item::{Task, TaskKind};
use crate::model::recurrence::{PREVIEW_COUNT, RecurrenceEngine};
use std::fmt;

pub trait TaskDisplay {
    fn status_icon(&self) -> &'static str;
    fn occurrence_preview(&self) -> Option<String>;
}

impl TaskDisplay for Task {
    fn status_icon(&self) -> &'static str {
        if self.is_done() { "X" } else { " " }
    }

    /// "Dec 17, Dec 18, Dec 19", or `None` when nothing is projected.
    fn occurrence_preview(&self) -> Option<String> {
        let upcoming = RecurrenceEngine::for_task(self, PREVIEW_COUNT);
        if upcoming.is_empty() {
            return None;
        }
        Some(
            upcoming
                .iter()
                .map(format_short)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.type_code(),
            self.status_icon(),
            self.description()
        )?;
        match self.kind() {
            TaskKind::Plain => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", due),
            TaskKind::Event { from, to, .. } => {
                write!(f, " (from: {} to: {})", from, to)?;
                if let Some(next) = self.occurrence_preview() {
                    write!(f, " (next: {})", next)?;
                }
                Ok(())
            }
        }
    }
}

/// "1 task", "2 tasks".
pub fn format_task_count(count: usize) -> String {
    format!("{} {}", count, if count == 1 { "task" } else { "tasks" })
}

/// One numbered line of a listing; `index` is 0-based.
pub fn format_list_item(index: usize, task: &Task) -> String {
    format!("{}.{}", index + 1, task)
}
