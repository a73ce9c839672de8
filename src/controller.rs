// File: src/controller.rs
//! Command-in, reply-out core of the tracker.
//! Owns the task list and its storage; every successful mutation is written
//! back to disk before the reply is produced. Front ends (the `echo` binary,
//! tests) only feed lines in and print what comes back.
use crate::error::{EchoError, EchoResult};
use crate::model::display::{format_list_item, format_task_count};
use crate::model::{Command, EventParts, Task};
use crate::storage::{SkippedLine, Storage};
use crate::store::TaskList;
use anyhow::Result;

/// What the front end should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    /// Nothing to print (blank input).
    Silent,
    /// The session is over.
    Exit,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Reply::Message(text.into())
    }
}

pub struct TaskController {
    tasks: TaskList,
    storage: Storage,
    skipped: Vec<SkippedLine>,
}

impl TaskController {
    /// Loads the task file behind `storage`. Unreadable lines are skipped and
    /// remembered in `skipped_lines()`.
    pub fn open(storage: Storage) -> Result<Self> {
        let report = storage.load()?;
        Ok(Self {
            tasks: report.tasks,
            storage,
            skipped: report.skipped,
        })
    }

    pub fn with_tasks(storage: Storage, tasks: TaskList) -> Self {
        Self {
            tasks,
            storage,
            skipped: Vec::new(),
        }
    }

    /// Like `open`, but a file that cannot be read at all leaves the list
    /// empty instead of failing. The error, if any, comes back alongside.
    pub fn open_or_empty(storage: Storage) -> (Self, Option<EchoError>) {
        match storage.load() {
            Ok(report) => (
                Self {
                    tasks: report.tasks,
                    storage,
                    skipped: report.skipped,
                },
                None,
            ),
            Err(e) => {
                log::error!("Could not load {:?}: {:#}", storage.path(), e);
                (
                    Self::with_tasks(storage, TaskList::new()),
                    Some(EchoError::Unexpected(e)),
                )
            }
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn skipped_lines(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// "Loaded 3 task(s) from file." plus a note about skipped lines, if any.
    pub fn load_summary(&self) -> String {
        let mut summary = format!("Loaded {} task(s) from file.", self.tasks.len());
        if !self.skipped.is_empty() {
            summary.push_str(&format!(
                "\nSkipped {} unreadable line(s).",
                self.skipped.len()
            ));
        }
        summary
    }

    /// Parses and runs one line. Failures become the reply text; only `bye`
    /// ends the session.
    pub fn handle(&mut self, input: &str) -> Reply {
        match Command::parse(input).and_then(|cmd| self.execute(cmd)) {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_user_input() {
                    log::debug!("Rejected input {:?}: {}", input, e);
                } else {
                    log::error!("Command {:?} failed: {}", input, e);
                }
                Reply::Message(e.to_string())
            }
        }
    }

    /// Reply for a line the front end could not read (e.g. not UTF-8).
    /// The session carries on.
    pub fn handle_unreadable(&self, err: std::io::Error) -> Reply {
        log::warn!("Unreadable input line: {}", err);
        let err = EchoError::Unexpected(anyhow::Error::new(err).context("could not read input"));
        Reply::Message(err.to_string())
    }

    pub fn execute(&mut self, command: Command) -> EchoResult<Reply> {
        match command {
            Command::Empty => Ok(Reply::Silent),
            Command::Bye => Ok(Reply::Exit),
            Command::List => Ok(self.list()),
            Command::Find { keyword } => Ok(self.find(&keyword)),
            Command::Todo { description } => self.add(Task::todo(description)),
            Command::Deadline { description, due } => self.add(Task::deadline(description, due)),
            Command::Event(EventParts {
                description,
                from,
                to,
                repeat,
            }) => self.add(Task::event(description, from, to, repeat.as_deref())),
            Command::Mark(number) => {
                let idx = self.resolve(number)?;
                self.tasks.get_mut(idx).mark_done();
                self.persist()?;
                Ok(Reply::message(format!(
                    "Nice! I've marked this task as done:\n  {}",
                    self.tasks.get(idx)
                )))
            }
            Command::Unmark(number) => {
                let idx = self.resolve(number)?;
                self.tasks.get_mut(idx).mark_not_done();
                self.persist()?;
                Ok(Reply::message(format!(
                    "OK, I've marked this task as not done yet:\n  {}",
                    self.tasks.get(idx)
                )))
            }
            Command::Delete(number) => {
                let idx = self.resolve(number)?;
                let removed = self.tasks.remove(idx);
                self.persist()?;
                Ok(Reply::message(format!(
                    "Noted. I've removed this task:\n  {}\n{}",
                    removed,
                    self.count_line()
                )))
            }
            Command::Clear => {
                self.tasks.clear();
                self.persist()?;
                Ok(Reply::message("All tasks have been cleared!"))
            }
        }
    }

    fn add(&mut self, task: Task) -> EchoResult<Reply> {
        let shown = task.to_string();
        self.tasks.add(task);
        self.persist()?;
        Ok(Reply::message(format!(
            "Got it. I've added this task:\n  {}\n{}",
            shown,
            self.count_line()
        )))
    }

    fn list(&self) -> Reply {
        if self.tasks.is_empty() {
            return Reply::message("Your task list is empty.");
        }
        Reply::message(Self::numbered("Here are the tasks in your list:", &self.tasks))
    }

    fn find(&self, keyword: &str) -> Reply {
        let found = self.tasks.find(keyword);
        if found.is_empty() {
            return Reply::message("No matching tasks found.");
        }
        Reply::message(Self::numbered("Here are the matching tasks in your list:", &found))
    }

    fn numbered(header: &str, tasks: &TaskList) -> String {
        let mut lines = vec![header.to_string()];
        lines.extend(tasks.iter().enumerate().map(|(i, t)| format_list_item(i, t)));
        lines.join("\n")
    }

    fn count_line(&self) -> String {
        format!(
            "Now you have {} in the list.",
            format_task_count(self.tasks.len())
        )
    }

    /// 1-based task number to list index.
    fn resolve(&self, number: usize) -> EchoResult<usize> {
        if self.tasks.is_empty() {
            return Err(EchoError::user(
                "Task number doesn't exist. Your task list is empty.",
            ));
        }
        if number == 0 || number > self.tasks.len() {
            return Err(EchoError::user(format!(
                "Task number doesn't exist. Please provide a number between 1 and {}.",
                self.tasks.len()
            )));
        }
        Ok(number - 1)
    }

    // The in-memory list keeps the change even when the write fails.
    fn persist(&self) -> EchoResult<()> {
        self.storage.save(&self.tasks)?;
        Ok(())
    }
}
