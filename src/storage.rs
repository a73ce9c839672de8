// File: src/storage.rs
// Flat-file persistence of the task list, one record per line.
use crate::model::adapter::RecordError;
use crate::model::Task;
use crate::store::TaskList;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A line of the task file that could not be read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based.
    pub line: usize,
    pub reason: RecordError,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub tasks: TaskList,
    pub skipped: Vec<SkippedLine>,
}

/// Reads one record. Exposed for tests and tooling.
pub fn parse_record(line: &str) -> Result<Task, RecordError> {
    Task::from_record(line)
}

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
    atomic: bool,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic: false,
        }
    }

    /// Write through a temporary file and rename it over the target.
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every readable record. A missing file is an empty list; broken
    /// lines, including ones that are not UTF-8, are skipped and reported.
    pub fn load(&self) -> Result<LoadReport> {
        self.ensure_parent_dir();
        if !self.path.exists() {
            log::debug!("No task file at {:?}, starting empty", self.path);
            return Ok(LoadReport::default());
        }
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Failed to read task file {:?}", self.path))?;

        let mut report = LoadReport::default();
        for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let parsed = match std::str::from_utf8(raw) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => Task::from_record(line),
                Err(_) => Err(RecordError::InvalidEncoding),
            };
            match parsed {
                Ok(task) => report.tasks.add(task),
                Err(reason) => {
                    log::warn!(
                        "Skipping line {} of {:?}: {} ({:?})",
                        idx + 1,
                        self.path,
                        reason,
                        String::from_utf8_lossy(raw)
                    );
                    report.skipped.push(SkippedLine {
                        line: idx + 1,
                        reason,
                    });
                }
            }
        }
        log::info!(
            "Loaded {} task(s) from {:?}, skipped {}",
            report.tasks.len(),
            self.path,
            report.skipped.len()
        );
        Ok(report)
    }

    // A failure here is left for `save` to report.
    fn ensure_parent_dir(&self) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            log::warn!("Could not create {:?}: {}", parent, e);
        }
    }

    /// Overwrites the file with the whole list.
    pub fn save(&self, tasks: &TaskList) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::new();
        for task in tasks {
            content.push_str(&task.to_record());
            content.push('\n');
        }

        if self.atomic {
            Self::atomic_write(&self.path, content)?;
        } else {
            fs::write(&self.path, content)?;
        }
        log::debug!("Saved {} task(s) to {:?}", tasks.len(), self.path);
        Ok(())
    }

    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> io::Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }
}
