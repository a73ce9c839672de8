// File: ./src/model/mod.rs
pub mod adapter;
pub mod datetime;
pub mod display;
pub mod item;
pub mod parser;
pub mod recurrence;

pub use adapter::RecordError;
pub use datetime::{DateType, TimeField};
pub use display::TaskDisplay;
pub use item::{Task, TaskKind};
pub use parser::{Command, EventParts};
pub use recurrence::{Recurrence, RecurrenceEngine};
