//! Core types for the board engine

mod board;
mod ids;
mod log;
mod task;

pub(crate) use board::BoardSeed;
pub use board::{Board, Column, Placement, RemovedTask, TaskFilter};
pub use ids::{ColumnId, LogEntryId, TaskId};
pub use log::LogEntry;
pub use task::{Priority, Task};
