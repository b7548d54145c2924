//! Operation processor with an in-memory activity log

use crate::error::{BoardError, Result};
use crate::operation::Execute;
use crate::types::{Board, LogEntry};
use serde_json::Value;
use std::collections::VecDeque;
use tracing::debug;

/// Default number of entries kept in the activity log
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 100;

/// Bounded, newest-first record of board operations
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl ActivityLog {
    /// Create a log that keeps at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Add an entry at the front, dropping the oldest past capacity
    pub fn record(&mut self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_CAPACITY)
    }
}

/// Runs board operations and records the logged ones
#[derive(Debug, Clone, Default)]
pub struct OperationProcessor {
    actor: Option<String>,
    activity: ActivityLog,
}

impl OperationProcessor {
    /// Create a processor with the given activity capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            actor: None,
            activity: ActivityLog::new(capacity),
        }
    }

    /// Attribute every logged operation to `actor`
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Execute an operation against the board, logging it if it asks to be.
    pub fn process<O>(&mut self, op: &O, board: &mut Board) -> Result<Value>
    where
        O: Execute<Board, BoardError>,
    {
        let (result, log_entry) = op.execute(board).split();
        if let Some(entry) = log_entry {
            self.record(entry);
        } else {
            debug!(op = %op.op_string(), "operation not logged");
        }
        result
    }

    /// Record an entry produced outside [`process`](Self::process)
    pub fn record(&mut self, mut entry: LogEntry) {
        if entry.actor.is_none() {
            entry.actor = self.actor.clone();
        }
        self.activity.record(entry);
    }

    /// The activity log
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{AddTask, DeleteTask, MoveTask};
    use crate::types::{Column, Task};

    fn board() -> Board {
        Board::new(vec![
            Column::new("todo", "To Do").with_tasks(vec![Task::new("One", "A").with_id("1")]),
            Column::new("done", "Done"),
        ])
        .unwrap()
    }

    #[test]
    fn test_process_logs_newest_first() {
        let mut board = board();
        let mut processor = OperationProcessor::default().with_actor("ops");

        processor
            .process(&AddTask::new("todo", "Two").with_id("2"), &mut board)
            .unwrap();
        processor
            .process(&MoveTask::to_column("1", "done"), &mut board)
            .unwrap();

        let ops: Vec<_> = processor.activity().entries().map(|e| e.op.as_str()).collect();
        assert_eq!(ops, vec!["move task", "add task"]);
        assert_eq!(
            processor.activity().latest().unwrap().actor.as_deref(),
            Some("ops")
        );
    }

    #[test]
    fn test_noop_not_logged() {
        let mut board = board();
        let mut processor = OperationProcessor::default();
        processor
            .process(&MoveTask::new("1", "todo", 0), &mut board)
            .unwrap();
        assert!(processor.activity().is_empty());
    }

    #[test]
    fn test_failure_logged_and_returned() {
        let mut board = board();
        let mut processor = OperationProcessor::default();
        let err = processor
            .process(&DeleteTask::new("missing"), &mut board)
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(processor.activity().latest().unwrap().is_failure());
    }

    #[test]
    fn test_capacity_bound() {
        let mut log = ActivityLog::new(2);
        for i in 0..5 {
            log.record(LogEntry::success(format!("op {}", i), Value::Null, Value::Null, 0));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().op, "op 4");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut log = ActivityLog::new(0);
        log.record(LogEntry::success("op", Value::Null, Value::Null, 0));
        assert!(log.is_empty());
    }
}
