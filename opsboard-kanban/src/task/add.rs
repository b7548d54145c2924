//! AddTask command

use super::{command_input, logged_result};
use crate::error::{BoardError, Result};
use crate::operation::{operation, Execute, ExecutionResult, Operation};
use crate::types::{Board, ColumnId, Priority, Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

/// Add a new task to a column. Appends unless an index is given.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    /// Column to add the task to
    pub column: ColumnId,
    /// The task title (required)
    pub title: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Explicit id; a ULID is generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Insertion index, clamped to the column length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Create a new task in a column"
);

impl AddTask {
    /// Create a new AddTask command with a column and title
    pub fn new(column: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            title: title.into(),
            assignee: String::new(),
            description: None,
            priority: Priority::default(),
            due_date: None,
            id: None,
            index: None,
        }
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Use an explicit task id
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Insert at an index instead of appending
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    fn build_task(&self) -> Task {
        Task {
            id: self.id.clone().unwrap_or_default(),
            title: self.title.clone(),
            description: self.description.clone(),
            assignee: self.assignee.clone(),
            priority: self.priority,
            due_date: self.due_date,
        }
    }

    fn apply(&self, board: &mut Board) -> Result<Value> {
        if self.title.trim().is_empty() {
            return Err(BoardError::invalid_value("title", "must not be empty"));
        }

        let task = self.build_task();
        let index = board.insert_task(task.clone(), &self.column, self.index.unwrap_or(usize::MAX))?;
        info!(task = %task.id, column = %self.column, index, "added task");

        Ok(json!({
            "task": task,
            "column": self.column,
            "index": index,
        }))
    }
}

impl Execute<Board, BoardError> for AddTask {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let input = match command_input(self.op_string(), self, start) {
            Ok(input) => input,
            Err(failed) => return failed,
        };
        let result = self.apply(board);
        logged_result(self.op_string(), input, result, start)
    }
}
