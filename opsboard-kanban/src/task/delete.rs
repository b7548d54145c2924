//! DeleteTask command

use super::{command_input, logged_result};
use crate::error::{BoardError, Result};
use crate::operation::{operation, Execute, ExecutionResult, Operation};
use crate::types::{Board, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

/// Remove a task from the board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

operation!(
    DeleteTask,
    verb = "delete",
    noun = "task",
    description = "Delete a task from the board"
);

impl DeleteTask {
    /// Create a new DeleteTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, board: &mut Board) -> Result<Value> {
        let removed = board.remove_task(&self.id)?;
        info!(task = %self.id, column = %removed.column, index = removed.index, "deleted task");
        Ok(json!({
            "task": removed.task,
            "column": removed.column,
            "index": removed.index,
        }))
    }
}

impl Execute<Board, BoardError> for DeleteTask {
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
