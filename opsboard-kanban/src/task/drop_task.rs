//! DropTask command: a whole drag gesture as one operation

use super::{command_input, execute_move, move_result, MoveOutcome};
use crate::error::{BoardError, Result};
use crate::operation::{operation, Execute, ExecutionResult, Operation};
use crate::resolve::resolve_drop;
use crate::types::{Board, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Drop a task onto a column or another task
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DropTask {
    /// The dragged task
    pub id: TaskId,
    /// Column or task id the task was released over
    pub target: String,
}

operation!(
    DropTask,
    verb = "drop",
    noun = "task",
    description = "Drop a dragged task onto a column or task"
);

impl DropTask {
    /// Create a new DropTask command
    pub fn new(id: impl Into<TaskId>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
        }
    }

    /// Resolve the target, then move. Stale source ids fail before resolution.
    pub fn apply(&self, board: &mut Board) -> Result<MoveOutcome> {
        if !board.contains_task(&self.id) {
            return Err(BoardError::task_not_found(&self.id));
        }
        let resolution = resolve_drop(board, &self.target)?;
        execute_move(
            board,
            &self.id,
            &resolution.destination.column,
            resolution.destination.index,
        )
    }
}

impl Execute<Board, BoardError> for DropTask {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let input = match command_input(self.op_string(), self, start) {
            Ok(input) => input,
            Err(failed) => return failed,
        };
        let result = self.apply(board);
        move_result(self.op_string(), input, result, start)
    }
}
