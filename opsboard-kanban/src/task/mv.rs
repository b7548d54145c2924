//! Move executor and the MoveTask command
//!
//! A move is remove-then-insert as one step. The destination index is the
//! slot the task should occupy once the move is done, so within a column
//! `[A, B, C, D]` moving A to index 2 gives `[B, C, A, D]`. Indices past the
//! end saturate, which is how "append" works in both the same-column and
//! cross-column cases.

use super::{command_input, move_result};
use crate::error::{BoardError, Result};
use crate::operation::{operation, Execute, ExecutionResult, Operation};
use crate::types::{Board, Column, ColumnId, Placement, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// What a move did to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The task now sits at `to`
    Moved {
        task: TaskId,
        from: Placement,
        to: Placement,
    },
    /// The destination was the task's current slot; nothing was touched
    NoOp { task: TaskId, at: Placement },
    /// Insertion failed after removal and the task was put back at `at`
    Restored {
        task: TaskId,
        at: Placement,
        reason: String,
    },
}

impl MoveOutcome {
    /// The task this move was about
    pub fn task(&self) -> &TaskId {
        match self {
            Self::Moved { task, .. } | Self::NoOp { task, .. } | Self::Restored { task, .. } => {
                task
            }
        }
    }

    /// Whether the board is different afterwards
    pub fn changed(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Move a task to `index` in `column`, in place.
///
/// Moving down onto a task in the same column places the dragged task after
/// that task: in `[A, B, C, D]`, dropping A on D gives `[B, C, D, A]`.
///
/// Fails only when the source task is not on the board; the board is then
/// untouched. If the destination column is missing the task is restored to
/// its origin and [`MoveOutcome::Restored`] is returned.
pub fn execute_move(
    board: &mut Board,
    source: &TaskId,
    column: &ColumnId,
    index: usize,
) -> Result<MoveOutcome> {
    let from = board
        .position_of(source)
        .ok_or_else(|| BoardError::task_not_found(source))?;

    if &from.column == column {
        // The task's own slot closes on removal, so len - 1 is the last index.
        let len = board.column(column).map_or(0, Column::len);
        if index.min(len.saturating_sub(1)) == from.index {
            debug!(task = %source, at = %from, "move resolves to current slot");
            return Ok(MoveOutcome::NoOp {
                task: source.clone(),
                at: from,
            });
        }
    }

    let removed = board.remove_task(source)?;
    match board.insert_task(removed.task.clone(), column, index) {
        Ok(landed) => {
            let to = Placement::new(column.clone(), landed);
            info!(task = %source, %from, %to, "moved task");
            Ok(MoveOutcome::Moved {
                task: source.clone(),
                from,
                to,
            })
        }
        Err(error) => {
            warn!(task = %source, origin = %from, %error, "insert failed, restoring task");
            board.insert_task(removed.task, &removed.column, removed.index)?;
            Ok(MoveOutcome::Restored {
                task: source.clone(),
                at: from,
                reason: error.to_string(),
            })
        }
    }
}

/// Pure form of [`execute_move`]: returns the next board, leaves `board` alone.
pub fn compute_move(
    board: &Board,
    source: &TaskId,
    column: &ColumnId,
    index: usize,
) -> Result<Board> {
    let mut next = board.clone();
    execute_move(&mut next, source, column, index)?;
    Ok(next)
}

/// Move a task to a column, at an index or at the end
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// Destination column
    pub column: ColumnId,
    /// Destination index; `None` appends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to a different column or position"
);

impl MoveTask {
    /// Move to a specific slot
    pub fn new(id: impl Into<TaskId>, column: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
            index: Some(index),
        }
    }

    /// Move to the end of a column
    pub fn to_column(id: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
            index: None,
        }
    }
}

impl Execute<Board, BoardError> for MoveTask {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let input = match command_input(self.op_string(), self, start) {
            Ok(input) => input,
            Err(failed) => return failed,
        };

        let result = execute_move(
            board,
            &self.id,
            &self.column,
            self.index.unwrap_or(usize::MAX),
        );

        move_result(self.op_string(), input, result, start)
    }
}
