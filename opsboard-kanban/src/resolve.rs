//! Drop target resolution
//!
//! A drop target is a bare id taken from whatever the pointer was released
//! over. It may name a column (drop on the lane background) or a task (drop
//! on a card). Column ids are checked first.

use crate::error::{BoardError, Result};
use crate::types::{Board, ColumnId, Placement, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What kind of thing a drop target id referred to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DropTarget {
    Column(ColumnId),
    Task(TaskId),
}

/// A resolved drop: the target kind plus the destination slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub target: DropTarget,
    pub destination: Placement,
}

/// Classify a drop target id against the current board.
pub fn classify_target(board: &Board, target: &str) -> Option<DropTarget> {
    let column_id = ColumnId::from(target);
    if board.has_column(&column_id) {
        return Some(DropTarget::Column(column_id));
    }
    let task_id = TaskId::from(target);
    if board.contains_task(&task_id) {
        return Some(DropTarget::Task(task_id));
    }
    None
}

/// Map a drop target id to a destination column and index.
///
/// - column id: append, index is the column's current length
/// - task id: the column holding that task, at that task's index
/// - anything else: [`BoardError::UnresolvedDropTarget`]
pub fn resolve_drop(board: &Board, target: &str) -> Result<Resolution> {
    let resolution = match classify_target(board, target) {
        Some(DropTarget::Column(column_id)) => {
            let len = board.column(&column_id).map_or(0, |c| c.len());
            Resolution {
                destination: Placement::new(column_id.clone(), len),
                target: DropTarget::Column(column_id),
            }
        }
        Some(DropTarget::Task(task_id)) => {
            let destination = board
                .position_of(&task_id)
                .ok_or_else(|| BoardError::task_not_found(&task_id))?;
            Resolution {
                target: DropTarget::Task(task_id),
                destination,
            }
        }
        None => {
            return Err(BoardError::UnresolvedDropTarget {
                id: target.to_string(),
            })
        }
    };

    debug!(target, destination = %resolution.destination, "resolved drop target");
    Ok(resolution)
}
