//! Board-level types: Board, Column, Placement, TaskFilter
//!
//! The board is the single source of truth for task placement. Every task id
//! appears in exactly one column at exactly one index, and the only way to
//! change that is through [`Board::remove_task`] and [`Board::insert_task`].

use super::ids::{ColumnId, TaskId};
use super::task::{Priority, Task};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// A column is an ordered lane of tasks. Index order is on-screen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Set the initial tasks
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Number of tasks (the header badge count)
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the column holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Index of a task within this column
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Whether this column holds the task
    pub fn contains(&self, id: &TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Task ids in order
    pub fn task_ids(&self) -> Vec<&TaskId> {
        self.tasks.iter().map(|t| &t.id).collect()
    }
}

/// A column + index pair naming one slot on the board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub column: ColumnId,
    pub index: usize,
}

impl Placement {
    /// Create a new placement
    pub fn new(column: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            column: column.into(),
            index,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.column, self.index)
    }
}

/// A task taken off the board, with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedTask {
    pub task: Task,
    pub column: ColumnId,
    pub index: usize,
}

impl RemovedTask {
    /// The slot the task was removed from
    pub fn origin(&self) -> Placement {
        Placement::new(self.column.clone(), self.index)
    }
}

/// The board: columns in fixed order, each holding an ordered task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSeed")]
pub struct Board {
    columns: Vec<Column>,
}

/// Unvalidated board shape as it appears in seed files
#[derive(Deserialize)]
pub(crate) struct BoardSeed {
    columns: Vec<Column>,
}

impl TryFrom<BoardSeed> for Board {
    type Error = BoardError;

    fn try_from(seed: BoardSeed) -> Result<Self> {
        Board::new(seed.columns)
    }
}

impl Board {
    /// Build a board from seed columns, rejecting duplicate column or task ids
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let board = Self { columns };
        board.validate()?;
        Ok(board)
    }

    /// Check the placement invariant: unique column ids, every task id once.
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = HashSet::new();
        let mut task_ids = HashSet::new();

        for column in &self.columns {
            if !column_ids.insert(&column.id) {
                return Err(BoardError::duplicate_id("column", column.id.as_str()));
            }
            for task in &column.tasks {
                if !task_ids.insert(&task.id) {
                    return Err(BoardError::duplicate_id("task", task.id.as_str()));
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by id
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Whether a column with this id exists
    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.column(id).is_some()
    }

    /// Column ids in display order
    pub fn column_ids(&self) -> Vec<&ColumnId> {
        self.columns.iter().map(|c| &c.id).collect()
    }

    /// The column currently holding a task. `None` for stale ids.
    pub fn find_owning_column(&self, id: &TaskId) -> Option<&Column> {
        self.columns.iter().find(|c| c.contains(id))
    }

    /// Where a task currently sits
    pub fn position_of(&self, id: &TaskId) -> Option<Placement> {
        self.columns.iter().find_map(|c| {
            c.position(id)
                .map(|index| Placement::new(c.id.clone(), index))
        })
    }

    /// Look up a task by id
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks().find(|t| &t.id == id)
    }

    /// Whether the task is on the board
    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.find_owning_column(id).is_some()
    }

    /// Every task, column by column, in display order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|c| c.tasks.iter())
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Tasks matching the filter, in board order
    pub fn filter_tasks(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks().filter(|t| filter.matches(t)).collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Take a task out of its column. Later tasks in that column shift left.
    pub fn remove_task(&mut self, id: &TaskId) -> Result<RemovedTask> {
        for column in &mut self.columns {
            if let Some(index) = column.position(id) {
                let task = column.tasks.remove(index);
                debug!(task = %id, column = %column.id, index, "removed task");
                return Ok(RemovedTask {
                    task,
                    column: column.id.clone(),
                    index,
                });
            }
        }
        Err(BoardError::task_not_found(id))
    }

    /// Insert a task into a column and return the index it landed at.
    ///
    /// `index` saturates into `[0, column.len()]`, so `usize::MAX` appends.
    pub fn insert_task(&mut self, task: Task, column_id: &ColumnId, index: usize) -> Result<usize> {
        let slot = self
            .columns
            .iter()
            .position(|c| &c.id == column_id)
            .ok_or_else(|| BoardError::column_not_found(column_id))?;

        if self.contains_task(&task.id) {
            return Err(BoardError::duplicate_id("task", task.id.as_str()));
        }

        let column = &mut self.columns[slot];
        let index = index.min(column.tasks.len());
        debug!(task = %task.id, column = %column_id, index, "inserted task");
        column.tasks.insert(index, task);
        Ok(index)
    }

    /// Append a task to the end of a column
    pub fn append_task(&mut self, task: Task, column_id: &ColumnId) -> Result<usize> {
        self.insert_task(task, column_id, usize::MAX)
    }
}

/// Narrow the board to matching tasks (the task page filter)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Case-insensitive substring of the assignee name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// A filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Only tasks whose assignee contains this text
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Only tasks with this priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether a task passes the filter
    pub fn matches(&self, task: &Task) -> bool {
        let assignee_ok = self.assignee.as_ref().map_or(true, |needle| {
            task.assignee
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let priority_ok = self.priority.map_or(true, |p| task.priority == p);
        assignee_ok && priority_ok
    }
}
