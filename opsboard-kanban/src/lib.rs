//! Task board reordering engine
//!
//! This crate holds the state behind the operations dashboard's task board:
//! an ordered set of columns, each an ordered list of tasks, and the logic
//! for dragging a task to a new place within or across columns.
//!
//! ## Overview
//!
//! - **Board model** - [`Board`] owns placement. A task id lives in exactly
//!   one column at exactly one index; tasks carry no column reference.
//! - **Drop resolver** - [`resolve_drop`] maps a raw drop target id (column
//!   or task) to a destination column and index.
//! - **Move executor** - [`execute_move`] / [`compute_move`] apply a move as
//!   one step, restoring the task if insertion fails.
//! - **Interaction controller** - [`InteractionController`] tracks the
//!   active drag and turns drag-end events into moves. Failures cancel the
//!   drag; they never surface as errors.
//!
//! ## Basic Usage
//!
//! ```rust
//! use opsboard_kanban::{seed, DragOutcome, InteractionController};
//!
//! let mut board = seed::default_board();
//! let mut controller = InteractionController::new();
//!
//! // Drag "Website Redesign" onto the Done lane
//! controller.drag_start("1");
//! let outcome = controller.drag_end(&mut board, Some("done"));
//! assert!(matches!(outcome, DragOutcome::Moved { .. }));
//!
//! let done = board.column(&"done".into()).unwrap();
//! assert_eq!(done.tasks.last().unwrap().title, "Website Redesign");
//! ```
//!
//! Board mutations are also available as operations that feed an activity
//! log through an [`OperationProcessor`]:
//!
//! ```rust
//! use opsboard_kanban::{seed, task::AddTask, OperationProcessor};
//!
//! let mut board = seed::default_board();
//! let mut processor = OperationProcessor::default().with_actor("ops");
//! processor
//!     .process(&AddTask::new("todo", "Rotate API keys"), &mut board)
//!     .unwrap();
//! assert_eq!(processor.activity().latest().unwrap().op, "add task");
//! ```

mod controller;
mod error;
pub mod operation;
mod processor;
pub mod resolve;
pub mod seed;
pub mod sensor;
pub mod task;
pub mod types;

pub use controller::{CancelReason, DragOutcome, DragState, InteractionController};
pub use error::{BoardError, Result};
pub use operation::{Execute, ExecutionResult, Operation};
pub use processor::{ActivityLog, OperationProcessor, DEFAULT_ACTIVITY_CAPACITY};
pub use resolve::{resolve_drop, DropTarget, Resolution};
pub use sensor::{PointerSensor, SensorEvent, DEFAULT_ACTIVATION_DISTANCE};
pub use task::{compute_move, execute_move, MoveOutcome};

// Re-export commonly used types
pub use types::{
    Board, Column, ColumnId, LogEntry, Placement, Priority, RemovedTask, Task, TaskFilter, TaskId,
};
