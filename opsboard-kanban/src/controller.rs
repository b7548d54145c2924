//! Drag interaction state machine
//!
//! ```text
//!            drag_start                 drag_end(target)
//!   Idle ───────────────▶ Dragging ─────────────────────▶ Resolving ──▶ Idle
//!     ▲                      │                               (resolve + move,
//!     └──────────────────────┘                                same call)
//!            drag_cancel / drag_end(None)
//! ```
//!
//! The controller never owns the board. Each call borrows it, so the only
//! way another gesture can start is after the current call has returned.
//! Failures during resolution are swallowed and reported as a cancelled
//! outcome; the board is left exactly as it was.

use crate::error::BoardError;
use crate::resolve::resolve_drop;
use crate::sensor::SensorEvent;
use crate::task::{execute_move, MoveOutcome};
use crate::types::{Board, Placement, Task, TaskId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Where the controller is in a drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "task", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging(TaskId),
    /// Only visible inside `drag_end`
    Resolving(TaskId),
}

/// Why a drag ended without moving anything
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// Released outside any drop target, or cancelled explicitly
    NoTarget,
    /// The target id matched no column or task
    UnresolvedTarget,
    /// The dragged task is no longer on the board
    StaleTask,
    /// Insertion failed and the task went back to its origin
    Restored,
}

/// Result of a drag-end event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DragOutcome {
    Moved {
        task: TaskId,
        from: Placement,
        to: Placement,
    },
    NoOp {
        task: TaskId,
    },
    Cancelled {
        task: TaskId,
        reason: CancelReason,
    },
    /// drag_end arrived while idle
    Ignored,
}

impl DragOutcome {
    /// Whether the board changed
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Tracks the active drag subject and applies drops to a board
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: DragState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// The task being dragged, if any
    pub fn active_id(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Dragging(id) | DragState::Resolving(id) => Some(id),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active_id().is_some()
    }

    /// The dragged task record for a floating preview. `None` if the task
    /// was deleted mid-drag.
    pub fn active_task<'b>(&self, board: &'b Board) -> Option<&'b Task> {
        self.active_id().and_then(|id| board.task(id))
    }

    /// Begin dragging `task`. Returns false (and changes nothing) if a drag
    /// is already active.
    pub fn drag_start(&mut self, task: impl Into<TaskId>) -> bool {
        let task = task.into();
        match &self.state {
            DragState::Idle => {
                debug!(task = %task, "drag started");
                self.state = DragState::Dragging(task);
                true
            }
            DragState::Dragging(active) | DragState::Resolving(active) => {
                debug!(task = %task, active = %active, "drag already active, ignoring start");
                false
            }
        }
    }

    /// Abandon the current drag without moving anything
    pub fn drag_cancel(&mut self) -> Option<TaskId> {
        let task = self.active_id().cloned();
        if let Some(task) = &task {
            debug!(task = %task, "drag cancelled");
        }
        self.state = DragState::Idle;
        task
    }

    /// Finish the drag: resolve `target` and move the task. Always returns
    /// to idle, whatever happened.
    pub fn drag_end(&mut self, board: &mut Board, target: Option<&str>) -> DragOutcome {
        let task = match std::mem::take(&mut self.state) {
            DragState::Dragging(task) | DragState::Resolving(task) => task,
            DragState::Idle => {
                debug!("drag end while idle");
                return DragOutcome::Ignored;
            }
        };

        let Some(target) = target else {
            debug!(task = %task, "dropped outside any target");
            return DragOutcome::Cancelled {
                task,
                reason: CancelReason::NoTarget,
            };
        };

        self.state = DragState::Resolving(task.clone());
        let outcome = Self::resolve_and_move(board, task, target);
        self.state = DragState::Idle;
        outcome
    }

    /// Feed a sensor event. Returns the outcome for drag ends.
    pub fn handle(&mut self, board: &mut Board, event: SensorEvent) -> Option<DragOutcome> {
        match event {
            SensorEvent::DragStart { task } => {
                self.drag_start(task);
                None
            }
            SensorEvent::DragEnd { target } => Some(self.drag_end(board, target.as_deref())),
        }
    }

    fn resolve_and_move(board: &mut Board, task: TaskId, target: &str) -> DragOutcome {
        if !board.contains_task(&task) {
            warn!(task = %task, target, "dragged task no longer on board");
            return DragOutcome::Cancelled {
                task,
                reason: CancelReason::StaleTask,
            };
        }

        let resolution = match resolve_drop(board, target) {
            Ok(resolution) => resolution,
            Err(error) => {
                warn!(task = %task, target, %error, "drop target did not resolve");
                return DragOutcome::Cancelled {
                    task,
                    reason: CancelReason::UnresolvedTarget,
                };
            }
        };

        let destination = resolution.destination;
        match execute_move(board, &task, &destination.column, destination.index) {
            Ok(MoveOutcome::Moved { task, from, to }) => DragOutcome::Moved { task, from, to },
            Ok(MoveOutcome::NoOp { task, .. }) => DragOutcome::NoOp { task },
            Ok(MoveOutcome::Restored { task, .. }) => DragOutcome::Cancelled {
                task,
                reason: CancelReason::Restored,
            },
            Err(error) => {
                warn!(task = %task, %error, "move failed");
                let reason = match error {
                    BoardError::TaskNotFound { .. } => CancelReason::StaleTask,
                    _ => CancelReason::UnresolvedTarget,
                };
                DragOutcome::Cancelled { task, reason }
            }
        }
    }
}
