//! Scripted drag sessions
//!
//! A [`Session`] wires a board to the interaction controller, a pointer
//! sensor, and an operation processor, then applies events one at a time.
//! Replay scripts are YAML:
//!
//! ```yaml
//! actor: night-shift
//! events:
//!   - start: "1"          # drag task 1
//!   - end: done           # drop it on the Done lane
//!   - press: { task: "2" }
//!   - pointer: { x: 0, y: 12 }
//!   - release: "3"        # drop task 2 onto task 3
//!   - add: { column: todo, title: Rotate keys, priority: High }
//!   - delete: "4"
//!   - cancel
//! ```

use crate::config::OpsboardConfig;
use crate::error::{CliError, Result};
use opsboard_kanban::task::{AddTask, DeleteTask};
use opsboard_kanban::{
    ActivityLog, Board, BoardError, DragOutcome, Execute, InteractionController, LogEntry,
    Operation, OperationProcessor, PointerSensor, SensorEvent, TaskId,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// One scripted input
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayEvent {
    /// Begin dragging a task
    Start(TaskId),
    /// Release the drag over a target, or over nothing (`~`)
    End(Option<String>),
    /// Abandon the active drag
    Cancel,
    /// Pointer pressed on a task card
    Press {
        task: TaskId,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
    },
    /// Pointer moved while pressed
    Pointer { x: f32, y: f32 },
    /// Pointer released over a target, or over nothing
    Release(Option<String>),
    Add(AddTask),
    Delete(TaskId),
}

/// A parsed replay script
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayScript {
    /// Overrides the configured actor for this replay
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

impl ReplayScript {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Read a script file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&text).map_err(|e| CliError::Script {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// What one event did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepReport {
    /// `accepted` is false when another drag was already active
    DragStarted { task: TaskId, accepted: bool },
    DragEnded { outcome: DragOutcome },
    DragCancelled { task: Option<TaskId> },
    /// Pointer input that did not start or finish a drag
    Pointer { dragging: bool },
    Applied { op: String, output: Value },
    Failed { op: String, error: String },
}

/// A board plus everything needed to drive it
#[derive(Debug)]
pub struct Session {
    board: Board,
    controller: InteractionController,
    sensor: PointerSensor,
    processor: OperationProcessor,
}

impl Session {
    pub fn new(board: Board, config: &OpsboardConfig) -> Self {
        let mut processor = OperationProcessor::new(config.activity_capacity);
        if let Some(actor) = &config.actor {
            processor = processor.with_actor(actor.clone());
        }
        Self {
            board,
            controller: InteractionController::new(),
            sensor: PointerSensor::new(config.activation_distance),
            processor,
        }
    }

    /// Attribute subsequent activity to `actor`
    pub fn set_actor(&mut self, actor: impl Into<String>) {
        self.processor = std::mem::take(&mut self.processor).with_actor(actor);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn activity(&self) -> &ActivityLog {
        self.processor.activity()
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// A complete drag gesture: start on `task`, release over `target`
    pub fn drag(&mut self, task: impl Into<TaskId>, target: &str) -> DragOutcome {
        let task = task.into();
        if !self.controller.drag_start(task.clone()) {
            self.controller.drag_cancel();
            self.controller.drag_start(task);
        }
        self.end_drag(Some(target))
    }

    /// Apply every event in a script, in order
    pub fn run(&mut self, script: ReplayScript) -> Vec<StepReport> {
        if let Some(actor) = script.actor {
            self.set_actor(actor);
        }
        script
            .events
            .into_iter()
            .map(|event| self.apply(event))
            .collect()
    }

    /// Apply one event
    pub fn apply(&mut self, event: ReplayEvent) -> StepReport {
        debug!(?event, "replay event");
        match event {
            ReplayEvent::Start(task) => {
                let accepted = self.controller.drag_start(task.clone());
                StepReport::DragStarted { task, accepted }
            }
            ReplayEvent::End(target) => StepReport::DragEnded {
                outcome: self.end_drag(target.as_deref()),
            },
            ReplayEvent::Cancel => StepReport::DragCancelled {
                task: self.controller.drag_cancel(),
            },
            ReplayEvent::Press { task, x, y } => {
                self.sensor.pointer_down(task, x, y);
                StepReport::Pointer {
                    dragging: self.controller.is_dragging(),
                }
            }
            ReplayEvent::Pointer { x, y } => match self.sensor.pointer_move(x, y) {
                Some(SensorEvent::DragStart { task }) => {
                    let accepted = self.controller.drag_start(task.clone());
                    StepReport::DragStarted { task, accepted }
                }
                _ => StepReport::Pointer {
                    dragging: self.controller.is_dragging(),
                },
            },
            ReplayEvent::Release(target) => match self.sensor.pointer_up(target.as_deref()) {
                Some(SensorEvent::DragEnd { target }) => StepReport::DragEnded {
                    outcome: self.end_drag(target.as_deref()),
                },
                _ => StepReport::Pointer {
                    dragging: self.controller.is_dragging(),
                },
            },
            ReplayEvent::Add(op) => self.process(&op),
            ReplayEvent::Delete(id) => self.process(&DeleteTask::new(id)),
        }
    }

    fn process<O>(&mut self, op: &O) -> StepReport
    where
        O: Execute<Board, BoardError>,
    {
        let name = op.op_string();
        match self.processor.process(op, &mut self.board) {
            Ok(output) => StepReport::Applied { op: name, output },
            Err(error) => StepReport::Failed {
                op: name,
                error: error.to_string(),
            },
        }
    }

    /// Finish the active drag and record it in the activity log if it moved
    fn end_drag(&mut self, target: Option<&str>) -> DragOutcome {
        let start = Instant::now();
        let task = self.controller.active_id().cloned();
        let outcome = self.controller.drag_end(&mut self.board, target);

        if outcome.moved() {
            info!(task = ?task, target, "drag applied");
            let output = serde_json::to_value(&outcome).unwrap_or(Value::Null);
            self.processor.record(LogEntry::success(
                "drop task",
                json!({ "id": task, "target": target }),
                output,
                start.elapsed().as_millis() as u64,
            ));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsboard_kanban::{seed, CancelReason, ColumnId, Placement};

    fn session() -> Session {
        Session::new(seed::default_board(), &OpsboardConfig::default())
    }

    fn ids(board: &Board, column: &str) -> Vec<String> {
        board
            .column(&ColumnId::from(column))
            .unwrap()
            .task_ids()
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn test_parse_script() {
        let script = ReplayScript::from_yaml(
            r#"
actor: night-shift
events:
  - start: "1"
  - end: done
  - end: ~
  - cancel
  - press: { task: "2", x: 1.5 }
  - pointer: { x: 0, y: 12 }
  - release: "3"
  - add: { column: todo, title: Rotate keys, priority: High }
  - delete: "4"
"#,
        )
        .unwrap();

        assert_eq!(script.actor.as_deref(), Some("night-shift"));
        assert_eq!(script.events.len(), 9);
        assert!(matches!(&script.events[1], ReplayEvent::End(Some(t)) if t == "done"));
        assert!(matches!(script.events[2], ReplayEvent::End(None)));
        assert!(matches!(script.events[3], ReplayEvent::Cancel));
        assert!(matches!(script.events[4], ReplayEvent::Press { x, y, .. } if x == 1.5 && y == 0.0));
    }

    #[test]
    fn test_drag_to_column_is_logged() {
        let mut session = session();
        let outcome = session.drag("1", "done");
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                task: "1".into(),
                from: Placement::new("todo", 0),
                to: Placement::new("done", 1),
            }
        );
        assert_eq!(ids(session.board(), "done"), vec!["5", "1"]);

        let entry = session.activity().latest().unwrap();
        assert_eq!(entry.op, "drop task");
        assert_eq!(entry.input["target"], "done");
        assert_eq!(entry.output["outcome"], "moved");
    }

    #[test]
    fn test_cancelled_drag_is_not_logged() {
        let mut session = session();
        let before = session.board().clone();
        let outcome = session.drag("1", "archive");
        assert_eq!(
            outcome,
            DragOutcome::Cancelled {
                task: "1".into(),
                reason: CancelReason::UnresolvedTarget
            }
        );
        assert_eq!(session.board(), &before);
        assert!(session.activity().is_empty());
    }

    #[test]
    fn test_run_script() {
        let mut session = session();
        let script = ReplayScript::from_yaml(
            r#"
actor: night-shift
events:
  - start: "2"
  - start: "1"
  - end: "1"
  - add: { column: review, title: Rotate keys, id: k1 }
  - delete: "missing"
"#,
        )
        .unwrap();

        let steps = session.run(script);
        assert_eq!(
            steps[1],
            StepReport::DragStarted {
                task: "1".into(),
                accepted: false
            }
        );
        assert!(matches!(&steps[2], StepReport::DragEnded { outcome } if outcome.moved()));
        assert!(matches!(&steps[3], StepReport::Applied { op, .. } if op == "add task"));
        assert!(matches!(&steps[4], StepReport::Failed { op, .. } if op == "delete task"));

        assert_eq!(ids(session.board(), "todo"), vec!["2", "1"]);
        assert_eq!(ids(session.board(), "review"), vec!["4", "k1"]);

        let ops: Vec<_> = session.activity().entries().map(|e| e.op.as_str()).collect();
        assert_eq!(ops, vec!["delete task", "add task", "drop task"]);
        assert!(session
            .activity()
            .entries()
            .all(|e| e.actor.as_deref() == Some("night-shift")));
    }

    #[test]
    fn test_pointer_events_respect_activation_distance() {
        let mut session = session();
        let steps = session.run(ReplayScript {
            actor: None,
            events: vec![
                ReplayEvent::Press {
                    task: "3".into(),
                    x: 0.0,
                    y: 0.0,
                },
                ReplayEvent::Pointer { x: 3.0, y: 0.0 },
                ReplayEvent::Release(Some("done".into())),
            ],
        });
        assert_eq!(steps[2], StepReport::Pointer { dragging: false });
        assert_eq!(ids(session.board(), "inprogress"), vec!["3"]);

        let steps = session.run(ReplayScript {
            actor: None,
            events: vec![
                ReplayEvent::Press {
                    task: "3".into(),
                    x: 0.0,
                    y: 0.0,
                },
                ReplayEvent::Pointer { x: 0.0, y: 20.0 },
                ReplayEvent::Release(Some("done".into())),
            ],
        });
        assert!(matches!(steps[1], StepReport::DragStarted { accepted: true, .. }));
        assert!(matches!(&steps[2], StepReport::DragEnded { outcome } if outcome.moved()));
        assert_eq!(ids(session.board(), "done"), vec!["5", "3"]);
    }

    #[test]
    fn test_delete_mid_drag_cancels() {
        let mut session = session();
        session.apply(ReplayEvent::Start("4".into()));
        session.apply(ReplayEvent::Delete("4".into()));
        let step = session.apply(ReplayEvent::End(Some("todo".into())));
        assert_eq!(
            step,
            StepReport::DragEnded {
                outcome: DragOutcome::Cancelled {
                    task: "4".into(),
                    reason: CancelReason::StaleTask
                }
            }
        );
        assert_eq!(session.board().task_count(), 4);
    }

    #[test]
    fn test_load_reports_path_on_bad_script() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("script.yaml");
        std::fs::write(&path, "events:\n  - teleport: 1\n").unwrap();
        let err = ReplayScript::load(&path).unwrap_err();
        assert!(matches!(err, CliError::Script { .. }));
        assert!(err.to_string().contains("script.yaml"));
    }
}
