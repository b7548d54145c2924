//! Command implementations. Each returns the text to print on stdout.

use crate::error::Result;
use crate::replay::{ReplayScript, Session};
use crate::table::{activity_table, board_table, task_list_table};
use opsboard_kanban::{seed, Board, CancelReason, DragOutcome, LogEntry, TaskFilter};
use serde_json::json;
use std::path::Path;
use tracing::info;

/// The seed file's board, or the built-in one
pub fn load_board(seed_path: Option<&Path>) -> Result<Board> {
    match seed_path {
        Some(path) => Ok(seed::load(path)?),
        None => {
            info!("using built-in board");
            Ok(seed::default_board())
        }
    }
}

/// `opsboard show`
pub fn run_show(board: &Board, filter: &TaskFilter, json: bool) -> Result<String> {
    let filtered = filter != &TaskFilter::default();
    let output = match (filtered, json) {
        (false, false) => board_table(board).to_string(),
        (false, true) => serde_json::to_string_pretty(board)?,
        (true, false) => task_list_table(board, &board.filter_tasks(filter)).to_string(),
        (true, true) => serde_json::to_string_pretty(&board.filter_tasks(filter))?,
    };
    Ok(output)
}

/// `opsboard move`
pub fn run_move(session: &mut Session, task: &str, target: &str, json: bool) -> Result<String> {
    let outcome = session.drag(task, target);
    if json {
        return Ok(serde_json::to_string_pretty(&json!({
            "outcome": outcome,
            "board": session.board(),
        }))?);
    }
    Ok(format!("{}\n{}", describe(&outcome), board_table(session.board())))
}

/// `opsboard replay`
pub fn run_replay(session: &mut Session, script: ReplayScript, json: bool) -> Result<String> {
    let steps = session.run(script);
    info!(steps = steps.len(), "replay finished");

    if json {
        let activity: Vec<&LogEntry> = session.activity().entries().collect();
        return Ok(serde_json::to_string_pretty(&json!({
            "steps": steps,
            "board": session.board(),
            "activity": activity,
        }))?);
    }

    Ok(format!(
        "{}\n\nActivity ({} entries)\n{}",
        board_table(session.board()),
        session.activity().len(),
        activity_table(session.activity().entries())
    ))
}

/// `opsboard seed`
pub fn run_seed() -> Result<String> {
    Ok(seed::to_yaml(&seed::default_board())?)
}

/// One line summary of a drag
pub fn describe(outcome: &DragOutcome) -> String {
    match outcome {
        DragOutcome::Moved { task, from, to } => format!("Moved {} from {} to {}", task, from, to),
        DragOutcome::NoOp { task } => format!("{} is already in place", task),
        DragOutcome::Cancelled { task, reason } => {
            let why = match reason {
                CancelReason::NoTarget => "released outside any column",
                CancelReason::UnresolvedTarget => "target is not a column or task",
                CancelReason::StaleTask => "task is no longer on the board",
                CancelReason::Restored => "destination unavailable, task returned",
            };
            format!("Drag of {} cancelled: {}", task, why)
        }
        DragOutcome::Ignored => "No drag in progress".to_string(),
    }
}
