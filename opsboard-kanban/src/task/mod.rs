//! Task commands

mod add;
mod delete;
mod drop_task;
mod mv;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use drop_task::DropTask;
pub use mv::{compute_move, execute_move, MoveOutcome, MoveTask};

use crate::error::{BoardError, Result};
use crate::operation::ExecutionResult;
use crate::types::LogEntry;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

fn failed(
    op: String,
    input: Value,
    error: BoardError,
    start: Instant,
) -> ExecutionResult<Value, BoardError> {
    let message = error.to_string();
    ExecutionResult::Failed {
        error,
        log_entry: Some(LogEntry::failure(op, input, &message, elapsed_ms(start))),
    }
}

/// Serialize a command as the input recorded in its log entry.
///
/// On failure the command is reported as failed before it touches the board.
pub(crate) fn command_input<T: Serialize>(
    op: String,
    command: &T,
    start: Instant,
) -> std::result::Result<Value, ExecutionResult<Value, BoardError>> {
    serde_json::to_value(command).map_err(|error| failed(op, Value::Null, error.into(), start))
}

/// Wrap a mutating command's result: success is logged, failure is logged.
pub(crate) fn logged_result(
    op: String,
    input: Value,
    result: Result<Value>,
    start: Instant,
) -> ExecutionResult<Value, BoardError> {
    match result {
        Ok(value) => ExecutionResult::Logged {
            log_entry: LogEntry::success(op, input, value.clone(), elapsed_ms(start)),
            value,
        },
        Err(error) => failed(op, input, error, start),
    }
}

/// Wrap a move's result: only moves that changed the board are logged.
pub(crate) fn move_result(
    op: String,
    input: Value,
    result: Result<MoveOutcome>,
    start: Instant,
) -> ExecutionResult<Value, BoardError> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(error) => return failed(op, input, error, start),
    };
    let value = match serde_json::to_value(&outcome) {
        Ok(value) => value,
        Err(error) => return failed(op, input, error.into(), start),
    };

    if outcome.changed() {
        ExecutionResult::Logged {
            log_entry: LogEntry::success(op, input, value.clone(), elapsed_ms(start)),
            value,
        }
    } else {
        ExecutionResult::Unlogged { value }
    }
}
