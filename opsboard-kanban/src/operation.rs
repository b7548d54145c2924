//! Operation traits for board commands
//!
//! Operations are structs where the fields ARE the parameters. Each one knows
//! its verb and noun and executes against a mutable context, returning an
//! [`ExecutionResult`] that says whether the call should land in the
//! activity log.

use crate::types::LogEntry;

/// Verb/noun metadata for an operation
pub trait Operation {
    /// The action (e.g. "move")
    fn verb(&self) -> &'static str;

    /// The thing acted upon (e.g. "task")
    fn noun(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Canonical op string, "verb noun"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a context
pub trait Execute<C, E>: Operation {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<serde_json::Value, E>;
}

/// Result of executing an operation
///
/// - Logged: the board changed and the call should be audited
/// - Unlogged: nothing changed (reads, no-op moves)
/// - Failed: an error, optionally logged
pub enum ExecutionResult<T, E> {
    Logged { value: T, log_entry: LogEntry },
    Unlogged { value: T },
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } => Ok(value),
            Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// Check if this should be logged
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }
}

/// Implement [`Operation`] for a command struct.
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $description:literal) => {
        impl $crate::operation::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $description
            }
        }
    };
}

pub(crate) use operation;
