//! Activity log entries for board operations

use super::ids::LogEntryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded board operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogEntryId,

    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g. "move task", "drop task")
    pub op: String,

    /// The operation's parameters
    pub input: Value,

    /// The result, or `{"error": ...}` for failures
    pub output: Value,

    /// Who performed the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: LogEntryId::new(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Create a log entry for a successful operation
    pub fn success(op: impl Into<String>, input: Value, output: Value, duration_ms: u64) -> Self {
        Self::new(op, input, output, None, duration_ms)
    }

    /// Create a log entry for a failed operation
    pub fn failure(op: impl Into<String>, input: Value, error: &str, duration_ms: u64) -> Self {
        Self::new(
            op,
            input,
            serde_json::json!({ "error": error }),
            None,
            duration_ms,
        )
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Whether this entry records a failure
    pub fn is_failure(&self) -> bool {
        self.output.get("error").is_some()
    }
}
