//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
///
/// None of these are fatal to a board session. Drag gestures swallow them
/// and leave the board untouched; direct callers get them back to decide.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task not found (stale id, or deleted by an external action)
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Drop target id matches neither a column nor a task
    #[error("drop target does not resolve to a column or task: {id}")]
    UnresolvedDropTarget { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Seed data could not be turned into a board
    #[error("invalid seed: {message}")]
    InvalidSeed { message: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a task not found error
    pub fn task_not_found(id: impl ToString) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    /// Create a column not found error
    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Create an invalid seed error
    pub fn invalid_seed(message: impl Into<String>) -> Self {
        Self::InvalidSeed {
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// True when a referenced task or column does not exist on the board.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound { .. } | Self::ColumnNotFound { .. })
    }
}
