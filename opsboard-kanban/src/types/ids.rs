//! Identifier newtypes for board entities

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(
    /// Stable task identity. Never changes when the task moves.
    TaskId
);

define_id!(
    /// Column identity (slug such as `todo` or `done`)
    ColumnId
);

define_id!(
    /// Activity log entry identity
    LogEntryId
);

impl TaskId {
    /// Generate a fresh ULID-based task id
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEntryId {
    /// Generate a fresh ULID-based log entry id
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }
}

impl Default for LogEntryId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_task_ids_are_ulids() {
        let a = TaskId::new();
        let b = TaskId::new();
        assert_eq!(a.as_str().len(), 26);
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_compares_with_str() {
        let id = ColumnId::from("todo");
        assert_eq!(id, "todo");
        assert_eq!(id.to_string(), "todo");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = TaskId::from_string("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
        let parsed: TaskId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(parsed, id);
    }
}
