//! Task status vocabulary.
//!
//! Task `tags` are deliberately unvalidated free text (comma-separated by
//! convention), so only the status carries a closed vocabulary.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Progress status of an internal to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Doing,
    Done,
}

/// All valid task status strings.
pub const VALID_TASK_STATUSES: &[&str] = &["todo", "doing", "done"];

impl TaskStatus {
    /// Return the status as a lowercase string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Parse a status from a string slice.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            _ => Err(CoreError::Validation(format!(
                "Invalid task status '{s}'. Must be one of: {}",
                VALID_TASK_STATUSES.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_statuses() {
        for &s in VALID_TASK_STATUSES {
            assert_eq!(TaskStatus::from_str(s).unwrap().as_str(), s);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(TaskStatus::from_str("blocked").is_err());
    }

    #[test]
    fn defaults_to_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }
}
