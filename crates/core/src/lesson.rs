//! Lesson status vocabulary.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Scheduling status of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Confirmed,
    #[default]
    Pending,
    Canceled,
}

/// All valid lesson status strings.
pub const VALID_LESSON_STATUSES: &[&str] = &["confirmed", "pending", "canceled"];

impl LessonStatus {
    /// Return the status as a lowercase string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Canceled => "canceled",
        }
    }

    /// Parse a status from a string slice.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "pending" => Ok(Self::Pending),
            "canceled" => Ok(Self::Canceled),
            _ => Err(CoreError::Validation(format!(
                "Invalid lesson status '{s}'. Must be one of: {}",
                VALID_LESSON_STATUSES.join(", ")
            ))),
        }
    }
}
