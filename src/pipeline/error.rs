use crate::types::PlateSummary;
use std::fmt;

/// Error type tagged with the pipeline stage that failed
///
/// Stages after loading keep the plate summary for verbose reporting.
#[derive(Debug)]
pub enum ProcessError {
    /// Settings cannot produce an image
    InvalidConfig(String),

    /// Plate file missing, unreadable or malformed
    LoadFailed(String),

    /// Plate loaded but could not be normalized
    RenderFailed(String),

    /// Image rendered but could not be encoded or written
    SaveFailed {
        summary: PlateSummary,
        error: String,
    },

    /// Image saved but display failed
    DisplayFailed {
        summary: PlateSummary,
        error: String,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidConfig(msg) => write!(f, "{msg}"),
            ProcessError::LoadFailed(msg) => write!(f, "{msg}"),
            ProcessError::RenderFailed(msg) => write!(f, "{msg}"),
            ProcessError::SaveFailed { error, .. } => write!(f, "{error}"),
            ProcessError::DisplayFailed { error, .. } => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ProcessError {}

impl ProcessError {
    /// Returns the plate summary if the plate was loaded before the failure
    #[must_use]
    pub fn summary(&self) -> Option<&PlateSummary> {
        match self {
            ProcessError::SaveFailed { summary, .. } => Some(summary),
            ProcessError::DisplayFailed { summary, .. } => Some(summary),
            _ => None,
        }
    }
}
