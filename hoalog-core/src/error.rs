//! Error types for hoalog.

use thiserror::Error;

/// Errors that can occur while loading or querying the timeline.
#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse timeline data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Event '{id}' has an invalid date '{value}'. Expected DD/MM/YYYY")]
    InvalidDate { id: String, value: String },

    #[error("Duplicate event id '{0}'")]
    DuplicateId(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidQueryDate(String),

    #[error("Invalid sort order '{0}'. Expected 'asc' or 'desc'")]
    InvalidSortOrder(String),

    #[error("Unknown event type '{0}'")]
    UnknownEventType(String),

    #[error("Invalid image index '{0}'. Expected a non-negative number")]
    InvalidImageIndex(String),
}

impl TimelineError {
    /// Whether the error was caused by user-supplied query input rather
    /// than by the data source or the environment.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            TimelineError::InvalidQueryDate(_)
                | TimelineError::InvalidSortOrder(_)
                | TimelineError::UnknownEventType(_)
                | TimelineError::InvalidImageIndex(_)
        )
    }
}

/// Result type alias for hoalog operations.
pub type TimelineResult<T> = Result<T, TimelineError>;
