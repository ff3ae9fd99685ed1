use thiserror::Error;

use crate::command::CommandError;
use crate::state::{PersistenceError, SessionState};

/// Reasons a save is refused before the store is called
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("element title is empty")]
    EmptyTitle,

    #[error("element content is empty")]
    EmptyContent,
}

impl ValidationError {
    /// Prompt shown inline next to the offending field
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "Sila isi tajuk elemen.",
            Self::EmptyContent => "Sila tulis isi elemen sebelum simpan.",
        }
    }
}

/// Errors surfaced by an editor session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to save element: {0}")]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Command(#[from] CommandError),

    /// The session already reached a terminal state
    #[error("session is closed ({0:?})")]
    Closed(SessionState),

    #[error("cannot move session from {from:?} to {to:?}")]
    InvalidTransition { from: SessionState, to: SessionState },
}

/// Errors loading an [`EditorConfig`](crate::config::EditorConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("history limit must be at least 1, got {0}")]
    InvalidHistoryLimit(usize),
}
