use serde::{Deserialize, Serialize};

/// Lifecycle of one editor session.
///
/// ```text
///  ┌─────────┐  first recorded   ┌─────────┐  persist ok   ┌─────────┐
///  │  Empty  ├──────────────────►│ Editing ├──────────────►│  Saved  │
///  └────┬────┘     mutation      └────┬────┘               └─────────┘
///       │                             │ cancel (confirmed)
///       │       cancel (confirmed)    ▼
///       └───────────────────────►┌───────────┐
///                                │ Discarded │
///                                └───────────┘
/// ```
///
/// `Saved` and `Discarded` are terminal: a new session has to be opened to
/// keep editing. A failed save leaves the session in `Editing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Opened, nothing recorded yet
    #[default]
    Empty,
    /// At least one mutation recorded
    Editing,
    /// Persisted successfully
    Saved,
    /// Cancelled without saving
    Discarded,
}

impl SessionState {
    /// Validates whether a transition to `next` is allowed
    pub fn can_transition_to(&self, next: SessionState) -> bool {
        match (self, next) {
            (SessionState::Empty, SessionState::Editing) => true,
            (SessionState::Empty, SessionState::Discarded) => true,
            (SessionState::Editing, SessionState::Saved) => true,
            (SessionState::Editing, SessionState::Discarded) => true,
            _ => false,
        }
    }

    /// Returns true once the session can no longer be edited
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Saved | SessionState::Discarded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states_accept_no_transition() {
        for terminal in [SessionState::Saved, SessionState::Discarded] {
            assert!(terminal.is_terminal());
            for next in [
                SessionState::Empty,
                SessionState::Editing,
                SessionState::Saved,
                SessionState::Discarded,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_save_requires_editing() {
        assert!(!SessionState::Empty.can_transition_to(SessionState::Saved));
        assert!(SessionState::Editing.can_transition_to(SessionState::Saved));
    }
}
