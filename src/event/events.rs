use crate::error::ValidationError;
use crate::state::SessionState;
use crate::template::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStep {
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The surface content changed and was snapshotted
    SnapshotRecorded {
        undo_depth: usize,
    },
    /// Undo or redo moved the surface to another snapshot
    HistoryStepped {
        step: HistoryStep,
        undo_depth: usize,
        redo_depth: usize,
    },
    TemplateApplied {
        template: Template,
        title_filled: bool,
    },
    StateChanged {
        old: SessionState,
        new: SessionState,
    },
    ValidationFailed(ValidationError),
    SaveFailed {
        message: String,
    },
    Saved {
        element_id: String,
    },
}
