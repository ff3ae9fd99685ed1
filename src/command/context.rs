use super::SnapshotHistory;
use crate::surface::EditorSurface;

/// Context for command execution, pairing the surface being edited with
/// the history that observes it.
pub struct CommandContext<'a, S: EditorSurface + ?Sized> {
    /// The surface commands mutate
    pub surface: &'a mut S,
    /// The snapshot history for this session
    pub history: &'a mut SnapshotHistory,
}

impl<'a, S: EditorSurface + ?Sized> CommandContext<'a, S> {
    /// Create a new command context
    pub fn new(surface: &'a mut S, history: &'a mut SnapshotHistory) -> Self {
        Self { surface, history }
    }

    /// Content-changed hook: snapshots the surface if it differs from the
    /// last recorded state.
    pub fn record(&mut self) -> bool {
        let snapshot = self.surface.snapshot();
        self.history.record_if_changed(&snapshot)
    }
}
