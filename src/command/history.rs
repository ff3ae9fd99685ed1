use std::collections::VecDeque;

use crate::state::EditorState;

/// Default number of snapshots kept per session
pub const MAX_HISTORY: usize = 50;

/// Bounded snapshot history backing undo/redo.
///
/// Snapshots are recorded reactively: after every observed content change
/// the surface state is handed to [`record_if_changed`](Self::record_if_changed).
/// `last_recorded` is the state the surface is known to be in; the undo
/// stack holds the states preceding it, most recent last, so popping it
/// always steps back to a visibly different state.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    /// States that can be returned to with undo
    undo_stack: VecDeque<EditorState>,
    /// States that can be returned to with redo
    redo_stack: Vec<EditorState>,
    /// The most recently recorded state
    last_recorded: EditorState,
    capacity: usize,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotHistory {
    /// Creates an empty history bounded to [`MAX_HISTORY`] entries
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            last_recorded: EditorState::empty(),
            capacity: capacity.max(1),
        }
    }

    /// Records `current` if it differs from the last recorded state.
    ///
    /// Returns true when a snapshot was taken. Any snapshot invalidates the
    /// redo history.
    pub fn record_if_changed(&mut self, current: &EditorState) -> bool {
        if *current == self.last_recorded {
            return false;
        }
        let previous = std::mem::replace(&mut self.last_recorded, current.clone());
        self.push_undo(previous);
        self.redo_stack.clear();
        true
    }

    /// Steps back one snapshot. `current` is kept for redo.
    ///
    /// The returned state becomes the last recorded one, so applying it to
    /// the surface does not record a duplicate.
    pub fn undo(&mut self, current: &EditorState) -> Option<EditorState> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current.clone());
        self.last_recorded = previous.clone();
        Some(previous)
    }

    /// Steps forward one snapshot; the mirror of [`undo`](Self::undo).
    pub fn redo(&mut self, current: &EditorState) -> Option<EditorState> {
        let next = self.redo_stack.pop()?;
        self.push_undo(current.clone());
        self.last_recorded = next.clone();
        Some(next)
    }

    fn push_undo(&mut self, state: EditorState) {
        self.undo_stack.push_back(state);
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn last_recorded(&self) -> &EditorState {
        &self.last_recorded
    }

    /// Drops every snapshot and forgets the last recorded state
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.last_recorded = EditorState::empty();
    }
}
