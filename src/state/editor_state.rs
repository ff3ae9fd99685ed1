//! A recorded snapshot of the editor surface.
//!
//! An `EditorState` captures the full structured content at one instant
//! together with its serialised markup. Once captured it is never mutated;
//! the history stacks only ever move whole states around.
//!
//! # Equality
//!
//! Two states are equal iff their serialised markup is identical. The
//! structured content is kept alongside so a state can be applied back to
//! the surface without parsing the markup again.
//!
//! # Examples
//!
//! ```rust
//! use word_notebook::content::{Block, StructuredContent};
//! use word_notebook::state::EditorState;
//!
//! let a = EditorState::capture(&StructuredContent::from_blocks(vec![Block::paragraph("kata")]));
//! let b = EditorState::capture(&StructuredContent::from_blocks(vec![Block::paragraph("kata")]));
//! assert_eq!(a, b);
//! assert_ne!(a, EditorState::empty());
//! ```

use crate::content::StructuredContent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorState {
    content: StructuredContent,
    markup: String,
}

impl PartialEq for EditorState {
    fn eq(&self, other: &Self) -> bool {
        // Structure is compared through the serialised form only
        self.markup == other.markup
    }
}

impl Eq for EditorState {}

impl EditorState {
    /// Captures a snapshot of `content`
    pub fn capture(content: &StructuredContent) -> Self {
        Self {
            markup: content.to_markup(),
            content: content.clone(),
        }
    }

    /// The state of a freshly opened, untouched surface
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &StructuredContent {
        &self.content
    }
}
