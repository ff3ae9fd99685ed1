#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod content;
pub mod error;
pub mod event;
pub mod panels;
pub mod selection;
pub mod state;
pub mod surface;
pub mod template;
pub mod util;

pub use app::NotebookApp;
pub use command::{Command, CommandContext, DispatchOutcome, SnapshotHistory};
pub use config::EditorConfig;
pub use content::StructuredContent;
pub use error::{SessionError, ValidationError};
pub use state::{EditorSession, EditorState, ElementStore, ElementTarget, MemoryStore, SavedElement, SessionState};
pub use surface::{DocumentSurface, EditorSurface};
pub use template::{ElementKind, Template};
