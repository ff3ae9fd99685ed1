mod editor_state;
mod persistence;
mod session;
mod session_state;

pub use editor_state::EditorState;
pub use session::EditorSession;
pub use session_state::SessionState;
pub use persistence::{
    ElementStore,
    ElementTarget,
    MemoryStore,
    NewElement,
    PersistenceError,
    PersistenceResult,
    SavedElement,
};
