use futures::FutureExt;
use futures::future::{self, BoxFuture};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::StructuredContent;
use crate::template::ElementKind;
use crate::util::time;

/// Errors that can occur while persisting elements
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("store rejected the write: {0}")]
    Rejected(String),

    #[error("failed to serialize elements: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PersistenceError {
    /// Blocking notification shown when a save fails
    pub fn user_message(&self) -> &'static str {
        "Gagal menyimpan elemen. Sila cuba lagi."
    }
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// The word an element is attached to
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementTarget {
    pub language_id: String,
    pub word_id: String,
}

impl ElementTarget {
    pub fn new(language_id: impl Into<String>, word_id: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            word_id: word_id.into(),
        }
    }
}

/// An element ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewElement {
    pub title: String,
    pub content: StructuredContent,
    pub kind: ElementKind,
}

/// An element as returned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedElement {
    pub id: String,
    pub title: String,
    pub content: StructuredContent,
    pub kind: ElementKind,
    /// Seconds since the UNIX epoch
    pub created_at: u64,
}

/// Where saved elements go.
///
/// The editor only ever writes one element at a time and awaits the result
/// before leaving the editor.
pub trait ElementStore: Send + Sync {
    fn persist<'a>(
        &'a self,
        target: &'a ElementTarget,
        element: NewElement,
    ) -> BoxFuture<'a, PersistenceResult<SavedElement>>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredElement {
    target: ElementTarget,
    element: SavedElement,
}

#[derive(Debug, Default)]
struct StoreInner {
    elements: Vec<StoredElement>,
    write_attempts: usize,
    reject_with: Option<String>,
}

/// In-process element store.
///
/// Writes can be made to fail with [`reject_writes`](Self::reject_writes),
/// which is how the offline case is exercised.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every following write with `reason`
    pub fn reject_writes(&self, reason: impl Into<String>) {
        self.inner.lock().reject_with = Some(reason.into());
    }

    pub fn accept_writes(&self) {
        self.inner.lock().reject_with = None;
    }

    /// Number of persist calls, successful or not
    pub fn write_attempts(&self) -> usize {
        self.inner.lock().write_attempts
    }

    pub fn len(&self) -> usize {
        self.inner.lock().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements saved for one word, oldest first
    pub fn elements_for_word(&self, target: &ElementTarget) -> Vec<SavedElement> {
        self.inner
            .lock()
            .elements
            .iter()
            .filter(|stored| &stored.target == target)
            .map(|stored| stored.element.clone())
            .collect()
    }

    /// Dumps every stored element as pretty JSON
    pub fn export_json(&self) -> PersistenceResult<String> {
        let inner = self.inner.lock();
        Ok(serde_json::to_string_pretty(&inner.elements)?)
    }

    fn insert(&self, target: &ElementTarget, element: NewElement) -> PersistenceResult<SavedElement> {
        let mut inner = self.inner.lock();
        inner.write_attempts += 1;
        if let Some(reason) = &inner.reject_with {
            log::warn!("rejecting element write for word {}: {reason}", target.word_id);
            return Err(PersistenceError::Rejected(reason.clone()));
        }

        let saved = SavedElement {
            id: uuid::Uuid::new_v4().to_string(),
            title: element.title,
            content: element.content,
            kind: element.kind,
            created_at: time::timestamp_secs(),
        };
        inner.elements.push(StoredElement {
            target: target.clone(),
            element: saved.clone(),
        });
        log::info!("stored element {} for word {}", saved.id, target.word_id);
        Ok(saved)
    }
}

impl ElementStore for MemoryStore {
    fn persist<'a>(
        &'a self,
        target: &'a ElementTarget,
        element: NewElement,
    ) -> BoxFuture<'a, PersistenceResult<SavedElement>> {
        future::ready(self.insert(target, element)).boxed()
    }
}
