//! One open element editor, from creation until save or discard.
//!
//! The `EditorSession` owns everything the editor needs for a single
//! Word + Element creation: the surface, its snapshot history, the title
//! field, the chosen template and the session lifecycle state. Nothing is
//! shared between sessions; opening the editor again starts from scratch.
//!
//! # Flow
//!
//! - toolbar buttons go through [`dispatch`](EditorSession::dispatch)
//! - typing goes through [`insert_text`](EditorSession::insert_text) and
//!   [`delete_backward`](EditorSession::delete_backward)
//! - every content change is snapshotted by the same hook, which also
//!   moves the session from `Empty` to `Editing`
//! - [`save`](EditorSession::save) validates, awaits the store and closes
//!   the session on success; [`cancel`](EditorSession::cancel) discards it
//!   once the user confirms
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use word_notebook::state::{EditorSession, ElementTarget, MemoryStore};
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut session = EditorSession::open(ElementTarget::new("ms", "rumah"), store.clone());
//! session.apply_template("note").unwrap();
//! let saved = futures::executor::block_on(session.save()).unwrap();
//! assert_eq!(saved.title, "Nota ringkas");
//! assert_eq!(store.len(), 1);
//! ```

use std::sync::Arc;

use super::{ElementStore, ElementTarget, NewElement, SavedElement, SessionState};
use crate::command::{Command, CommandContext, DispatchOutcome, SnapshotHistory, dispatch};
use crate::config::EditorConfig;
use crate::content::StructuredContent;
use crate::error::{SessionError, ValidationError};
use crate::event::{EditorEvent, EventBus, EventHandler, HistoryStep, LogEventHandler};
use crate::selection::Selection;
use crate::surface::{DocumentSurface, EditorSurface};
use crate::template::{ElementKind, Template};

pub struct EditorSession {
    target: ElementTarget,
    store: Arc<dyn ElementStore>,
    surface: DocumentSurface,
    history: SnapshotHistory,
    title: String,
    template: Option<Template>,
    state: SessionState,
    event_bus: EventBus,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("target", &self.target)
            .field("title", &self.title)
            .field("template", &self.template)
            .field("state", &self.state)
            .field("undo_depth", &self.history.undo_len())
            .field("redo_depth", &self.history.redo_len())
            .finish()
    }
}

impl EditorSession {
    /// Opens a fresh session with the default config
    pub fn open(target: ElementTarget, store: Arc<dyn ElementStore>) -> Self {
        Self::open_with_config(target, store, &EditorConfig::default())
    }

    pub fn open_with_config(target: ElementTarget, store: Arc<dyn ElementStore>, config: &EditorConfig) -> Self {
        log::info!(
            "opening element editor for word {} ({})",
            target.word_id,
            target.language_id
        );
        let event_bus = EventBus::new();
        if config.log_events {
            event_bus.subscribe(Box::new(LogEventHandler));
        }
        Self {
            target,
            store,
            surface: DocumentSurface::new(),
            history: SnapshotHistory::with_capacity(config.max_history),
            title: String::new(),
            template: None,
            state: SessionState::Empty,
            event_bus,
        }
    }

    pub fn target(&self) -> &ElementTarget {
        &self.target
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Template picked last, if any
    pub fn template(&self) -> Option<Template> {
        self.template
    }

    /// Category the element will be saved under
    pub fn kind(&self) -> ElementKind {
        ElementKind::from_template(self.template)
    }

    pub fn surface(&self) -> &DocumentSurface {
        &self.surface
    }

    pub fn content(&self) -> &StructuredContent {
        self.surface.content()
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Subscribe a handler to this session's events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.title = title.into();
        Ok(())
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.surface.set_selection(selection);
        Ok(())
    }

    /// Seeds the surface with the named template.
    ///
    /// Unknown names leave the session untouched and return `Ok(None)`.
    pub fn apply_template(&mut self, name: &str) -> Result<Option<StructuredContent>, SessionError> {
        self.ensure_open()?;
        let template = match name.parse::<Template>() {
            Ok(template) => template,
            Err(err) => {
                log::debug!("{err}, leaving content as is");
                return Ok(None);
            }
        };

        let title_filled = self.title.is_empty();
        let content = template.apply(&mut self.surface, &mut self.title);
        self.template = Some(template);
        self.event_bus.emit(EditorEvent::TemplateApplied {
            template,
            title_filled,
        });
        self.content_changed()?;
        Ok(Some(content))
    }

    /// Dispatches a toolbar command by name
    pub fn dispatch(&mut self, name: &str) -> Result<DispatchOutcome, SessionError> {
        self.ensure_open()?;
        let command = name.parse::<Command>()?;
        self.dispatch_command(command)
    }

    pub fn dispatch_command(&mut self, command: Command) -> Result<DispatchOutcome, SessionError> {
        self.ensure_open()?;
        let outcome = {
            let mut ctx = CommandContext::new(&mut self.surface, &mut self.history);
            dispatch(command, &mut ctx)
        };

        match outcome {
            DispatchOutcome::Recorded => {
                self.event_bus.emit(EditorEvent::SnapshotRecorded {
                    undo_depth: self.history.undo_len(),
                });
                self.mark_editing()?;
            }
            DispatchOutcome::Undone | DispatchOutcome::Redone => {
                let step = if outcome == DispatchOutcome::Undone {
                    HistoryStep::Undo
                } else {
                    HistoryStep::Redo
                };
                self.event_bus.emit(EditorEvent::HistoryStepped {
                    step,
                    undo_depth: self.history.undo_len(),
                    redo_depth: self.history.redo_len(),
                });
            }
            DispatchOutcome::Unchanged => {}
        }
        Ok(outcome)
    }

    /// Types `text` at the caret
    pub fn insert_text(&mut self, text: &str) -> Result<bool, SessionError> {
        self.ensure_open()?;
        self.surface.insert_text(text);
        self.content_changed()
    }

    /// Backspace at the caret
    pub fn delete_backward(&mut self) -> Result<bool, SessionError> {
        self.ensure_open()?;
        self.surface.delete_backward();
        self.content_changed()
    }

    /// Validates and persists the element.
    ///
    /// A validation failure never reaches the store. A store failure keeps
    /// the session editable with content and history intact, so calling
    /// `save` again is the retry.
    pub async fn save(&mut self) -> Result<SavedElement, SessionError> {
        self.ensure_open()?;
        let title = self.title.trim().to_string();
        if let Err(error) = self.validate(&title) {
            log::info!("save refused: {error}");
            self.event_bus.emit(EditorEvent::ValidationFailed(error));
            return Err(error.into());
        }

        let element = NewElement {
            title,
            content: self.surface.content().clone(),
            kind: self.kind(),
        };
        match self.store.persist(&self.target, element).await {
            Ok(saved) => {
                self.transition_to(SessionState::Saved)?;
                self.history.clear();
                self.event_bus.emit(EditorEvent::Saved {
                    element_id: saved.id.clone(),
                });
                Ok(saved)
            }
            Err(error) => {
                log::error!("failed to save element for word {}: {error}", self.target.word_id);
                self.event_bus.emit(EditorEvent::SaveFailed {
                    message: error.user_message().to_string(),
                });
                Err(error.into())
            }
        }
    }

    /// Discards the session if `confirm` agrees. Returns whether it was discarded.
    pub fn cancel(&mut self, confirm: impl FnOnce() -> bool) -> Result<bool, SessionError> {
        self.ensure_open()?;
        if !confirm() {
            return Ok(false);
        }
        self.transition_to(SessionState::Discarded)?;
        self.history.clear();
        Ok(true)
    }

    fn validate(&self, title: &str) -> Result<(), ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.surface.content().is_blank() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(())
    }

    /// Snapshots the surface after a content change
    fn content_changed(&mut self) -> Result<bool, SessionError> {
        let snapshot = self.surface.snapshot();
        if !self.history.record_if_changed(&snapshot) {
            return Ok(false);
        }
        self.event_bus.emit(EditorEvent::SnapshotRecorded {
            undo_depth: self.history.undo_len(),
        });
        self.mark_editing()?;
        Ok(true)
    }

    fn mark_editing(&mut self) -> Result<(), SessionError> {
        if self.state == SessionState::Empty {
            self.transition_to(SessionState::Editing)?;
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::Closed(self.state));
        }
        Ok(())
    }

    fn transition_to(&mut self, next: SessionState) -> Result<(), SessionError> {
        if !self.state.can_transition_to(next) {
            return Err(SessionError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        let old = std::mem::replace(&mut self.state, next);
        log::info!("editor session {old:?} -> {next:?}");
        self.event_bus.emit(EditorEvent::StateChanged { old, new: next });
        Ok(())
    }
}
