use std::sync::Arc;

use crate::command::Command;
use crate::config::EditorConfig;
use crate::error::SessionError;
use crate::event::{NotificationHandler, NotificationKind, NotificationQueue};
use crate::panels::{central_panel, saved_panel, toolbar_panel};
use crate::selection::{Position, Selection};
use crate::state::{EditorSession, ElementTarget, MemoryStore, SavedElement};
use crate::template::Template;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct NotebookApp {
    target: ElementTarget,
    language_name: String,
    word: String,
    config: EditorConfig,
    /// Elements saved from this editor, newest last
    saved: Vec<SavedElement>,

    #[serde(skip)]
    store: Arc<MemoryStore>,
    #[serde(skip)]
    session: Option<EditorSession>,
    #[serde(skip)]
    notifications: NotificationQueue,
    #[serde(skip)]
    pub(crate) draft: String,
    #[serde(skip)]
    pub(crate) selection_from: (usize, usize),
    #[serde(skip)]
    pub(crate) selection_to: (usize, usize),
    #[serde(skip)]
    inline_message: Option<String>,
    #[serde(skip)]
    blocking_message: Option<String>,
    #[serde(skip)]
    confirm_cancel: bool,
}

impl Default for NotebookApp {
    fn default() -> Self {
        Self {
            target: ElementTarget::new("bahasa-melayu", "rumah"),
            language_name: "Bahasa Melayu".to_owned(),
            word: "rumah".to_owned(),
            config: EditorConfig::default(),
            saved: Vec::new(),
            store: Arc::default(),
            session: None,
            notifications: NotificationQueue::new(),
            draft: String::new(),
            selection_from: (0, 0),
            selection_to: (0, 0),
            inline_message: None,
            blocking_message: None,
            confirm_cancel: false,
        }
    }
}

impl NotebookApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        if let Err(err) = app.config.validate() {
            log::warn!("stored editor config is invalid ({err}), using defaults");
            app.config = EditorConfig::default();
        }
        app.open_session();
        app
    }

    /// Starts a fresh editor session for the current word
    pub fn open_session(&mut self) {
        let session = EditorSession::open_with_config(self.target.clone(), self.store.clone(), &self.config);
        session.subscribe(Box::new(NotificationHandler::new(self.notifications.clone())));
        self.session = Some(session);
        self.draft.clear();
        self.inline_message = None;
        self.confirm_cancel = false;
    }

    pub fn session(&self) -> Option<&EditorSession> {
        self.session.as_ref()
    }

    pub fn saved(&self) -> &[SavedElement] {
        &self.saved
    }

    pub fn breadcrumb(&self) -> String {
        let letter = self
            .word
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        format!("{} → {} → {} → Elemen Baharu", self.language_name, letter, self.word)
    }

    pub(crate) fn inline_message(&self) -> Option<&str> {
        self.inline_message.as_deref()
    }

    /// Runs `f` on the open session, logging errors it returns
    fn with_session<T>(&mut self, f: impl FnOnce(&mut EditorSession) -> Result<T, SessionError>) -> Option<T> {
        let session = self.session.as_mut()?;
        match f(session) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("editor operation failed: {err}");
                None
            }
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        self.with_session(|session| session.dispatch_command(command));
    }

    pub fn apply_template(&mut self, template: Template) {
        self.with_session(|session| session.apply_template(template.name()));
    }

    pub fn set_title(&mut self, title: String) {
        self.inline_message = None;
        self.with_session(|session| session.set_title(title));
    }

    pub fn select(&mut self, selection: Selection) {
        self.with_session(|session| session.set_selection(Some(selection)));
    }

    /// Applies the selection typed into the block/offset fields
    pub fn select_range(&mut self) {
        let anchor = Position::new(self.selection_from.0, self.selection_from.1);
        let focus = Position::new(self.selection_to.0, self.selection_to.1);
        self.select(Selection::new(anchor, focus));
    }

    /// Types the draft text at the caret
    pub fn insert_draft(&mut self) {
        if self.draft.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.draft);
        self.with_session(|session| session.insert_text(&text));
    }

    pub fn delete_backward(&mut self) {
        self.with_session(|session| session.delete_backward());
    }

    pub fn save_element(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match futures::executor::block_on(session.save()) {
            Ok(saved) => {
                self.saved.push(saved);
                self.session = None;
                self.inline_message = None;
            }
            // Reported to the user through the notification queue
            Err(SessionError::Validation(_) | SessionError::Persistence(_)) => {}
            Err(err) => log::error!("unexpected save failure: {err}"),
        }
        self.drain_notifications();
    }

    pub fn request_cancel(&mut self) {
        self.confirm_cancel = true;
    }

    fn finish_cancel(&mut self, confirmed: bool) {
        self.confirm_cancel = false;
        if self.with_session(|session| session.cancel(|| confirmed)) == Some(true) {
            self.session = None;
        }
    }

    fn drain_notifications(&mut self) {
        for notification in self.notifications.drain() {
            match notification.kind {
                NotificationKind::Inline => self.inline_message = Some(notification.message),
                NotificationKind::Blocking => self.blocking_message = Some(notification.message),
            }
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if self.confirm_cancel {
            let mut answer = None;
            egui::Window::new("Batal")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label("Batal dan kembali tanpa menyimpan elemen ini?");
                    ui.horizontal(|ui| {
                        if ui.button("Ya").clicked() {
                            answer = Some(true);
                        }
                        if ui.button("Tidak").clicked() {
                            answer = Some(false);
                        }
                    });
                });
            if let Some(confirmed) = answer {
                self.finish_cancel(confirmed);
            }
        }

        if let Some(message) = self.blocking_message.clone() {
            egui::Window::new("Ralat")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        self.blocking_message = None;
                    }
                });
        }
    }
}

impl eframe::App for NotebookApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("breadcrumb").show(ctx, |ui| {
            ui.heading(self.breadcrumb());
        });
        toolbar_panel(self, ctx);
        saved_panel(self, ctx);
        central_panel(self, ctx);
        self.show_dialogs(ctx);
    }
}
