use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{EditorEvent, EventHandler};

/// Logs every event at debug level
#[derive(Debug, Default)]
pub struct LogEventHandler;

impl EventHandler for LogEventHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        log::debug!("editor event: {event:?}");
    }
}

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Shown next to the field that needs attention
    Inline,
    /// Shown in a dialog the user has to dismiss
    Blocking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Shared queue of user-facing notifications
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue(Arc<Mutex<VecDeque<Notification>>>);

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notification: Notification) {
        self.0.lock().push_back(notification);
    }

    /// Takes every pending notification, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        self.0.lock().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

/// Turns save outcomes into notifications for the user
#[derive(Debug)]
pub struct NotificationHandler {
    queue: NotificationQueue,
}

impl NotificationHandler {
    pub fn new(queue: NotificationQueue) -> Self {
        Self { queue }
    }
}

impl EventHandler for NotificationHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        let notification = match event {
            EditorEvent::ValidationFailed(error) => Notification {
                kind: NotificationKind::Inline,
                message: error.user_message().to_string(),
            },
            EditorEvent::SaveFailed { message } => Notification {
                kind: NotificationKind::Blocking,
                message: message.clone(),
            },
            _ => return,
        };
        self.queue.push(notification);
    }
}
