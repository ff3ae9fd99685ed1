use std::cell::RefCell;
use crate::event::{EditorEvent, EventHandler};

/// Fans session events out to every subscribed handler, in subscription order.
///
/// Each `EditorSession` owns one bus; the app subscribes its notification
/// handler when it opens a session.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.handlers.borrow().len())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Hands `event` to each handler. Handlers must not emit on the same bus.
    pub fn emit(&self, event: EditorEvent) {
        let mut handlers = self.handlers.borrow_mut();
        log::trace!("emitting {event:?} to {} handlers", handlers.len());
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
    }
}
