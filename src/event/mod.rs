mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::{EditorEvent, HistoryStep};
pub use handlers::{
    LogEventHandler,
    Notification,
    NotificationHandler,
    NotificationKind,
    NotificationQueue,
};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &EditorEvent);
}
