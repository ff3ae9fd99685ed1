mod central_panel;
mod saved_panel;
mod toolbar_panel;

pub use central_panel::central_panel;
pub use saved_panel::saved_panel;
pub use toolbar_panel::toolbar_panel;
