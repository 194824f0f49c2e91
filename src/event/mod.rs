mod bus;
mod events;
pub mod handlers;

pub use bus::EventBus;
pub use events::EditorEvent;
pub use handlers::{EventLog, StatusLine};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &EditorEvent);
}
