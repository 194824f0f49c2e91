use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{EditorEvent, EventHandler};

/// Keeps the status text of the most recent event.
///
/// Cloning shares the underlying text, so the front-end keeps one clone for
/// reading while the bus owns the other.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    text: Arc<Mutex<String>>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.text.lock().clone()
    }

    pub fn set(&self, text: impl Into<String>) {
        *self.text.lock() = text.into();
    }
}

impl EventHandler for StatusLine {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.set(event.status_text());
    }
}

/// Records every event it sees, oldest first
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<EditorEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EditorEvent> {
        self.events.lock().clone()
    }

    pub fn last(&self) -> Option<EditorEvent> {
        self.events.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.events.lock().push(event.clone());
    }
}
