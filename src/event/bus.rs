use std::cell::RefCell;
use std::fmt;

use crate::event::{EditorEvent, EventHandler};

/// Fan-out point for [`EditorEvent`]s.
///
/// The session owns one bus and emits through `&self`; listeners sit behind a
/// `RefCell`, so a listener must not emit back into the bus it is called from.
#[derive(Default)]
pub struct EventBus {
    listeners: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow().len();
        f.debug_struct("EventBus")
            .field("listeners", &listeners)
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener; it sees every event emitted from now on
    pub fn subscribe(&self, listener: Box<dyn EventHandler>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Delivers `event` to the listeners, oldest subscription first
    pub fn emit(&self, event: EditorEvent) {
        let mut listeners = self.listeners.borrow_mut();
        for listener in listeners.iter_mut() {
            listener.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::handlers::EventLog;

    #[test]
    fn test_late_listener_misses_earlier_events() {
        let bus = EventBus::new();
        let early = EventLog::new();
        let late = EventLog::new();

        bus.subscribe(Box::new(early.clone()));
        bus.emit(EditorEvent::DocumentCleared);
        bus.subscribe(Box::new(late.clone()));
        bus.emit(EditorEvent::DocumentLoaded { shapes: 3 });

        assert_eq!(early.len(), 2);
        assert_eq!(late.events(), vec![EditorEvent::DocumentLoaded { shapes: 3 }]);
    }
}
