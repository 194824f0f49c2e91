use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::command::{Command, Outcome};
use crate::geometry::Point;
use crate::state::EditSession;

/// Where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// The position relative to the canvas origin, in whole pixels
    pub canvas: Point,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
    /// Whether the canvas itself is under the pointer, not a popup or window above it
    pub is_canvas_hit: bool,
}

/// Primary-button pointer and keyboard input, already mapped onto the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp { location: InputLocation },
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Converts raw egui input into [`InputEvent`]s for one canvas.
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Maps `pos` onto the canvas, assuming nothing covers it
    pub fn make_location(&self, pos: Pos2) -> InputLocation {
        self.locate(pos, true)
    }

    fn locate(&self, pos: Pos2, uncovered: bool) -> InputLocation {
        let is_in_canvas = self.canvas_rect.contains(pos);
        InputLocation {
            position: pos,
            canvas: Point::from_pos2((pos - self.canvas_rect.min).to_pos2()),
            is_in_canvas,
            is_canvas_hit: is_in_canvas && uncovered,
        }
    }

    /// Collects this frame's events.
    ///
    /// `canvas_hit` tells whether the canvas widget, rather than a popup over it,
    /// holds the pointer this frame. Keys are skipped while `keyboard_free` is false,
    /// e.g. when a text field has focus.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_hit: bool,
        keyboard_free: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            if let Some(pos) = input.pointer.hover_pos() {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.locate(pos, canvas_hit),
                    });
                }
                self.last_pointer_pos = Some(pos);
            }

            if let Some(pos) = input.pointer.interact_pos() {
                if input.pointer.button_pressed(PointerButton::Primary) {
                    events.push(InputEvent::PointerDown {
                        location: self.locate(pos, canvas_hit),
                    });
                }
                if input.pointer.button_released(PointerButton::Primary) {
                    events.push(InputEvent::PointerUp {
                        location: self.locate(pos, canvas_hit),
                    });
                }
            }

            if keyboard_free {
                for event in &input.raw.events {
                    if let egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } = event
                    {
                        events.push(InputEvent::KeyDown {
                            key: *key,
                            modifiers: *modifiers,
                        });
                    }
                }
            }
        });

        events
    }
}

/// Feeds one event into the session.
///
/// Returns the outcome when the event triggered a command, so the caller can
/// show a confirmation prompt if one is needed.
pub fn route_event(event: &InputEvent, session: &mut EditSession) -> Option<Outcome> {
    match event {
        // Presses on a popup or menu over the canvas start nothing
        InputEvent::PointerDown { location } => {
            if location.is_canvas_hit {
                session.pointer_down(location.canvas);
            }
            None
        }
        // Drags keep tracking outside the canvas until the button is released
        InputEvent::PointerMove { location } => {
            session.pointer_move(location.canvas);
            None
        }
        InputEvent::PointerUp { location } => {
            session.pointer_up(location.canvas);
            None
        }
        InputEvent::KeyDown { key, modifiers } => route_key(*key, *modifiers, session),
    }
}

fn route_key(key: Key, modifiers: Modifiers, session: &mut EditSession) -> Option<Outcome> {
    let command = match (key, modifiers.command) {
        (Key::Delete, _) => Command::Delete,
        (Key::C, true) => Command::Copy,
        (Key::X, true) => Command::Cut,
        (Key::V, true) => Command::Paste,
        (Key::N, true) => Command::New,
        (Key::S, true) => Command::Save(session.document_path().to_path_buf()),
        (Key::O, true) => {
            let path = session.document_path().to_path_buf();
            return Some(session.open_file(&path));
        }
        _ => return None,
    };
    Some(session.execute(command))
}
