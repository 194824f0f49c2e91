use std::mem;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::clipboard::ActiveRef;
use super::editor_state::{GestureState, Tool};
use crate::command::{Command, Confirmation, Outcome, PendingAction};
use crate::config::EditorConfig;
use crate::document::{Document, ShapeId};
use crate::error::EditError;
use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::geometry::{Point, diagonal_standing, fixing_position};
use crate::persistence;
use crate::shape::{Shape, ShapeKind, ShapeRegistry};
use crate::style::{ShapeStyle, StyleChange};

/// Ties pointer gestures and commands to the document.
///
/// Every input runs to completion before the next one is handled. Failures are
/// reported to subscribed handlers as [`EditorEvent::Rejected`] and never leave
/// [`EditSession::execute`].
#[derive(Debug)]
pub struct EditSession {
    registry: ShapeRegistry,
    document: Document,
    default_style: ShapeStyle,
    tool: Tool,
    gesture: GestureState,
    special: bool,
    changed: bool,
    active: Option<ActiveRef>,
    pending: Option<PendingAction>,
    document_path: PathBuf,
    bus: EventBus,
}

impl EditSession {
    pub fn new(registry: ShapeRegistry) -> Self {
        Self::with_config(registry, &EditorConfig::default())
    }

    pub fn with_config(registry: ShapeRegistry, config: &EditorConfig) -> Self {
        Self {
            registry,
            document: Document::new(),
            default_style: config.default_style,
            tool: config.initial_tool,
            gesture: GestureState::Idle,
            special: config.initial_tool.is_special(),
            changed: false,
            active: None,
            pending: None,
            document_path: config.document_path.clone(),
            bus: EventBus::new(),
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn default_style(&self) -> ShapeStyle {
        self.default_style
    }

    /// True once the drawing differs from what was last opened, saved or cleared
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn is_special(&self) -> bool {
        self.special
    }

    pub fn active(&self) -> Option<&ActiveRef> {
        self.active.as_ref()
    }

    /// The shape copy, cut, paste and move would act on, if it is still reachable
    pub fn active_shape(&self) -> Option<&Shape> {
        self.active
            .as_ref()
            .and_then(|active| active.resolve(&self.document))
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    pub fn set_document_path(&mut self, path: impl Into<PathBuf>) {
        self.document_path = path.into();
    }

    /// The drawing in the text format
    pub fn encode(&self) -> String {
        persistence::encode_document(&self.document)
    }

    // ---- tools and gestures ----

    /// Chooses what the next pointer-down does. Ignored while a gesture is active.
    pub fn arm_tool(&mut self, tool: Tool) {
        if !self.gesture.is_idle() {
            debug!("ignoring tool change to {tool} during {:?}", self.gesture);
            return;
        }
        let old = mem::replace(&mut self.tool, tool);
        self.special = tool.is_special();
        debug!("armed {tool} (special: {})", self.special);
        self.bus.emit(EditorEvent::ToolChanged { old, new: tool });
    }

    pub fn pointer_down(&mut self, at: Point) {
        if !self.gesture.is_idle() {
            debug!("pointer down at {at} ignored during {:?}", self.gesture);
            return;
        }
        self.gesture = GestureState::begin(self.tool, at);
        debug!("pointer down at {at}: {:?}", self.gesture);
    }

    pub fn pointer_move(&mut self, at: Point) {
        match &mut self.gesture {
            GestureState::Idle => {}
            GestureState::Drawing {
                anchor, current, ..
            } => {
                *current = if self.special {
                    diagonal_standing(*anchor, at)
                } else {
                    at
                };
            }
            GestureState::Selecting { current, .. } => *current = at,
            GestureState::Moving { last, dx, dy } => {
                let step_x = at.x.saturating_sub(last.x);
                let step_y = at.y.saturating_sub(last.y);
                *last = at;
                if step_x == 0 && step_y == 0 {
                    return;
                }
                let target = self.active.and_then(|active| active.attached_id());
                if let Some(shape) = target.and_then(|id| self.document.get_mut(id)) {
                    let (moved_x, moved_y) = shape.move_by(step_x, step_y);
                    *dx = dx.saturating_add(moved_x);
                    *dy = dy.saturating_add(moved_y);
                }
            }
        }
    }

    /// Finishes the gesture in progress, taking `at` as the final pointer position.
    pub fn pointer_up(&mut self, at: Point) {
        self.pointer_move(at);
        match mem::take(&mut self.gesture) {
            GestureState::Idle => {}
            GestureState::Drawing {
                kind,
                anchor,
                current,
            } => self.commit_drawing(kind, anchor, current),
            GestureState::Selecting { anchor, current } => self.commit_selection(anchor, current),
            GestureState::Moving { dx, dy, .. } => self.commit_move(dx, dy),
        }
    }

    /// The transient shape to draw on top of the document, if a gesture shows one
    pub fn preview(&self) -> Option<Shape> {
        match self.gesture {
            GestureState::Drawing {
                kind,
                anchor,
                current,
            } => {
                let (first, second) = fixing_position(kind, anchor, current);
                Some(
                    self.registry
                        .create_kind(kind, first, second, self.default_style),
                )
            }
            GestureState::Selecting { anchor, current } => {
                let (top_left, bottom_right) = fixing_position(ShapeKind::Rectangle, anchor, current);
                let mut rubber_band = self.registry.create_kind(
                    ShapeKind::Rectangle,
                    anchor,
                    anchor,
                    ShapeStyle::selection(),
                );
                rubber_band.set_top_left(top_left);
                rubber_band.set_bottom_right(bottom_right);
                Some(rubber_band)
            }
            GestureState::Idle | GestureState::Moving { .. } => None,
        }
    }

    fn commit_drawing(&mut self, kind: ShapeKind, anchor: Point, current: Point) {
        let (first, second) = fixing_position(kind, anchor, current);
        let shape = self
            .registry
            .create(kind.index(), first, second, self.default_style);
        let id = self.document.append(shape);
        self.changed = true;
        info!("created {kind} {first} {second}");
        self.bus.emit(EditorEvent::ShapeCreated {
            id,
            kind,
            top_left: first,
            bottom_right: second,
        });
    }

    fn commit_selection(&mut self, anchor: Point, current: Point) {
        let (top_left, bottom_right) = fixing_position(ShapeKind::Rectangle, anchor, current);
        let hit = self
            .document
            .iter_top_down()
            .find(|(_, entry)| entry.shape.contains(top_left, bottom_right))
            .map(|(index, entry)| (index, entry.shape.kind()));

        let Some((index, kind)) = hit else {
            debug!("nothing inside {top_left} - {bottom_right}");
            return;
        };

        let was_top = index + 1 == self.document.len();
        match self.document.promote_to_top(index) {
            Ok(id) => {
                if !was_top {
                    self.changed = true;
                }
                self.active = Some(ActiveRef::Attached(id));
                info!("selected {kind} at index {index}");
                self.bus.emit(EditorEvent::ShapeSelected { id, kind });
            }
            Err(err) => warn!("selection hit vanished: {err}"),
        }
    }

    fn commit_move(&mut self, dx: i32, dy: i32) {
        let target = self.active.and_then(|active| active.attached_id());
        let Some((id, kind)) = target.and_then(|id| self.document.get(id).map(|s| (id, s.kind())))
        else {
            debug!("move gesture ended without a target");
            return;
        };
        if dx != 0 || dy != 0 {
            self.changed = true;
        }
        info!("moved {kind} by {dx},{dy}");
        self.bus.emit(EditorEvent::ShapeMoved { id, kind, dx, dy });
    }

    // ---- clipboard ----

    /// Makes the topmost shape the active reference
    pub fn copy(&mut self) -> Result<ShapeId, EditError> {
        let id = self.reference_top()?;
        let kind = self.document.get(id).map(Shape::kind).unwrap_or_default();
        self.bus.emit(EditorEvent::ShapeCopied { id, kind });
        Ok(id)
    }

    /// Copies the topmost shape, then takes it out of the document.
    ///
    /// The active reference keeps the removed shape so it can still be pasted.
    pub fn cut(&mut self) -> Result<Shape, EditError> {
        self.reference_top()?;
        let entry = self.document.remove_top()?;
        self.active = Some(ActiveRef::Detached(entry.shape));
        self.changed = true;
        info!("cut {}", entry.shape.kind());
        self.bus.emit(EditorEvent::ShapeCut {
            kind: entry.shape.kind(),
        });
        Ok(entry.shape)
    }

    /// Appends a clone of the active shape and makes the clone active
    pub fn paste(&mut self) -> Result<ShapeId, EditError> {
        let source = self.active_shape().ok_or(EditError::NoSelection)?;
        let clone = self.registry.clone_shape(source);
        self.document.append(clone);
        self.changed = true;
        let id = self.reference_top()?;
        info!("pasted {}", clone.kind());
        self.bus.emit(EditorEvent::ShapePasted {
            id,
            kind: clone.kind(),
        });
        Ok(id)
    }

    fn reference_top(&mut self) -> Result<ShapeId, EditError> {
        let id = self.document.top().ok_or(EditError::EmptyDocument)?.id;
        self.active = Some(ActiveRef::Attached(id));
        Ok(id)
    }

    // ---- commands ----

    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!("execute {command:?}");
        if let Some(stale) = self.pending.take() {
            debug!("dropping unanswered {stale:?}");
        }

        match command {
            Command::New if self.changed => self.ask(PendingAction::New),
            Command::New => {
                self.clear();
                Outcome::Done
            }
            Command::Open(bytes) if self.changed => self.ask(PendingAction::Open(bytes)),
            Command::Open(bytes) => {
                let result = self.open_bytes(&bytes);
                self.report(result);
                Outcome::Done
            }
            Command::Save(path) => {
                let result = self.save(&path);
                self.report(result);
                Outcome::Done
            }
            Command::ChangeTool(tool) => {
                self.arm_tool(tool);
                Outcome::Done
            }
            Command::Delete if self.document.is_empty() => {
                self.report(Err(EditError::EmptyDocument));
                Outcome::Done
            }
            Command::Delete => self.ask(PendingAction::Delete),
            Command::Copy => {
                let result = self.copy().map(drop);
                self.report(result);
                Outcome::Done
            }
            Command::Cut => {
                let result = self.cut().map(drop);
                self.report(result);
                Outcome::Done
            }
            Command::Paste => {
                let result = self.paste().map(drop);
                self.report(result);
                Outcome::Done
            }
            Command::ChangeStyle(change) => {
                self.change_style(change);
                Outcome::Done
            }
        }
    }

    /// Answers the prompt raised by the last [`Outcome::NeedsConfirmation`].
    ///
    /// For Delete only `Yes` removes the topmost shape. For New and Open, `Yes`
    /// saves to the document path first and `No` discards; both then proceed.
    /// `Cancel` always aborts.
    pub fn resolve(&mut self, answer: Confirmation) -> Outcome {
        let Some(action) = self.pending.take() else {
            debug!("{answer:?} with nothing pending");
            return Outcome::Done;
        };
        debug!("{action:?} answered {answer:?}");

        match (action, answer) {
            (PendingAction::Delete, Confirmation::Yes) => {
                let result = self.delete_top();
                self.report(result);
            }
            (PendingAction::Delete, _) => self.bus.emit(EditorEvent::rejected("Delete cancelled")),
            (_, Confirmation::Cancel) => self.bus.emit(EditorEvent::rejected("Cancelled")),
            (PendingAction::New, answer) => {
                if self.save_before_discard(answer) {
                    self.clear();
                }
            }
            (PendingAction::Open(bytes), answer) => {
                if self.save_before_discard(answer) {
                    let result = self.open_bytes(&bytes);
                    self.report(result);
                }
            }
        }
        Outcome::Done
    }

    /// `Yes` saves to the document path first. Returns false if that save failed.
    fn save_before_discard(&mut self, answer: Confirmation) -> bool {
        if answer != Confirmation::Yes {
            return true;
        }
        let path = self.document_path.clone();
        let result = self.save(&path);
        let saved = result.is_ok();
        self.report(result);
        saved
    }

    /// Reads `path` and opens it as if its bytes came with [`Command::Open`]
    pub fn open_file(&mut self, path: &Path) -> Outcome {
        match std::fs::read(path) {
            Ok(bytes) => {
                self.document_path = path.to_path_buf();
                self.execute(Command::Open(bytes))
            }
            Err(err) => {
                self.report(Err(EditError::Load(err.into())));
                Outcome::Done
            }
        }
    }

    /// Writes the drawing to `path` and marks it unchanged
    pub fn save(&mut self, path: &Path) -> Result<(), EditError> {
        persistence::save_to_path(&self.document, path).map_err(EditError::Save)?;
        self.changed = false;
        self.bus.emit(EditorEvent::DocumentSaved {
            path: path.to_path_buf(),
            shapes: self.document.len(),
        });
        Ok(())
    }

    pub fn change_style(&mut self, change: StyleChange) {
        self.default_style.apply(change);
        debug!("default style now {}", self.default_style);
        self.bus.emit(EditorEvent::StyleChanged {
            style: self.default_style,
        });
    }

    fn delete_top(&mut self) -> Result<(), EditError> {
        let entry = self.document.remove_top()?;
        self.changed = true;
        info!("deleted {}", entry.shape.kind());
        self.bus.emit(EditorEvent::ShapeDeleted {
            kind: entry.shape.kind(),
        });
        Ok(())
    }

    /// Replaces the drawing, or leaves it untouched if any line fails to decode
    fn open_bytes(&mut self, bytes: &[u8]) -> Result<(), EditError> {
        let shapes = persistence::decode_bytes(&self.registry, bytes)?;
        self.document.replace_all(shapes);
        self.active = None;
        self.changed = false;
        info!("opened {} shapes", self.document.len());
        self.bus.emit(EditorEvent::DocumentLoaded {
            shapes: self.document.len(),
        });
        Ok(())
    }

    fn clear(&mut self) {
        self.document.clear();
        self.active = None;
        self.changed = false;
        info!("started a new drawing");
        self.bus.emit(EditorEvent::DocumentCleared);
    }

    fn ask(&mut self, action: PendingAction) -> Outcome {
        debug!("waiting for confirmation of {action:?}");
        self.pending = Some(action.clone());
        Outcome::NeedsConfirmation(action)
    }

    fn report(&self, result: Result<(), EditError>) {
        if let Err(err) = result {
            warn!("{err}");
            self.bus.emit(EditorEvent::rejected(err.to_string()));
        }
    }
}
