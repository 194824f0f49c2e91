#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod persistence;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod style;

pub use app::PaintApp;
pub use command::{Command, Confirmation, Outcome, PendingAction};
pub use config::EditorConfig;
pub use document::{Document, ShapeId};
pub use error::{DocumentError, EditError, FormatError, LoadError};
pub use event::{EditorEvent, EventBus, EventHandler};
pub use geometry::Point;
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use shape::{Shape, ShapeKind, ShapeRegistry};
pub use state::{ActiveRef, EditSession, GestureState, Tool};
pub use style::{BackgroundFill, LineStyle, Rgb, ShapeStyle, StyleChange};
