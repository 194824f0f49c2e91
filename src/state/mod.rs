mod clipboard;
mod editor_state;
mod session;

pub use clipboard::ActiveRef;
pub use editor_state::{GestureState, Tool};
pub use session::EditSession;
