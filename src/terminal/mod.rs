pub mod backend;
pub mod input_event;

pub use backend::{Terminal, TerminalSize};
pub use input_event::{KeyCode, KeyEvent, KeyModifiers, TerminalEvent};
