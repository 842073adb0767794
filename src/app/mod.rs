pub mod command;
pub mod focus;
pub mod runtime;
pub mod state;
pub mod text_edit;

pub use command::{Command, KeyBinding, KeyBindings};
pub use focus::FocusState;
pub use runtime::Runtime;
pub use state::FormApp;
