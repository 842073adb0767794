pub mod app;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod forms;
pub mod handoff;
pub mod runtime;
pub mod terminal;
pub mod ui;

pub use crate::core::field;
pub use crate::core::form_state;
pub use crate::core::progress;
pub use crate::core::step;
pub use crate::core::validation;
pub use crate::core::value;
pub use crate::core::wizard;

pub use crate::runtime::scheduler;
pub use crate::runtime::submission;

pub use error::{Error, Result};
