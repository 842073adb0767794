pub mod contact;
pub mod loader;

pub use contact::{CONTACT_TITLE, contact_steps, contact_wizard};
pub use loader::{FormDocument, load_form, load_wizard, load_wizard_from_path, parse_document};
