use crate::core::step::StepDef;
use crate::core::wizard::Wizard;
use crate::error::ConfigError;
use crate::forms::contact::{CONTACT_TITLE, contact_wizard};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Top-level shape of a YAML wizard definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDocument {
    #[serde(default)]
    pub title: Option<String>,
    pub steps: Vec<StepDef>,
}

pub fn parse_document(yaml: &str) -> Result<FormDocument, ConfigError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parses and checks a definition, returning a ready wizard.
pub fn load_wizard(yaml: &str) -> Result<(FormDocument, Wizard), ConfigError> {
    let document = parse_document(yaml)?;
    let wizard = Wizard::new(document.steps.clone())?;
    debug!(steps = wizard.len(), "form definition loaded");
    Ok((document, wizard))
}

pub fn load_wizard_from_path(path: &Path) -> Result<(FormDocument, Wizard), ConfigError> {
    let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_wizard(&yaml)
}

/// Resolves the wizard to run: the YAML definition at `path`, or the built-in
/// contact form. Returns the title shown in the header with it.
pub fn load_form(path: Option<&Path>) -> crate::Result<(String, Wizard)> {
    let Some(path) = path else {
        return Ok((CONTACT_TITLE.to_string(), contact_wizard()?));
    };
    let (document, wizard) = load_wizard_from_path(path)?;
    let title = document
        .title
        .unwrap_or_else(|| CONTACT_TITLE.to_string());
    Ok((title, wizard))
}
