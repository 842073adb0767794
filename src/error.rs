use std::path::PathBuf;
use thiserror::Error;

/// Problems with a wizard definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("a wizard needs at least one step")]
    NoSteps,
    #[error("field id `{0}` is declared more than once")]
    DuplicateField(String),
    #[error("select field `{0}` has no options")]
    EmptyOptions(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// Failure reported by a [`Submitter`](crate::runtime::submission::Submitter).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("invalid hand-off URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Handoff(#[from] HandoffError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
