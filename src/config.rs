use crate::error::ConfigError;
use crate::runtime::submission::SubmissionTimings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
const DEFAULT_RESET_DELAY_MS: u64 = 3000;

/// Runtime settings, read from YAML and then overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub submit_delay_ms: u64,
    pub reset_delay_ms: u64,
    pub handoff_url: Option<String>,
    pub form: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            handoff_url: None,
            form: None,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    pub fn timings(&self) -> SubmissionTimings {
        SubmissionTimings {
            submit_delay: Duration::from_millis(self.submit_delay_ms),
            reset_delay: Duration::from_millis(self.reset_delay_ms),
        }
    }
}
