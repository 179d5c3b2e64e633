//! Demo settings, read from `config.json` in the config directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tabula::prelude::{InputOptions, MultiSelect, SelectionMode, TableOptions};

use crate::error::DemoError;
use crate::paths;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub table: TableOptions,
    pub search: InputOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            table: TableOptions {
                striped: true,
                selectable: SelectionMode::Multiple,
                multi_select: MultiSelect::Accumulate,
                ..TableOptions::default()
            },
            search: InputOptions {
                show_clear_button: true,
                ..InputOptions::default()
            },
        }
    }
}

impl DemoConfig {
    /// Load from the platform config directory, falling back to defaults.
    pub fn load() -> Result<Self, DemoError> {
        match paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("no home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self, DemoError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config = serde_json::from_str(&text).map_err(|source| DemoError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}
