//! Loader configuration for tagcast (stored in ~/.config/tagcast/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TagcastError};
use crate::format::OutputFormat;

const CONFIG_DIR: &str = "tagcast";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TAGCAST_CONFIG_DIR";

/// How datasets are parsed and results printed by default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Separator between record fields
    #[serde(default = "default_field_delimiter")]
    pub field_delimiter: char,

    /// Separator between tags inside the tag field and the query string
    #[serde(default = "default_tag_separator")]
    pub tag_separator: char,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_field_delimiter() -> char {
    ','
}

fn default_tag_separator() -> char {
    ';'
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            field_delimiter: default_field_delimiter(),
            tag_separator: default_tag_separator(),
            default_format: OutputFormat::default(),
        }
    }
}

impl LoaderConfig {
    fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    TagcastError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                debug!(error = %e, "no config directory, using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TagcastError::unreadable(path, e))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LoaderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;
        if self.tag_separator == self.field_delimiter {
            return Err(TagcastError::invalid_config(
                "tag_separator",
                format!("{:?} must differ from field_delimiter", self.tag_separator),
            ));
        }
        Ok(())
    }

    /// The field delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.field_delimiter.is_ascii() {
            Ok(self.field_delimiter as u8)
        } else {
            Err(TagcastError::invalid_config(
                "field_delimiter",
                format!("{:?} is not a single ASCII character", self.field_delimiter),
            ))
        }
    }
}
