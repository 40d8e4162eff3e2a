//! KeyConfig loading and validation.

use super::model::KeyConfig;
use crate::error::{KeyError, Result};
use std::path::Path;

impl KeyConfig {
    /// Read the `tag`/`prefix` settings from a YAML file, such as the one
    /// passed to the CLI with `--config`.
    ///
    /// Any failure, including an unreadable file, is a `KeyError::Config`,
    /// so the CLI reports it with the user-error exit code.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            KeyError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text. Missing settings keep their defaults
    /// (tag `yaml`, no prefix), so an empty document is the default
    /// configuration. The result is validated before it is returned.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: KeyConfig = serde_yaml::from_str(yaml)
            .map_err(|e| KeyError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Write the settings back as YAML, in the form `from_yaml` accepts.
    ///
    /// The prefix is quoted by serde_yaml when it needs to be (`"*.*."`).
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| KeyError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `tag` must be non-empty
    /// - `tag` must not contain whitespace, quotes or `:`
    ///
    /// Any prefix is accepted; quoting the resulting keys is left to the codec.
    pub fn validate(&self) -> Result<()> {
        if self.tag.is_empty() {
            return Err(KeyError::Config("tag must not be empty".to_string()));
        }

        if let Some(c) = self
            .tag
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '"' | '\'' | ':'))
        {
            return Err(KeyError::Config(format!(
                "tag '{}' contains invalid character {:?}",
                self.tag, c
            )));
        }

        Ok(())
    }

    /// Whether composite fields get a prefix under this configuration.
    pub fn prefixing_enabled(&self) -> bool {
        !self.prefix.is_empty()
    }
}
