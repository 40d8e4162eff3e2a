//! KeyConfig struct definition and default implementation.

use super::types::default_tag;
use serde::{Deserialize, Serialize};

/// Settings that drive key resolution and composite prefixing.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// Annotation consulted first when resolving a field's key (default: "yaml").
    #[serde(default = "default_tag")]
    pub tag: String,

    /// Prepended to the key of every record, sequence or map field.
    /// An empty prefix disables prefixing.
    #[serde(default)]
    pub prefix: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            prefix: String::new(),
        }
    }
}

impl KeyConfig {
    /// Default configuration: tag `yaml`, no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active tag name.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Replace the composite-key prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}
