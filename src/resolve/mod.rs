//! Field key resolution.
//!
//! A field's base key comes from the first non-empty annotation among, in
//! order: the configured tag, the `yaml` tag and the `json` tag. With none
//! of them present the declared name is lower-cased. Sources are never
//! merged; the first one found wins even if its key part is empty.

mod tag;


pub use tag::TagValue;

use crate::config::{JSON_TAG, KeyConfig, YAML_TAG};
use crate::shape::FieldDescriptor;

/// Outcome of resolving one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Emit/expect the field under `key`.
    Key { key: String, omit_empty: bool },
    /// The field takes no part in encoding or decoding.
    Skip,
}

impl Resolution {
    /// The base key, unless the field is skipped.
    pub fn key(&self) -> Option<&str> {
        match self {
            Resolution::Key { key, .. } => Some(key),
            Resolution::Skip => None,
        }
    }

    pub fn omit_empty(&self) -> bool {
        matches!(self, Resolution::Key { omit_empty: true, .. })
    }
}

/// Maps field descriptors to base keys under one configuration.
#[derive(Debug, Clone, Copy)]
pub struct KeyResolver<'a> {
    config: &'a KeyConfig,
}

impl<'a> KeyResolver<'a> {
    pub fn new(config: &'a KeyConfig) -> Self {
        Self { config }
    }

    /// Resolve the base key of `field`.
    pub fn resolve(&self, field: &FieldDescriptor) -> Resolution {
        if !field.visible {
            return Resolution::Skip;
        }

        let sources = [self.config.tag.as_str(), YAML_TAG, JSON_TAG];
        let winner = sources.iter().find_map(|tag| {
            field
                .annotation(tag)
                .filter(|value| !value.is_empty())
                .map(|value| (*tag, value))
        });

        let resolution = match winner {
            Some((_, "-")) => Resolution::Skip,
            Some((_, raw)) => {
                let parsed = TagValue::parse(raw);
                let key = if parsed.key.is_empty() {
                    field.name.to_lowercase()
                } else {
                    parsed.key.to_string()
                };
                Resolution::Key {
                    key,
                    omit_empty: parsed.omit_empty,
                }
            }
            None => Resolution::Key {
                key: field.name.to_lowercase(),
                omit_empty: false,
            },
        };

        tracing::trace!(
            field = %field.name,
            source = winner.map(|(tag, _)| tag).unwrap_or("name"),
            resolution = ?resolution,
            "resolved field key"
        );
        resolution
    }

    /// The field whose resolved key equals `base_key` exactly.
    pub fn find<'f>(
        &self,
        base_key: &str,
        fields: &'f [FieldDescriptor],
    ) -> Option<&'f FieldDescriptor> {
        fields
            .iter()
            .find(|field| self.resolve(field).key() == Some(base_key))
    }
}
