//! Composite-key prefixing.
//!
//! On encode, fields whose effective shape is a record, sequence or map get
//! the configured prefix in front of their key; scalar fields (optional
//! scalars included) never do. On decode the prefix is stripped textually.

use crate::config::KeyConfig;
use crate::error::{KeyError, Result};
use crate::shape::Shape;
use serde_yaml::{Mapping, Value};

/// Applies and removes the configured composite-key prefix.
#[derive(Debug, Clone, Copy)]
pub struct PrefixPolicy<'a> {
    prefix: &'a str,
}

impl<'a> PrefixPolicy<'a> {
    pub fn new(config: &'a KeyConfig) -> Self {
        Self {
            prefix: &config.prefix,
        }
    }

    /// Key to emit for a field of declared `shape` whose base key is `base`.
    ///
    /// Classification uses the declared type only; a `None` optional record
    /// is still prefixed.
    pub fn wrap(&self, shape: &Shape, base: &str) -> String {
        if !self.prefix.is_empty() && shape.is_composite() {
            format!("{}{}", self.prefix, base)
        } else {
            base.to_string()
        }
    }

    /// Strip the prefix from a document key.
    ///
    /// Returns the remaining key and whether the prefix was present.
    pub fn unwrap<'k>(&self, key: &'k str) -> (&'k str, bool) {
        if self.prefix.is_empty() {
            return (key, false);
        }
        match key.strip_prefix(self.prefix) {
            Some(base) => (base, true),
            None => (key, false),
        }
    }

    /// Re-key a document written under prefix `from` to this policy's prefix.
    ///
    /// Every mapping key starting with `from` has it replaced, at any depth;
    /// other keys are kept. Fails if a rewritten key collides with another
    /// key of the same mapping.
    pub fn reprefix(&self, document: Value, from: &str) -> Result<Value> {
        if from.is_empty() {
            return Err(KeyError::UserError(
                "source prefix must not be empty".to_string(),
            ));
        }
        self.reprefix_value(document, from)
    }

    fn reprefix_value(&self, value: Value, from: &str) -> Result<Value> {
        match value {
            Value::Mapping(entries) => {
                let mut out = Mapping::with_capacity(entries.len());
                let mut sources: Vec<(Value, String)> = Vec::with_capacity(entries.len());
                for (key, item) in entries {
                    let source = key.as_str().map(str::to_string);
                    let key = match key.as_str().and_then(|k| k.strip_prefix(from)) {
                        Some(base) => Value::String(format!("{}{}", self.prefix, base)),
                        None => key,
                    };
                    if let Some((_, first)) = sources.iter().find(|(k, _)| *k == key) {
                        return Err(KeyError::AmbiguousKey {
                            key: key.as_str().unwrap_or_default().to_string(),
                            first: first.clone(),
                            second: source.unwrap_or_default(),
                        });
                    }
                    sources.push((key.clone(), source.unwrap_or_default()));
                    out.insert(key, self.reprefix_value(item, from)?);
                }
                Ok(Value::Mapping(out))
            }
            Value::Sequence(items) => items
                .into_iter()
                .map(|item| self.reprefix_value(item, from))
                .collect::<Result<Vec<_>>>()
                .map(Value::Sequence),
            other => Ok(other),
        }
    }
}
