//! Encode side: declared names to emitted keys.

use super::KeyCodec;
use crate::error::{KeyError, Result};
use crate::resolve::Resolution;
use crate::shape::{FieldDescriptor, Shape};
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;

/// Emitted key of one field, after resolution and prefixing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EmittedKey {
    pub key: String,
    pub omit_empty: bool,
}

impl KeyCodec {
    /// Emitted key for every field of a record, `None` for skipped fields.
    ///
    /// Fails when two visible fields would share a key.
    pub(crate) fn emitted_keys(
        &self,
        fields: &[FieldDescriptor],
    ) -> Result<Vec<Option<EmittedKey>>> {
        let resolver = self.resolver();
        let policy = self.prefix_policy();
        let mut owners = HashMap::new();
        let mut keys = Vec::with_capacity(fields.len());

        for field in fields {
            let Resolution::Key { key, omit_empty } = resolver.resolve(field) else {
                keys.push(None);
                continue;
            };
            let key = policy.wrap(&field.shape, &key);
            claim(&mut owners, &key, &field.name)?;
            keys.push(Some(EmittedKey { key, omit_empty }));
        }

        Ok(keys)
    }

    pub(crate) fn encode_value(&self, value: Value, shape: &Shape) -> Result<Value> {
        match shape {
            Shape::Scalar => Ok(value),
            Shape::Pointer(inner) => {
                if !value.is_null() {
                    return self.encode_value(value, inner);
                }
                // A missing sequence is written as an empty one; every
                // other missing value stays an explicit null.
                match inner.effective() {
                    Shape::Sequence(_) => Ok(Value::Sequence(Vec::new())),
                    _ => Ok(Value::Null),
                }
            }
            Shape::Sequence(element) => match value {
                Value::Sequence(items) => items
                    .into_iter()
                    .map(|item| self.encode_value(item, element))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Sequence),
                other => Ok(other),
            },
            Shape::Map(element) => match value {
                Value::Mapping(entries) => {
                    let mut out = Mapping::with_capacity(entries.len());
                    for (key, item) in entries {
                        out.insert(key, self.encode_value(item, element)?);
                    }
                    Ok(Value::Mapping(out))
                }
                other => Ok(other),
            },
            Shape::Record(record) => match value {
                Value::Mapping(entries) => {
                    self.encode_record(entries, &record.fields()).map(Value::Mapping)
                }
                other => Ok(other),
            },
        }
    }

    fn encode_record(&self, entries: Mapping, fields: &[FieldDescriptor]) -> Result<Mapping> {
        let keys = self.emitted_keys(fields)?;
        let mut owners: HashMap<String, String> = keys
            .iter()
            .zip(fields)
            .filter_map(|(key, field)| {
                key.as_ref()
                    .map(|k| (k.key.clone(), field.name.to_string()))
            })
            .collect();
        let mut out = Mapping::with_capacity(entries.len());

        for (key, value) in entries {
            let Some(name) = key.as_str() else {
                out.insert(key, value);
                continue;
            };
            let Some(index) = fields.iter().position(|f| f.name == name) else {
                // Serialized by serde but not described: keep it as is.
                claim(&mut owners, name, name)?;
                out.insert(key, value);
                continue;
            };
            let field = &fields[index];
            let Some(emitted) = &keys[index] else {
                tracing::debug!(field = %field.name, "dropping skipped field");
                continue;
            };

            if emitted.omit_empty && is_empty(&value, &field.shape) {
                continue;
            }
            let value = self.encode_value(value, &field.shape)?;
            out.insert(Value::String(emitted.key.clone()), value);
        }

        Ok(out)
    }
}

fn claim(owners: &mut HashMap<String, String>, key: &str, field: &str) -> Result<()> {
    if let Some(first) = owners.get(key) {
        return Err(KeyError::AmbiguousKey {
            key: key.to_string(),
            first: first.clone(),
            second: field.to_string(),
        });
    }
    owners.insert(key.to_string(), field.to_string());
    Ok(())
}

/// Values `omitempty` leaves out, judged before encoding.
///
/// A present optional is never empty, whatever it holds.
fn is_empty(value: &Value, shape: &Shape) -> bool {
    if let Shape::Pointer(_) = shape {
        return value.is_null();
    }
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(entries) => entries.is_empty(),
        Value::Tagged(_) => false,
    }
}
