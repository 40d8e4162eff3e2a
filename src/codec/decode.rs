//! Decode side: document keys back to declared names.

use super::KeyCodec;
use crate::shape::{FieldDescriptor, RecordShape, Shape};
use serde_yaml::{Mapping, Value};

impl KeyCodec {
    /// Overlay `document` onto `current`, both as value trees of `shape`.
    ///
    /// The result uses declared field names and is ready for
    /// `serde_yaml::from_value`.
    pub(crate) fn decode_value(&self, current: Value, document: Value, shape: &Shape) -> Value {
        match shape {
            Shape::Scalar => document,
            Shape::Pointer(inner) => {
                if document.is_null() {
                    Value::Null
                } else {
                    self.decode_value(current, document, inner)
                }
            }
            Shape::Sequence(element) => match document {
                Value::Sequence(items) => Value::Sequence(
                    items
                        .into_iter()
                        .map(|item| self.decode_value(Value::Null, item, element))
                        .collect(),
                ),
                Value::Null => Value::Sequence(Vec::new()),
                other => other,
            },
            Shape::Map(element) => match document {
                Value::Mapping(entries) => {
                    let mut target = match current {
                        Value::Mapping(existing) => existing,
                        _ => Mapping::new(),
                    };
                    for (key, item) in entries {
                        merge_entry(&mut target, key, |existing| {
                            self.decode_value(existing, item, element)
                        });
                    }
                    Value::Mapping(target)
                }
                Value::Null => Value::Mapping(Mapping::new()),
                other => other,
            },
            Shape::Record(record) => match document {
                Value::Mapping(entries) => self.decode_record(current, entries, record),
                // An explicit null resets the record to its zero value.
                Value::Null => match record.zero() {
                    Value::Null => current,
                    zero => zero,
                },
                other => other,
            },
        }
    }

    /// Records not yet present in the target start from their zero value,
    /// so fields the document leaves out are zero rather than missing.
    fn decode_record(&self, current: Value, entries: Mapping, record: &RecordShape) -> Value {
        let mut target = match current {
            Value::Mapping(existing) => existing,
            _ => match record.zero() {
                Value::Mapping(zero) => zero,
                _ => Mapping::new(),
            },
        };
        let fields = record.fields();

        for (key, item) in entries {
            let Some(literal) = key.as_str() else {
                tracing::debug!(key = ?key, "ignoring non-string key");
                continue;
            };
            let Some(field) = self.match_field(literal, &fields) else {
                if is_undescribed(literal, &fields, &target) {
                    // Encoded under its serde name; read it back the same way.
                    target.insert(key, item);
                } else {
                    tracing::debug!(key = literal, "ignoring unknown key");
                }
                continue;
            };
            let name = Value::String(field.name.to_string());
            merge_entry(&mut target, name, |existing| {
                self.decode_value(existing, item, &field.shape)
            });
        }

        Value::Mapping(target)
    }

    /// Field a literal document key belongs to.
    ///
    /// The prefix is stripped first; if the stripped key matches nothing the
    /// literal key is tried, for scalar fields whose own key starts with the
    /// prefix.
    pub(crate) fn match_field<'f>(
        &self,
        literal: &str,
        fields: &'f [FieldDescriptor],
    ) -> Option<&'f FieldDescriptor> {
        let resolver = self.resolver();
        let (base, prefixed) = self.prefix_policy().unwrap(literal);

        resolver
            .find(base, fields)
            .or_else(|| prefixed.then(|| resolver.find(literal, fields)).flatten())
    }
}

/// A serde field of the record that has no descriptor.
fn is_undescribed(key: &str, fields: &[FieldDescriptor], target: &Mapping) -> bool {
    target.contains_key(key) && !fields.iter().any(|field| field.name == key)
}

/// Replace `target[key]` with `merge(old value or null)`, keeping its position.
fn merge_entry(target: &mut Mapping, key: Value, merge: impl FnOnce(Value) -> Value) {
    match target.get_mut(&key) {
        Some(slot) => {
            let existing = std::mem::replace(slot, Value::Null);
            *slot = merge(existing);
        }
        None => {
            target.insert(key, merge(Value::Null));
        }
    }
}
