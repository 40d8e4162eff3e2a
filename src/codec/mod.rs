//! Marshal and unmarshal through serde_yaml with resolved field keys.
//!
//! serde_yaml does all the YAML work. `KeyCodec` only rewrites mapping keys
//! in the intermediate [`Value`] tree: declared names become resolved (and
//! possibly prefixed) keys on the way out, and document keys are mapped back
//! to declared names on the way in. The walk is driven by the static
//! [`Shape`](crate::Shape) of the value, so it reaches records nested in
//! sequences, maps and optionals.

mod decode;
mod encode;

#[cfg(test)]
mod tests;

use crate::config::KeyConfig;
use crate::error::Result;
use crate::prefix::PrefixPolicy;
use crate::resolve::KeyResolver;
use crate::shape::HasShape;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::io::{Read, Write};

/// Encoder/decoder bound to one [`KeyConfig`].
///
/// The configuration is fixed at construction and applies to every field
/// visited by every call. The codec holds no other state and can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct KeyCodec {
    config: KeyConfig,
}

impl KeyCodec {
    pub fn new(config: KeyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeyConfig {
        &self.config
    }

    pub fn resolver(&self) -> KeyResolver<'_> {
        KeyResolver::new(&self.config)
    }

    pub fn prefix_policy(&self) -> PrefixPolicy<'_> {
        PrefixPolicy::new(&self.config)
    }

    /// Encode `value` into a YAML value tree with resolved keys.
    pub fn to_value<T>(&self, value: &T) -> Result<Value>
    where
        T: Serialize + HasShape + ?Sized,
    {
        let tree = serde_yaml::to_value(value)?;
        self.encode_value(tree, &T::shape())
    }

    /// Encode `value` as a YAML document.
    pub fn to_string<T>(&self, value: &T) -> Result<String>
    where
        T: Serialize + HasShape + ?Sized,
    {
        let tree = self.to_value(value)?;
        Ok(serde_yaml::to_string(&tree)?)
    }

    pub fn to_vec<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + HasShape + ?Sized,
    {
        Ok(self.to_string(value)?.into_bytes())
    }

    pub fn to_writer<W, T>(&self, writer: W, value: &T) -> Result<()>
    where
        W: Write,
        T: Serialize + HasShape + ?Sized,
    {
        let tree = self.to_value(value)?;
        serde_yaml::to_writer(writer, &tree)?;
        Ok(())
    }

    /// Decode `bytes` onto `target`.
    ///
    /// Fields the document does not mention keep their current value;
    /// document keys that match no field are ignored. An empty document
    /// leaves `target` unchanged.
    pub fn decode_into<T>(&self, bytes: &[u8], target: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned + HasShape,
    {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
        let document: Value = serde_yaml::from_slice(bytes)?;
        self.overlay(document, target)
    }

    /// Decode an already parsed document onto `target`.
    pub fn overlay<T>(&self, document: Value, target: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned + HasShape,
    {
        let current = serde_yaml::to_value(&*target)?;
        let merged = self.decode_value(current, document, &T::shape());
        *target = serde_yaml::from_value(merged)?;
        Ok(())
    }

    /// Decode into a fresh `T::default()`.
    pub fn from_slice<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: Serialize + DeserializeOwned + HasShape + Default,
    {
        let mut target = T::default();
        self.decode_into(bytes, &mut target)?;
        Ok(target)
    }

    pub fn from_str<T>(&self, s: &str) -> Result<T>
    where
        T: Serialize + DeserializeOwned + HasShape + Default,
    {
        self.from_slice(s.as_bytes())
    }

    pub fn from_reader<R, T>(&self, mut reader: R) -> Result<T>
    where
        R: Read,
        T: Serialize + DeserializeOwned + HasShape + Default,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.from_slice(&bytes)
    }
}
