//! Key-naming configuration for tagyaml.
//!
//! `KeyConfig` holds the two settings every resolution reads: the active tag
//! name and the composite-key prefix. It is built once and handed to a
//! [`KeyCodec`](crate::KeyCodec), which applies it to every nested field.
//! It can also be read from a small YAML file (unknown fields are ignored,
//! missing fields take their defaults).

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::KeyConfig;
pub use types::{DEFAULT_TAG, JSON_TAG, YAML_TAG};
