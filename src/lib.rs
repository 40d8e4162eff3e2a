//! tagyaml: tag-driven field keys for serde_yaml documents.
//!
//! serde_yaml does the YAML work. This crate decides which key each record
//! field is written under and maps document keys back onto fields:
//!
//! - the key comes from the configured tag, then the `yaml` tag, then the
//!   `json` tag, then the lower-cased field name;
//! - fields holding a record, sequence or map (through any number of
//!   optionals) get the configured prefix in front of their key, which is
//!   stripped again when decoding.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use tagyaml::{KeyCodec, KeyConfig};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Service {
//!     name: String,
//!     ports: Vec<u16>,
//! }
//!
//! tagyaml::record!(Service {
//!     name(pl = "service"),
//!     ports,
//! });
//!
//! let codec = KeyCodec::new(KeyConfig::new().with_tag("pl").with_prefix("list."));
//! let service = Service { name: "web".into(), ports: vec![80] };
//! let yaml = codec.to_string(&service)?;
//! assert_eq!(yaml, "service: web\nlist.ports:\n- 80\n");
//! assert_eq!(codec.from_str::<Service>(&yaml)?, service);
//! # Ok::<(), tagyaml::KeyError>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod prefix;
pub mod resolve;
pub mod shape;

pub use codec::KeyCodec;
pub use config::KeyConfig;
pub use error::{KeyError, Result};
pub use prefix::PrefixPolicy;
pub use resolve::{KeyResolver, Resolution};
pub use shape::{FieldDescriptor, HasShape, Record, RecordShape, Shape, ShapeKind, Tag};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encode with the default configuration (tag `yaml`, no prefix).
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: Serialize + HasShape + ?Sized,
{
    KeyCodec::default().to_string(value)
}

/// Decode with the default configuration (tag `yaml`, no prefix).
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: Serialize + DeserializeOwned + HasShape + Default,
{
    KeyCodec::default().from_str(s)
}
