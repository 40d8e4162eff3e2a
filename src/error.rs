//! Error types for tagyaml.
//!
//! Uses thiserror for derive macros. Codec failures are passed through from
//! serde_yaml untouched; everything else is produced by this crate.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for tagyaml operations.
#[derive(Error, Debug)]
pub enum KeyError {
    /// The YAML engine rejected the document or the value.
    #[error(transparent)]
    Codec(#[from] serde_yaml::Error),

    /// Two fields of one record would be emitted under the same key.
    #[error("fields '{first}' and '{second}' both resolve to key '{key}'")]
    AmbiguousKey {
        key: String,
        first: String,
        second: String,
    },

    /// Configuration is invalid or could not be read.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading the input or writing the output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),
}

impl KeyError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            KeyError::Codec(_) => exit_codes::CODEC_FAILURE,
            KeyError::AmbiguousKey { .. } => exit_codes::AMBIGUOUS_KEY,
            KeyError::Config(_) => exit_codes::USER_ERROR,
            KeyError::Io(_) => exit_codes::USER_ERROR,
            KeyError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for tagyaml operations.
pub type Result<T> = std::result::Result<T, KeyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_error_has_correct_exit_code() {
        let err: KeyError = serde_yaml::from_str::<u32>("not a number").unwrap_err().into();
        assert_eq!(err.exit_code(), exit_codes::CODEC_FAILURE);
    }

    #[test]
    fn ambiguous_key_has_correct_exit_code() {
        let err = KeyError::AmbiguousKey {
            key: "name".to_string(),
            first: "name".to_string(),
            second: "alias".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::AMBIGUOUS_KEY);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = KeyError::Config("tag must not be empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn codec_error_message_is_not_rewrapped() {
        let inner = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let expected = inner.to_string();
        let err = KeyError::from(inner);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = KeyError::AmbiguousKey {
            key: "name".to_string(),
            first: "name".to_string(),
            second: "alias".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fields 'name' and 'alias' both resolve to key 'name'"
        );

        let err = KeyError::Config("tag must not be empty".to_string());
        assert_eq!(err.to_string(), "invalid configuration: tag must not be empty");
    }
}
