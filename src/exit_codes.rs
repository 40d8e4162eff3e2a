//! Exit code constants for the tagyaml CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid configuration, unreadable input)
//! - 2: Codec failure (malformed YAML, unsupported value)
//! - 3: Two fields resolve to the same key

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or I/O failure.
pub const USER_ERROR: i32 = 1;

/// The YAML engine rejected the input or the value.
pub const CODEC_FAILURE: i32 = 2;

/// Encoding was refused because two fields share an emitted key.
pub const AMBIGUOUS_KEY: i32 = 3;
