//! Tag name constants and serde default functions for `KeyConfig`.

/// Built-in secondary annotation consulted after the configured tag.
pub const YAML_TAG: &str = "yaml";

/// Built-in tertiary annotation consulted after the `yaml` tag.
pub const JSON_TAG: &str = "json";

/// Tag name used when none is configured.
pub const DEFAULT_TAG: &str = YAML_TAG;

// Default value functions for serde
pub(crate) fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}
