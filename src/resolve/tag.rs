//! Parsing of annotation values of the form `key[,option...]`.

/// A parsed annotation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagValue<'a> {
    /// Key part; may be empty (`",omitempty"`).
    pub key: &'a str,
    /// `omitempty` option present.
    pub omit_empty: bool,
}

impl<'a> TagValue<'a> {
    /// Split `raw` at commas. Unknown options are ignored.
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.split(',');
        let key = parts.next().unwrap_or_default();
        let omit_empty = parts.any(|option| option.trim() == "omitempty");

        Self { key, omit_empty }
    }
}
