//! Classification of a single profile line or override payload.

/// A non-header, non-comment line of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// `key=value`, split at the first `=`. The value may contain more `=`.
    Setting { key: String, value: String },
    /// Any line without `=`, kept verbatim.
    Bare(String),
}

impl Entry {
    /// Classify `text` by the presence of `=`.
    pub fn classify(text: &str) -> Self {
        match text.split_once('=') {
            Some((key, value)) => Entry::Setting {
                key: key.to_string(),
                value: value.to_string(),
            },
            None => Entry::Bare(text.to_string()),
        }
    }
}
