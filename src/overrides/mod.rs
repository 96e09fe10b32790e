//! Override directives and their application to a profile.
//!
//! A directive has the shape `<section>:<payload>`. The payload is classified
//! exactly like a profile line: `key=value` upserts a setting, anything else is
//! appended as a bare line. The section is created (appended) when missing.
//!
//! ```text
//! settings:compiler=clang        -> [settings] compiler=clang
//! tool_requires:cmake/3.27.1     -> [tool_requires] cmake/3.27.1
//! :include(default)              -> default section, bare line
//! ```

use crate::error::{MergeError, Result};
use crate::profile::{Entry, Profile};
use std::fmt;
use std::str::FromStr;


/// Separator between the section designator and the payload.
pub const DELIMITER: char = ':';

/// A parsed override directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    /// Target section; empty targets the default section.
    pub section: String,
    /// What to store in the section. `None` only makes sure the section exists.
    pub entry: Option<Entry>,
}

impl FromStr for Override {
    type Err = MergeError;

    fn from_str(directive: &str) -> Result<Self> {
        let malformed = |reason: &str| MergeError::MalformedOverride {
            directive: directive.to_string(),
            reason: reason.to_string(),
        };

        let (section, payload) = directive
            .split_once(DELIMITER)
            .ok_or_else(|| malformed("expected 'section:key=value' or 'section:value'"))?;

        // The parser trims lines before classifying them, so these would come
        // back as a comment or a section header instead of a setting.
        let leading = payload.trim_start();
        if leading.starts_with('#') {
            return Err(malformed("payload would be read back as a comment"));
        }
        if leading.starts_with('[') {
            return Err(malformed("payload would be read back as a section header"));
        }

        let entry = if payload.is_empty() {
            None
        } else {
            Some(Entry::classify(payload))
        };

        Ok(Self {
            section: section.to_string(),
            entry,
        })
    }
}

impl fmt::Display for Override {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.section, DELIMITER)?;
        match &self.entry {
            Some(Entry::Setting { key, value }) => write!(f, "{}={}", key, value),
            Some(Entry::Bare(line)) => f.write_str(line),
            None => Ok(()),
        }
    }
}

impl Override {
    /// Apply this directive to the section it names.
    pub fn apply_to(&self, profile: &mut Profile) {
        let section = profile.ensure_section(&self.section);
        if let Some(entry) = &self.entry {
            section.insert_entry(entry.clone());
        }
    }
}

/// Parse every directive up front so a bad one aborts before any mutation.
pub fn parse_all<S: AsRef<str>>(directives: &[S]) -> Result<Vec<Override>> {
    directives.iter().map(|d| d.as_ref().parse()).collect()
}

/// Apply directives in order; later directives for the same key win.
///
/// Returns the number of directives applied.
pub fn apply(profile: &mut Profile, overrides: &[Override]) -> usize {
    for directive in overrides {
        directive.apply_to(profile);
    }
    overrides.len()
}
