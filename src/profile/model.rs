//! Profile and Section definitions.

use super::entry::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// Name of the implicit section preceding any `[section]` header.
pub const DEFAULT_SECTION: &str = "";

/// A named group of settings and bare lines.
///
/// Equality is order-sensitive: two sections are equal only when their
/// settings appear in the same order.
#[derive(Debug, Clone, Default, Eq, Serialize)]
pub struct Section {
    settings: IndexMap<String, String>,
    bare_lines: Vec<String>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a setting.
    ///
    /// A new key is appended; an existing key keeps its position and only its
    /// value changes. Returns the previous value, if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.settings.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    pub fn push_bare(&mut self, line: impl Into<String>) {
        self.bare_lines.push(line.into());
    }

    /// Store a classified line: settings are upserted, bare lines appended.
    pub fn insert_entry(&mut self, entry: Entry) {
        match entry {
            Entry::Setting { key, value } => {
                self.set(key, value);
            }
            Entry::Bare(line) => self.push_bare(line),
        }
    }

    /// Settings in key insertion order.
    pub fn settings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn bare_lines(&self) -> &[String] {
        &self.bare_lines
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty() && self.bare_lines.is_empty()
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap's own equality ignores order.
        self.settings.iter().eq(other.settings.iter()) && self.bare_lines == other.bare_lines
    }
}

/// The full in-memory representation of a profile file.
///
/// Sections are kept in insertion order. The default section is created by
/// every constructor, so it is always present and always first. Equality
/// compares sections in order.
#[derive(Debug, Clone, Eq, Serialize)]
#[serde(transparent)]
pub struct Profile {
    sections: IndexMap<String, Section>,
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.sections.iter().eq(other.sections.iter())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

impl Profile {
    /// Create a profile holding only an empty default section.
    pub fn new() -> Self {
        let mut sections = IndexMap::new();
        sections.insert(DEFAULT_SECTION.to_string(), Section::new());
        Self { sections }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Return the named section, appending an empty one if it does not exist.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }

    /// Replace the named section with an empty one.
    ///
    /// An existing section keeps its position but loses its content; a new
    /// name is appended.
    pub fn reset_section(&mut self, name: &str) -> &mut Section {
        let (index, _) = self.sections.insert_full(name.to_string(), Section::new());
        &mut self.sections[index]
    }

    /// Sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Number of sections, the default section included.
    pub fn len(&self) -> usize {
        self.sections.len()
    }
}
