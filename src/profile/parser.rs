//! Line-oriented profile parser.

use super::entry::Entry;
use super::model::{DEFAULT_SECTION, Profile};

/// Parse profile text into a [`Profile`].
///
/// Parsing never fails. Each line is trimmed, then:
/// - blank lines and `#` comments are skipped;
/// - `[name]` starts a new, empty section (an earlier section with the same
///   name is discarded);
/// - anything else is an [`Entry`] stored in the current section.
pub fn parse(text: &str) -> Profile {
    let mut profile = Profile::new();
    let mut current = DEFAULT_SECTION.to_string();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = header_name(line) {
            profile.reset_section(name);
            current = name.to_string();
            continue;
        }

        profile
            .ensure_section(&current)
            .insert_entry(Entry::classify(line));
    }

    profile
}

/// Extract the section name from a header line.
///
/// The name runs from after the leading `[` to the first `]`; anything past
/// the `]` is ignored. Without a `]` the rest of the line is the name.
fn header_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    Some(match rest.find(']') {
        Some(end) => &rest[..end],
        None => rest,
    })
}
