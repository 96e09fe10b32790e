//! Profile serializer.

use super::model::Profile;
use std::fmt;

/// Render a profile back to text.
///
/// The default section comes out first with no header. Every named section
/// gets a `[name]` header preceded by a blank line, except when it would be
/// the very first line of the output. Within a section, settings are written
/// in key insertion order, then bare lines in their original order.
pub fn serialize(profile: &Profile) -> String {
    let mut out = String::new();

    for (name, section) in profile.sections() {
        if !name.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push('[');
            out.push_str(name);
            out.push_str("]\n");
        }

        for (key, value) in section.settings() {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }

        for line in section.bare_lines() {
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
