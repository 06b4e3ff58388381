//! Filename slugs from person names.

use super::is_separator_space;

/// Converts a name into a lowercase slug of `[a-z0-9-]` characters.
///
/// - Lowercases the whole string
/// - Collapses each run of whitespace into a single `-`
/// - Drops every remaining character outside `[a-z0-9-]`
///
/// Collapsing runs before filtering means punctuation between letters simply
/// disappears (`"Jane  O'Doe"` → `"jane-odoe"`). Distinct names may map to the
/// same slug.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if is_separator_space(c) {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            out.push(c);
        }
    }

    out
}
