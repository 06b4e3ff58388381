//! Field normalization and name derivation.
//!
//! Turns raw person fields into the values the template needs: a dialable
//! phone string, a filename slug, and absolute asset URLs built from the
//! configured base URL.

mod asset;
mod phone;
mod slug;

pub use asset::build_asset_url;
pub use phone::normalize_phone;
pub use slug::slugify;

/// Prefix shared by every generated signature file.
const OUTPUT_PREFIX: &str = "signature-";

/// Extension of generated signature files.
const OUTPUT_EXTENSION: &str = ".html";

/// Separator whitespace: Unicode `White_Space` plus the byte order mark
/// (U+FEFF), minus NEXT LINE (U+0085).
pub(crate) fn is_separator_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Derives the output file name for a person.
///
/// The name depends only on the slug, so two people whose names slugify
/// identically share a file name and the later write wins.
///
/// # Examples
///
/// - `output_file_name("Jane Doe")` → `"signature-jane-doe.html"`
/// - `output_file_name("O'Brien  Co.")` → `"signature-obrien-co.html"`
pub fn output_file_name(name: &str) -> String {
    format!("{}{}{}", OUTPUT_PREFIX, slugify(name), OUTPUT_EXTENSION)
}
