//! Asset URL composition.

/// Joins `filename` onto `base_url` with exactly one `/`.
///
/// Only a single trailing slash is stripped from the base, so a base ending in
/// `//` keeps one of them. Reachability of the resulting URL is not checked.
pub fn build_asset_url(base_url: &str, filename: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{}/{}", base, filename)
}
