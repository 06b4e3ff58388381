//! Literal placeholder substitution.

use super::token::{PlaceholderMap, Token};

/// Error returned when a template cannot be fully substituted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The template uses a recognized token that has no value in the map.
    #[error("template uses {{{{{token}}}}} but no value was provided for it")]
    MissingPlaceholder { token: Token },
}

/// Replaces every `{{TOKEN}}` marker in `template` with its mapped value.
///
/// Replacement is literal and case-sensitive. Sequences that look like markers
/// but name no recognized token (`{{FOO}}`, `{{ name }}`) pass through
/// untouched. Fails before substituting anything if the template contains a
/// recognized marker the map has no value for.
///
/// The template is scanned once, left to right. Inserted values are never
/// scanned again, so a value that itself contains a marker is emitted verbatim.
pub fn render(template: &str, placeholders: &PlaceholderMap) -> Result<String, RenderError> {
    for token in Token::ALL {
        if placeholders.get(token).is_none() && template.contains(&token.marker()) {
            return Err(RenderError::MissingPlaceholder { token });
        }
    }

    let markers: Vec<(String, &str)> = placeholders
        .iter()
        .map(|(token, value)| (token.marker(), value))
        .collect();

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match markers.iter().find(|(marker, _)| tail.starts_with(marker.as_str())) {
            Some((marker, value)) => {
                out.push_str(value);
                rest = &tail[marker.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}
