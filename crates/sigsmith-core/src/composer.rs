//! Signature composer: one person record in, rendered signature out.
//!
//! Shared by the interactive and batch drivers. Pure apart from the template
//! and configuration it is handed; persisting the result is the caller's job.

use crate::config::{Configuration, LOGO_FILENAME};
use crate::error::GenerationError;
use crate::naming::{build_asset_url, normalize_phone, output_file_name};
use crate::record::PersonRecord;
use crate::template::{render, PlaceholderMap, Token};

/// Rendered signature for one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub person_name: String,
    /// `signature-<slug>.html`; not unique across people.
    pub output_file_name: String,
    pub output_content: String,
}

/// Builds the full placeholder map for one person.
pub fn placeholders_for(record: &PersonRecord, config: &Configuration) -> PlaceholderMap {
    let base = config.base_url();
    [
        (Token::Name, record.name.clone()),
        (Token::Title, record.title.clone()),
        (Token::Email, record.email.clone()),
        (Token::Phone, record.phone.clone()),
        (Token::PhoneLink, normalize_phone(&record.phone)),
        (
            Token::ProfilePhotoUrl,
            build_asset_url(base, &record.photo_filename),
        ),
        (Token::LogoUrl, build_asset_url(base, LOGO_FILENAME)),
    ]
    .into_iter()
    .collect()
}

/// Renders `template` for `record` and derives its output file name.
pub fn compose(
    record: &PersonRecord,
    template: &str,
    config: &Configuration,
) -> Result<GenerationResult, GenerationError> {
    let placeholders = placeholders_for(record, config);
    let output_content = render(template, &placeholders)?;
    let output_file_name = output_file_name(&record.name);
    tracing::debug!(name = %record.name, file = %output_file_name, "composed signature");
    Ok(GenerationResult {
        person_name: record.name.clone(),
        output_file_name,
        output_content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> PersonRecord {
        PersonRecord {
            name: "Jane Doe".into(),
            title: "Head of Product".into(),
            email: "jane@x.com".into(),
            phone: "+1 (555) 123-4567".into(),
            photo_filename: "profile-jane.jpg".into(),
        }
    }

    #[test]
    fn end_to_end_substitution() {
        let cfg = Configuration::new("https://x/").unwrap();
        let out = compose(&jane(), "Hi {{NAME}} <{{EMAIL}}> {{PHONE_LINK}}", &cfg).unwrap();
        assert_eq!(out.output_content, "Hi Jane Doe <jane@x.com> +15551234567");
        assert_eq!(out.output_file_name, "signature-jane-doe.html");
        assert_eq!(out.person_name, "Jane Doe");
    }

    #[test]
    fn placeholder_map_is_complete() {
        let cfg = Configuration::new("https://cdn.example.com/assets/").unwrap();
        let map = placeholders_for(&jane(), &cfg);
        assert!(map.is_complete());
        assert_eq!(map.get(Token::Phone), Some("+1 (555) 123-4567"));
        assert_eq!(map.get(Token::PhoneLink), Some("+15551234567"));
        assert_eq!(
            map.get(Token::ProfilePhotoUrl),
            Some("https://cdn.example.com/assets/profile-jane.jpg")
        );
        assert_eq!(
            map.get(Token::LogoUrl),
            Some("https://cdn.example.com/assets/spendrule-logo.png")
        );
    }

    #[test]
    fn logo_url_same_for_everyone() {
        let cfg = Configuration::new("https://x").unwrap();
        let mut other = jane();
        other.name = "John Roe".into();
        other.photo_filename = "john.png".into();
        assert_eq!(
            placeholders_for(&jane(), &cfg).get(Token::LogoUrl),
            placeholders_for(&other, &cfg).get(Token::LogoUrl)
        );
    }

    #[test]
    fn rendered_output_has_no_markers() {
        let cfg = Configuration::new("https://x").unwrap();
        let template: String = Token::ALL
            .iter()
            .map(|t| format!("<p>{}</p>", t.marker()))
            .collect();
        let out = compose(&jane(), &template, &cfg).unwrap();
        for token in Token::ALL {
            assert!(!out.output_content.contains(&token.marker()));
        }
    }

    #[test]
    fn unknown_markers_survive_composition() {
        let cfg = Configuration::new("https://x").unwrap();
        let out = compose(&jane(), "{{NAME}} {{DEPARTMENT}}", &cfg).unwrap();
        assert_eq!(out.output_content, "Jane Doe {{DEPARTMENT}}");
    }
}
