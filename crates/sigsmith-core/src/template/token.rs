//! The fixed placeholder set and the value map keyed by it.

use std::collections::BTreeMap;
use std::fmt;

/// One of the placeholders a signature template may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Name,
    Title,
    Email,
    Phone,
    PhoneLink,
    ProfilePhotoUrl,
    LogoUrl,
}

impl Token {
    /// Every recognized token. No token name is a substring of another's
    /// delimited marker, so replacement order does not matter.
    pub const ALL: [Token; 7] = [
        Token::Name,
        Token::Title,
        Token::Email,
        Token::Phone,
        Token::PhoneLink,
        Token::ProfilePhotoUrl,
        Token::LogoUrl,
    ];

    /// Bare token name as written between the braces.
    pub fn name(self) -> &'static str {
        match self {
            Token::Name => "NAME",
            Token::Title => "TITLE",
            Token::Email => "EMAIL",
            Token::Phone => "PHONE",
            Token::PhoneLink => "PHONE_LINK",
            Token::ProfilePhotoUrl => "PROFILE_PHOTO_URL",
            Token::LogoUrl => "LOGO_URL",
        }
    }

    /// Delimited marker as it appears in a template, e.g. `{{NAME}}`.
    pub fn marker(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values to substitute, keyed by token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    values: BTreeMap<Token, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `token`, returning the previous one if any.
    pub fn insert(&mut self, token: Token, value: impl Into<String>) -> Option<String> {
        self.values.insert(token, value.into())
    }

    pub fn get(&self, token: Token) -> Option<&str> {
        self.values.get(&token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every recognized token has a value.
    pub fn is_complete(&self) -> bool {
        Token::ALL.iter().all(|t| self.values.contains_key(t))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> {
        self.values.iter().map(|(t, v)| (*t, v.as_str()))
    }
}

impl<V: Into<String>> FromIterator<(Token, V)> for PlaceholderMap {
    fn from_iter<I: IntoIterator<Item = (Token, V)>>(iter: I) -> Self {
        let mut map = PlaceholderMap::new();
        for (token, value) in iter {
            map.insert(token, value);
        }
        map
    }
}
