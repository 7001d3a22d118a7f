//! Plain text and URL payloads

use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_URL_SCHEME, MAX_TEXT_CHARS, URL_SCHEMES};

/// Free text input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainTextInput {
    pub text: String,
}

impl PlainTextInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Trimmed text, cut to the first [`MAX_TEXT_CHARS`] characters.
    pub fn encode(&self) -> String {
        self.text.trim().chars().take(MAX_TEXT_CHARS).collect()
    }
}

/// URL input, scheme optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlInput {
    pub raw: String,
}

impl UrlInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn encode(&self) -> String {
        let url = self.raw.trim();
        if url.is_empty() {
            return String::new();
        }
        if URL_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            url.to_string()
        } else {
            format!("{}{}", DEFAULT_URL_SCHEME, url)
        }
    }
}
