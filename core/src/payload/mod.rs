//! Payload encoders, one per content kind
//!
//! Each encoder maps an input record to the string embedded in the QR
//! symbol. Encoders never fail: insufficient input yields an empty string,
//! which callers treat as "nothing to generate".

pub mod constants;
mod message;
mod quote;
mod text;
mod vcard;
mod wifi;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use message::{EmailDraft, SmsDraft};
pub use quote::quote;
pub use text::{PlainTextInput, UrlInput};
pub use vcard::ContactCard;
pub use wifi::{WifiCredential, WifiSecurity};

/// Kind of content being encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    PlainText,
    Url,
    WifiCredential,
    EmailDraft,
    SmsDraft,
    ContactCard,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::PlainText => "text",
            ContentKind::Url => "url",
            ContentKind::WifiCredential => "wifi",
            ContentKind::EmailDraft => "email",
            ContentKind::SmsDraft => "sms",
            ContentKind::ContactCard => "vcard",
        };
        f.write_str(name)
    }
}

/// A generation request's input: the kind tag together with its record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    PlainText(PlainTextInput),
    Url(UrlInput),
    WifiCredential(WifiCredential),
    EmailDraft(EmailDraft),
    SmsDraft(SmsDraft),
    ContactCard(ContactCard),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::PlainText(_) => ContentKind::PlainText,
            Content::Url(_) => ContentKind::Url,
            Content::WifiCredential(_) => ContentKind::WifiCredential,
            Content::EmailDraft(_) => ContentKind::EmailDraft,
            Content::SmsDraft(_) => ContentKind::SmsDraft,
            Content::ContactCard(_) => ContentKind::ContactCard,
        }
    }

    /// Produce the payload string; empty means "insufficient input".
    pub fn encode(&self) -> String {
        match self {
            Content::PlainText(input) => input.encode(),
            Content::Url(input) => input.encode(),
            Content::WifiCredential(input) => input.encode(),
            Content::EmailDraft(input) => input.encode(),
            Content::SmsDraft(input) => input.encode(),
            Content::ContactCard(input) => input.encode(),
        }
    }
}

/// Encode `content` into its payload string.
pub fn encode(content: &Content) -> String {
    content.encode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_kind() {
        let contents = [
            Content::PlainText(PlainTextInput::new("hi")),
            Content::Url(UrlInput::new("example.com")),
            Content::WifiCredential(WifiCredential {
                ssid: "net".to_string(),
                ..Default::default()
            }),
            Content::EmailDraft(EmailDraft {
                to: "a@b.com".to_string(),
                ..Default::default()
            }),
            Content::SmsDraft(SmsDraft {
                number: "555".to_string(),
                ..Default::default()
            }),
            Content::ContactCard(ContactCard::default()),
        ];
        let expected_prefix = ["hi", "http://", "WIFI:", "mailto:", "smsto:", "BEGIN:VCARD"];

        for (content, prefix) in contents.iter().zip(expected_prefix) {
            assert!(encode(content).starts_with(prefix), "{}", content.kind());
        }
    }

    #[test]
    fn test_content_from_json() {
        let json = r#"{"kind":"wifi_credential","ssid":"Home Net","password":"p@ss;1","security":"WPA2"}"#;
        let content: Content = serde_json::from_str(json).unwrap();
        assert_eq!(content.kind(), ContentKind::WifiCredential);
        assert_eq!(content.encode(), "WIFI:T:WPA;S:Home%20Net;P:p%40ss%3B1;;");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ContentKind::ContactCard.to_string(), "vcard");
        assert_eq!(ContentKind::PlainText.to_string(), "text");
    }
}
