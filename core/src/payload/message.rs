//! Email and SMS draft payloads

use serde::{Deserialize, Serialize};

use super::constants::{MAILTO_SCHEME, SMSTO_SCHEME};
use super::quote::quote;

/// Email draft (`mailto:` URI)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub to: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

impl EmailDraft {
    pub fn encode(&self) -> String {
        let to = self.to.trim();
        if to.is_empty() {
            return String::new();
        }

        let mut params = Vec::with_capacity(2);
        let subject = self.subject.trim();
        if !subject.is_empty() {
            params.push(format!("subject={}", quote(subject)));
        }
        let body = self.body.trim();
        if !body.is_empty() {
            params.push(format!("body={}", quote(body)));
        }

        if params.is_empty() {
            format!("{}{}", MAILTO_SCHEME, to)
        } else {
            format!("{}{}?{}", MAILTO_SCHEME, to, params.join("&"))
        }
    }
}

/// SMS draft (`smsto:` URI)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsDraft {
    pub number: String,
    #[serde(default)]
    pub message: String,
}

impl SmsDraft {
    pub fn encode(&self) -> String {
        let number = self.number.trim();
        if number.is_empty() {
            return String::new();
        }

        let message = self.message.trim();
        if message.is_empty() {
            format!("{}{}", SMSTO_SCHEME, number)
        } else {
            format!("{}{}:{}", SMSTO_SCHEME, number, quote(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str, subject: &str, body: &str) -> EmailDraft {
        EmailDraft {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    fn sms(number: &str, message: &str) -> SmsDraft {
        SmsDraft {
            number: number.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_email_subject_only() {
        assert_eq!(email("a@b.com", "Hi", "").encode(), "mailto:a@b.com?subject=Hi");
    }

    #[test]
    fn test_email_body_only() {
        assert_eq!(email("a@b.com", "", "See you").encode(), "mailto:a@b.com?body=See%20you");
    }

    #[test]
    fn test_email_subject_and_body() {
        assert_eq!(
            email(" a@b.com ", "Re: lunch?", "12:30 & ok").encode(),
            "mailto:a@b.com?subject=Re%3A%20lunch%3F&body=12%3A30%20%26%20ok"
        );
    }

    #[test]
    fn test_email_without_params() {
        let payload = email("a@b.com", "  ", "\n").encode();
        assert_eq!(payload, "mailto:a@b.com");
        assert!(!payload.contains('?'));
        assert!(!payload.contains('&'));
    }

    #[test]
    fn test_email_blank_recipient_is_empty() {
        assert_eq!(email("  ", "subject", "body").encode(), "");
    }

    #[test]
    fn test_sms_without_message() {
        assert_eq!(sms("555", "").encode(), "smsto:555");
    }

    #[test]
    fn test_sms_with_message() {
        assert_eq!(sms("+48 555", "call me: now").encode(), "smsto:+48 555:call%20me%3A%20now");
    }

    #[test]
    fn test_sms_blank_number_is_empty() {
        assert_eq!(sms(" ", "hello").encode(), "");
    }
}
