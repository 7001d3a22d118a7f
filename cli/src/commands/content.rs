//! Building content records from command arguments.

use std::io::Read;

use anyhow::Context;
use qrkit_core::{Content, EmailDraft, PlainTextInput, SmsDraft, UrlInput};

/// Text content; `-` reads standard input.
pub fn text_content(text: &str) -> anyhow::Result<Content> {
    let text = if text == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading text from stdin")?;
        buf
    } else {
        text.to_string()
    };
    Ok(Content::PlainText(PlainTextInput::new(text)))
}

pub fn url_content(url: String) -> Content {
    Content::Url(UrlInput::new(url))
}

pub fn email_content(to: String, subject: String, body: String) -> Content {
    Content::EmailDraft(EmailDraft { to, subject, body })
}

pub fn sms_content(number: String, message: String) -> Content {
    Content::SmsDraft(SmsDraft { number, message })
}
