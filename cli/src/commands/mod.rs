//! CLI command implementations.

mod content;
mod generate;
mod styles;

use std::process::ExitCode;

pub use content::{email_content, sms_content, text_content, url_content};
pub use generate::generate;
pub use styles::list_styles;

/// Exit status for a failed run: 2 when there was nothing to encode.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<qrkit_core::Error>() {
        Some(qrkit_core::Error::EmptyInput) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
