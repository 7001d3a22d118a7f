//! Generation summary printing.

use qrkit_core::{ContentKind, Generation, StyleConfig};

/// Preview length for long payloads, in characters
const MAX_PREVIEW_LEN: usize = 50;

/// Print what was generated.
pub fn print_summary(kind: ContentKind, generation: &Generation, config: &StyleConfig) {
    println!("\x1b[1mKind:\x1b[0m    {}", kind);
    println!("\x1b[1mPayload:\x1b[0m {}", format_preview(&generation.payload));
    println!(
        "\x1b[1mSymbol:\x1b[0m  {0}x{0} modules, level {1}, {2} style",
        generation.matrix.side(),
        config.ec_level,
        config.style
    );
}

/// Single-line preview of a payload.
fn format_preview(payload: &str) -> String {
    let flat = payload.replace('\n', "⏎");
    if flat.chars().count() > MAX_PREVIEW_LEN {
        let head: String = flat.chars().take(MAX_PREVIEW_LEN).collect();
        format!("{}...", head)
    } else {
        flat
    }
}
