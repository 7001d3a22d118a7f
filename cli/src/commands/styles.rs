//! Styles command implementation.

use qrkit_core::RenderStyle;

/// List the module drawing styles.
pub fn list_styles() {
    println!("\n\x1b[1mModule styles\x1b[0m");
    println!("═══════════════════════════════════════");
    for style in RenderStyle::ALL {
        println!("  \x1b[1m{:<16}\x1b[0m {}", style.name(), style.description());
    }
    println!();
}
