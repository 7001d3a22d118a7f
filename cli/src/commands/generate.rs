//! Generate command implementation.

use anyhow::Context;
use qrkit_core::{export, Content, Error, Generator};

use crate::args::{OutputArgs, StyleArgs};
use crate::ui::{print_qr_code, print_summary};

/// Encode `content`, render it and deliver the requested outputs.
///
/// With no output flags the symbol is previewed in the terminal.
pub fn generate(content: &Content, style: &StyleArgs, output: &OutputArgs) -> anyhow::Result<()> {
    if output.payload_only {
        let payload = content.encode();
        if payload.is_empty() {
            return Err(Error::EmptyInput.into());
        }
        println!("{}", payload);
        return Ok(());
    }

    let config = style.resolve()?;
    tracing::debug!("style config: {:?}", config);
    let generator = Generator::new(config)?;
    let generation = generator.generate(content)?;

    if let Some(path) = &output.svg {
        export::save_svg(&generation.vector, path)?;
    }

    if let Some(path) = &output.png {
        let raster = generator.rasterize(&generation, output.logo.as_deref())?;
        if let Some(e) = &raster.logo_error {
            eprintln!("\x1b[1;33m!\x1b[0m {}; saved without logo", e);
        }
        export::save_raster(&raster.image, path)?;
    }

    if output.json {
        let json = serde_json::to_string_pretty(&generation.vector)
            .context("serializing vector document")?;
        println!("{}", json);
    }

    if !output.writes_anything() {
        print_qr_code(&generation.matrix);
        print_summary(content.kind(), &generation, generator.config());
    }

    Ok(())
}
