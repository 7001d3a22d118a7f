//! Shared command-line argument groups.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use qrkit_core::{Color, ContactCard, Content, EcLevel, RenderStyle, StyleConfig, WifiCredential, WifiSecurity};

/// Symbol and drawing options
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// JSON style configuration; flags below override its fields
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Error-correction level (L, M, Q, H)
    #[arg(long = "ec", global = true)]
    pub ec_level: Option<EcLevel>,

    /// Pixels per module (5-20)
    #[arg(long, global = true)]
    pub module_size: Option<u32>,

    /// Module drawing style (see `qrkit styles`)
    #[arg(long, global = true)]
    pub style: Option<RenderStyle>,

    /// Foreground color (#RRGGBB)
    #[arg(long = "fg", global = true)]
    pub foreground: Option<Color>,

    /// Background color (#RRGGBB)
    #[arg(long = "bg", global = true)]
    pub background: Option<Color>,

    /// Quiet zone around raster output, in modules
    #[arg(long, global = true)]
    pub border: Option<u32>,

    /// Smallest QR version to start from (1-40)
    #[arg(long, global = true)]
    pub min_version: Option<i16>,
}

impl StyleArgs {
    /// Merge the config file (if any) with flag overrides.
    pub fn resolve(&self) -> anyhow::Result<StyleConfig> {
        let mut config = match &self.config {
            Some(path) => StyleConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => StyleConfig::default(),
        };

        if let Some(ec_level) = self.ec_level {
            config.ec_level = ec_level;
        }
        if let Some(module_size) = self.module_size {
            config.module_size = module_size;
        }
        if let Some(style) = self.style {
            config.style = style;
        }
        if let Some(foreground) = self.foreground {
            config.foreground = foreground;
        }
        if let Some(background) = self.background {
            config.background = background;
        }
        if let Some(border) = self.border {
            config.border = border;
        }
        if let Some(min_version) = self.min_version {
            config.min_version = min_version;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Where results go
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Write the vector rendering as SVG
    #[arg(long, global = true)]
    pub svg: Option<PathBuf>,

    /// Write a raster rendering (PNG, or by extension)
    #[arg(long, global = true)]
    pub png: Option<PathBuf>,

    /// Logo placed at the centre of the raster output
    #[arg(long, global = true, requires = "png")]
    pub logo: Option<PathBuf>,

    /// Print the vector document as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print only the payload string, without rendering
    #[arg(long, global = true)]
    pub payload_only: bool,
}

impl OutputArgs {
    pub fn writes_anything(&self) -> bool {
        self.svg.is_some() || self.png.is_some() || self.json
    }
}

#[derive(Args, Debug)]
pub struct WifiArgs {
    /// Network name
    #[arg(long)]
    pub ssid: String,

    #[arg(long, default_value = "")]
    pub password: String,

    /// WEP, WPA, WPA2 or nopass (unknown values mean WPA)
    #[arg(long, default_value = "WPA2")]
    pub security: WifiSecurity,

    /// The network does not broadcast its SSID
    #[arg(long)]
    pub hidden: bool,
}

impl WifiArgs {
    pub fn into_content(self) -> Content {
        Content::WifiCredential(WifiCredential {
            ssid: self.ssid,
            password: self.password,
            security: self.security,
            hidden: self.hidden,
        })
    }
}

#[derive(Args, Debug)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub org: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub url: String,
}

impl ContactArgs {
    pub fn into_content(self) -> Content {
        Content::ContactCard(ContactCard {
            first_name: self.first_name,
            last_name: self.last_name,
            organization: self.org,
            phone: self.phone,
            email: self.email,
            url: self.url,
        })
    }
}
