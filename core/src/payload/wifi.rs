//! Wi-Fi network configuration payload
//!
//! Emits the `WIFI:T:<sec>;S:<ssid>;P:<pass>;H:true;;` form understood by
//! the stock camera apps on Android and iOS. Fields appear in the fixed
//! order T, S, P, H.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::constants::{WIFI_NOPASS, WIFI_PREFIX};
use super::quote::quote;

/// Network authentication type
///
/// Deserializes through [`FromStr`], so JSON input gets the same lenient
/// matching as command-line input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WifiSecurity {
    Wep,
    Wpa,
    #[default]
    Wpa2,
    #[serde(rename = "nopass")]
    None,
}

impl WifiSecurity {
    /// Token written after `T:`. WPA2 shares the WPA token.
    pub fn token(self) -> &'static str {
        match self {
            WifiSecurity::Wep => "WEP",
            WifiSecurity::Wpa | WifiSecurity::Wpa2 => "WPA",
            WifiSecurity::None => WIFI_NOPASS,
        }
    }
}

impl FromStr for WifiSecurity {
    type Err = Infallible;

    /// Unrecognized names fall back to WPA.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "wep" => WifiSecurity::Wep,
            "wpa2" => WifiSecurity::Wpa2,
            "nopass" | "none" | "open" => WifiSecurity::None,
            _ => WifiSecurity::Wpa,
        })
    }
}

impl<'de> Deserialize<'de> for WifiSecurity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        match s.parse() {
            Ok(security) => Ok(security),
            Err(never) => match never {},
        }
    }
}

/// Wi-Fi credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiCredential {
    pub ssid: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub security: WifiSecurity,
    #[serde(default)]
    pub hidden: bool,
}

impl WifiCredential {
    pub fn encode(&self) -> String {
        let ssid = self.ssid.trim();
        if ssid.is_empty() {
            return String::new();
        }

        let security = self.security.token();
        let mut payload = format!("{}T:{};S:{};", WIFI_PREFIX, security, quote(ssid));
        if security != WIFI_NOPASS {
            payload.push_str(&format!("P:{};", quote(self.password.trim())));
        }
        if self.hidden {
            payload.push_str("H:true;");
        }
        payload.push(';');
        payload
    }
}
