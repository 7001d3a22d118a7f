//! vCard 3.0 contact payload
//!
//! A field line is dropped when the substituted line ends in a bare `:`.
//! The test is on the rendered line, not on the field value, so `FN` with
//! both names blank (`"FN: "`) survives while e.g. an `ORG` value that
//! itself ends in `:` is dropped.

use serde::{Deserialize, Serialize};

use super::constants::{VCARD_BEGIN, VCARD_END, VCARD_VERSION};

/// Contact card fields, all optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactCard {
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
    pub phone: String,
    pub email: String,
    pub url: String,
}

impl ContactCard {
    /// Always produces a card; lines are joined with `\n`.
    pub fn encode(&self) -> String {
        let lines = [
            VCARD_BEGIN.to_string(),
            VCARD_VERSION.to_string(),
            format!("FN:{} {}", self.first_name.trim(), self.last_name.trim()),
            format!("ORG:{}", self.organization.trim()),
            format!("TEL:{}", self.phone.trim()),
            format!("EMAIL:{}", self.email.trim()),
            format!("URL:{}", self.url.trim()),
            VCARD_END.to_string(),
        ];

        lines
            .into_iter()
            .filter(|line| !line.ends_with(':'))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
