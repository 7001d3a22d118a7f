//! Payload format constants
//!
//! Prefixes and tokens defined by the scanner-side conventions each payload
//! kind follows (ZXing Wi-Fi format, RFC 6068 mailto, smsto, vCard 3.0).

/// Maximum number of characters kept from plain text input
pub const MAX_TEXT_CHARS: usize = 500;

/// Scheme prepended to URLs that carry none
pub const DEFAULT_URL_SCHEME: &str = "http://";

/// Schemes accepted as already present on a URL
pub const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Wi-Fi network configuration prefix
pub const WIFI_PREFIX: &str = "WIFI:";

/// Security token emitted for open networks
pub const WIFI_NOPASS: &str = "nopass";

/// Email draft scheme
pub const MAILTO_SCHEME: &str = "mailto:";

/// SMS draft scheme
pub const SMSTO_SCHEME: &str = "smsto:";

/// vCard envelope
pub const VCARD_BEGIN: &str = "BEGIN:VCARD";
pub const VCARD_VERSION: &str = "VERSION:3.0";
pub const VCARD_END: &str = "END:VCARD";
