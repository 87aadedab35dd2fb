//! Overlay configuration.
//!
//! The original resource got its name from the host environment at runtime;
//! here the resource name, default theme color, and cooldown window come
//! from a TOML config file managed by confy. Anything unreadable falls back
//! to defaults.

use serde::{Deserialize, Serialize};

use crate::state::DEFAULT_COLOR;

/// Cooldown window applied to card activation, in milliseconds.
const DEFAULT_COOLDOWN_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Host resource name; callbacks go to `https://<resource>/<event>`.
    pub resource: String,
    /// Theme color used until the host answers the startup fetch.
    pub default_color: String,
    pub cooldown_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            resource: "ocular".to_string(),
            default_color: DEFAULT_COLOR.to_string(),
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

/// Load the config, falling back to defaults on any failure.
pub fn load() -> OverlayConfig {
    confy::load("ocular", None).unwrap_or_default()
}
