//! # Drawer Configuration
//!
//! Configuration for the drawer engine.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Explicit struct passed to CartDrawer::mount (highest)              │
//! │                                                                         │
//! │  2. TOML Config File ([drawer] section)                                │
//! │     ~/.config/satchel/satchel.toml (Linux)                             │
//! │     ~/Library/Application Support/com.satchel.satchel/... (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest)                                            │
//! │     350ms debounce, EUR fallback currency, /checkout and /cart URLs    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # satchel.toml
//! [drawer]
//! debounce_delay_ms = 350
//! default_currency = "EUR"
//! checkout_url = "/checkout"
//! cart_url = "/cart"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::DrawerResult;

// =============================================================================
// Drawer Configuration
// =============================================================================

/// Tunables for a mounted drawer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    /// How long a quantity-input burst must quiesce before the coalesced
    /// update is sent.
    pub debounce_delay_ms: u64,

    /// Currency used to format the zero subtotal before the first snapshot
    /// arrives. Once a cart has been fetched, its own currency always wins.
    pub default_currency: String,

    /// Navigation target of the checkout trigger (opaque to the drawer).
    pub checkout_url: String,

    /// Navigation target of the view-cart trigger.
    pub cart_url: String,
}

impl DrawerConfig {
    /// Returns the debounce delay as a [`Duration`].
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    /// Loads the `[drawer]` section of a TOML config file.
    pub fn load(path: &Path) -> DrawerResult<Self> {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct ConfigFile {
            drawer: DrawerConfig,
        }

        let raw = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&raw)?;
        debug!(path = %path.display(), "drawer config loaded");
        Ok(file.drawer)
    }

    /// Returns the platform config file path, when one can be determined.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "satchel", "satchel")
            .map(|dirs| dirs.config_dir().join("satchel.toml"))
    }
}

impl Default for DrawerConfig {
    fn default() -> Self {
        DrawerConfig {
            debounce_delay_ms: 350,
            default_currency: satchel_core::DEFAULT_CURRENCY.to_string(),
            checkout_url: "/checkout".to_string(),
            cart_url: "/cart".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DrawerConfig::default();
        assert_eq!(config.debounce_delay(), Duration::from_millis(350));
        assert_eq!(config.default_currency, "EUR");
        assert_eq!(config.checkout_url, "/checkout");
        assert_eq!(config.cart_url, "/cart");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct ConfigFile {
            drawer: DrawerConfig,
        }

        let file: ConfigFile = toml::from_str(
            r#"
            [drawer]
            debounce_delay_ms = 500
            "#,
        )
        .expect("toml parses");
        assert_eq!(file.drawer.debounce_delay_ms, 500);
        assert_eq!(file.drawer.default_currency, "EUR"); // defaulted
    }
}
