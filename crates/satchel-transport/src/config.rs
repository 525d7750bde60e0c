//! # Transport Configuration
//!
//! Configuration for the remote cart client.
//!
//! ## Configuration File Format
//! ```toml
//! # satchel.toml
//! [transport]
//! base_url = "https://shop.example"
//! cart_path = "/cart.js"
//! add_path = "/cart/add.js"
//! update_path = "/cart/update.js"
//! timeout_ms = 10000
//! ```
//!
//! The paths default to the remote cart resource's conventional endpoints;
//! most deployments only set `base_url`.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::{TransportError, TransportResult};

// =============================================================================
// Transport Configuration
// =============================================================================

/// Configuration for [`HttpCartTransport`](crate::HttpCartTransport).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Origin of the storefront. All cart endpoints are joined onto this,
    /// and the cookie jar is scoped to it — the same-origin-credentials
    /// rule of the page world, carried over.
    pub base_url: Url,

    /// Path of the cart snapshot endpoint (GET).
    pub cart_path: String,

    /// Path of the add-line endpoint (POST, form-encoded).
    pub add_path: String,

    /// Path of the update-lines endpoint (POST, form-encoded).
    pub update_path: String,

    /// Per-request timeout in milliseconds.
    ///
    /// A hung request resolves to a network error when this elapses, which
    /// also releases the drawer's in-flight guard.
    pub timeout_ms: u64,
}

impl TransportConfig {
    /// Creates a config for a storefront origin with default endpoint paths.
    pub fn new(base_url: &str) -> TransportResult<Self> {
        Ok(TransportConfig {
            base_url: Url::parse(base_url)?,
            ..TransportConfig::default()
        })
    }

    /// Returns the per-request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> TransportResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::InvalidUrl(format!("{path}: {e}")))
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            // Placeholder origin; deployments override via new() or TOML
            base_url: Url::parse("http://localhost").expect("static URL parses"),
            cart_path: "/cart.js".to_string(),
            add_path: "/cart/add.js".to_string(),
            update_path: "/cart/update.js".to_string(),
            timeout_ms: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = TransportConfig::default();
        assert_eq!(config.cart_path, "/cart.js");
        assert_eq!(config.add_path, "/cart/add.js");
        assert_eq!(config.update_path, "/cart/update.js");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_new_keeps_default_paths() {
        let config = TransportConfig::new("https://shop.example").unwrap();
        assert_eq!(config.base_url.as_str(), "https://shop.example/");
        assert_eq!(config.update_path, "/cart/update.js");
    }

    #[test]
    fn test_endpoint_joins_onto_base() {
        let config = TransportConfig::new("https://shop.example").unwrap();
        let url = config.endpoint(&config.add_path).unwrap();
        assert_eq!(url.as_str(), "https://shop.example/cart/add.js");
    }

    #[test]
    fn test_invalid_base_url_is_typed() {
        let err = TransportConfig::new("not a url").unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }

    #[test]
    fn test_toml_section_parses() {
        let config: TransportConfig = toml::from_str(
            r#"
            base_url = "https://shop.example"
            timeout_ms = 2500
            "#,
        )
        .expect("toml parses");
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.cart_path, "/cart.js"); // defaulted
    }
}
