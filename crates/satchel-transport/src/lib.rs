//! # satchel-transport: Remote Cart Client
//!
//! A thin async wrapper around the three remote cart operations the drawer
//! needs: fetch the current cart, add a line, set a line's quantity.
//!
//! ## Contract
//!
//! None of these operations mutate any client-held [`Cart`] object; callers
//! must re-fetch to observe effects. This is a deliberate simplification
//! that trades an extra request for eliminating local/remote divergence
//! bugs.
//!
//! ## Usage
//! ```rust,no_run
//! use satchel_transport::{CartTransport, HttpCartTransport, TransportConfig};
//! use satchel_core::VariantId;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TransportConfig::new("https://shop.example")?;
//! let transport = HttpCartTransport::new(config)?;
//!
//! transport.add_line(VariantId(42), 1).await?;
//! let cart = transport.fetch_cart().await?; // observe the effect
//! # Ok(())
//! # }
//! ```
//!
//! [`Cart`]: satchel_core::Cart

pub mod client;
pub mod config;
pub mod error;

pub use client::{CartTransport, HttpCartTransport};
pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
