//! # Drawer Error Types
//!
//! Error types for the drawer engine.
//!
//! ## Propagation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in the Drawer                            │
//! │                                                                         │
//! │  Transport failure ──► DrawerError::Transport ──► controller boundary  │
//! │                                                        │                │
//! │                                      logged (tracing), │ swallowed      │
//! │                                      never shown as UI ▼                │
//! │                                   drawer simply fails to update/open    │
//! │                                                                         │
//! │  Missing required hooks ──► PageIncomplete at mount ──► caller treats  │
//! │                             the component as disabled                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use satchel_transport::TransportError;

/// Result type alias for drawer operations.
pub type DrawerResult<T> = Result<T, DrawerError>;

/// Drawer engine error type.
#[derive(Debug, Error)]
pub enum DrawerError {
    /// A remote cart operation failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The page is missing hooks the drawer cannot work without.
    ///
    /// Not raised for optional hooks (badge, subtotal, empty indicator...),
    /// whose absence just leaves that feature inert.
    #[error("Page is missing required drawer hooks: {missing:?}")]
    PageIncomplete { missing: Vec<&'static str> },

    /// A drawer config file could not be read or parsed.
    #[error("Failed to load drawer config: {0}")]
    ConfigLoad(String),
}

impl From<std::io::Error> for DrawerError {
    fn from(err: std::io::Error) -> Self {
        DrawerError::ConfigLoad(err.to_string())
    }
}

impl From<toml::de::Error> for DrawerError {
    fn from(err: toml::de::Error) -> Self {
        DrawerError::ConfigLoad(err.to_string())
    }
}
