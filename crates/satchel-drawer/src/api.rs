//! # Public Drawer API
//!
//! [`CartDrawer`]: the surface other page scripts integrate against.
//!
//! ## Usage
//! ```rust,no_run
//! use std::sync::Arc;
//! use satchel_core::VariantId;
//! use satchel_drawer::{CartDrawer, DrawerConfig, MemoryPage};
//! use satchel_transport::{HttpCartTransport, TransportConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(HttpCartTransport::new(TransportConfig::new(
//!     "https://shop.example",
//! )?)?);
//! let drawer = CartDrawer::mount(MemoryPage::new(), transport, DrawerConfig::default())?;
//!
//! drawer.fetch().await?;              // initial badge/subtotal
//! drawer.add(VariantId(42), 1).await; // add and open
//! drawer.update(VariantId(42), 3);    // debounced quantity edit
//! drawer.close();
//! # Ok(())
//! # }
//! ```
//!
//! Handles are cheap clones of one mounted drawer, so the event router and
//! any number of page scripts can share it.

use std::sync::Arc;

use satchel_core::{Cart, VariantId};
use satchel_transport::CartTransport;
use tracing::info;

use crate::config::DrawerConfig;
use crate::controller::DrawerController;
use crate::error::{DrawerError, DrawerResult};
use crate::events::Key;
use crate::page::{DrawerPage, Hook};

// =============================================================================
// Cart Drawer Facade
// =============================================================================

/// A mounted cart drawer.
#[derive(Clone)]
pub struct CartDrawer {
    controller: Arc<DrawerController>,
}

impl std::fmt::Debug for CartDrawer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartDrawer").finish_non_exhaustive()
    }
}

impl CartDrawer {
    /// Mounts the drawer onto a page.
    ///
    /// Fails with [`DrawerError::PageIncomplete`] when a required hook is
    /// missing; callers typically treat that as "this page has no cart
    /// markup" and disable the feature quietly. Optional hooks may be
    /// absent — those features are simply inert.
    pub fn mount(
        page: impl DrawerPage + 'static,
        transport: Arc<dyn CartTransport>,
        config: DrawerConfig,
    ) -> DrawerResult<Self> {
        let missing: Vec<&'static str> = Hook::REQUIRED
            .iter()
            .filter(|hook| !page.hook_present(**hook))
            .map(Hook::name)
            .collect();
        if !missing.is_empty() {
            return Err(DrawerError::PageIncomplete { missing });
        }

        info!("cart drawer mounted");
        Ok(CartDrawer {
            controller: Arc::new(DrawerController::new(Box::new(page), transport, config)),
        })
    }

    /// Adds `quantity` units of `variant`, then re-fetches, renders, and
    /// opens. Errors are logged, never surfaced.
    pub async fn add(&self, variant: VariantId, quantity: i64) {
        self.controller.add_item(variant, quantity).await;
    }

    /// Schedules a debounced quantity update (0 = remove once committed).
    pub fn update(&self, variant: VariantId, quantity: i64) {
        self.controller.change_quantity(variant, quantity);
    }

    /// Removes the line for `variant` immediately, bypassing the debounce.
    pub async fn remove(&self, variant: VariantId) {
        self.controller.remove_item(variant).await;
    }

    /// Fetches the current server cart and renders it.
    pub async fn fetch(&self) -> DrawerResult<Cart> {
        self.controller.refresh().await
    }

    /// Fetches then opens; opens anyway when the fetch fails.
    pub async fn open(&self) {
        self.controller.fetch_then_open().await;
    }

    /// Closes the drawer. No-op while closed.
    pub fn close(&self) {
        self.controller.close();
    }

    /// Closes if open, else fetch-then-open.
    pub async fn toggle(&self) {
        self.controller.toggle().await;
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// Feeds a key event to the focus trap / Escape handling. Returns true
    /// when consumed.
    pub fn handle_key(&self, key: &Key) -> bool {
        self.controller.handle_key(key)
    }

    /// Checkout trigger: opaque navigation.
    pub fn checkout(&self) {
        self.controller.checkout();
    }

    /// View-cart trigger: opaque navigation.
    pub fn view_cart(&self) {
        self.controller.view_cart();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryPage;
    use crate::testutil::MockTransport;

    #[tokio::test]
    async fn mount_requires_the_core_hooks() {
        let page = MemoryPage::new().without_hook(Hook::Panel);
        let err = CartDrawer::mount(page, MockTransport::new(), DrawerConfig::default())
            .expect_err("panel is required");

        match err {
            DrawerError::PageIncomplete { missing } => assert_eq!(missing, vec!["panel"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn mount_tolerates_missing_optional_hooks() {
        let page = MemoryPage::new()
            .without_hook(Hook::Badge)
            .without_hook(Hook::Subtotal)
            .without_hook(Hook::EmptyState);
        let drawer = CartDrawer::mount(page.clone(), MockTransport::new(), DrawerConfig::default())
            .expect("optional hooks may be absent");

        // Rendering still works; the absent features are inert
        drawer.fetch().await.expect("fetch renders");
        assert_eq!(page.badge(), (String::new(), false));
        assert_eq!(page.subtotal(), "");
    }

    #[tokio::test]
    async fn open_opens_even_without_a_server() {
        let mock = MockTransport::new();
        mock.fail_fetch(true);
        let page = MemoryPage::new();
        let drawer = CartDrawer::mount(page.clone(), mock.clone(), DrawerConfig::default())
            .expect("mounts");

        drawer.open().await;
        assert!(drawer.is_open());
        assert!(page.is_open());
    }

    #[tokio::test]
    async fn handles_are_clones_of_one_drawer() {
        let page = MemoryPage::new();
        let drawer = CartDrawer::mount(page, MockTransport::new(), DrawerConfig::default())
            .expect("mounts");

        let clone = drawer.clone();
        clone.open().await;
        assert!(drawer.is_open());
    }
}
