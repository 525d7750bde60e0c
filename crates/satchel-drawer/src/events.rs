//! # Event Router
//!
//! Binds delegated page events to drawer operations.
//!
//! ## Delegation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Event Routing                                       │
//! │                                                                         │
//! │  Click anywhere ──► bubble path (target first) ──► first match wins:   │
//! │                                                                         │
//! │    .add-to-cart [data-variant-id]  ──► drawer.add(variant, qty)        │
//! │    .remove-item [data-variant-id]  ──► drawer.remove(variant)          │
//! │    #cartButton                     ──► drawer.toggle()                 │
//! │    #cartCloseBtn / #cartBackdrop   ──► drawer.close()                  │
//! │    #checkoutBtn / #viewCartBtn     ──► opaque navigation               │
//! │                                                                         │
//! │  Input on .qty-input ──► sanitize ──► drawer.update(variant, qty)      │
//! │  KeyDown             ──► drawer.handle_key (Escape, trap Tabs)         │
//! │                                                                         │
//! │  Matching walks ancestors, so add-to-cart triggers inserted into the   │
//! │  page after mount work without any re-binding.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Selectors are data, not code: a storefront with different ids passes its
//! own [`Selectors`].

use std::collections::HashMap;

use satchel_core::validation::{sanitize_add_quantity, sanitize_quantity};
use satchel_core::VariantId;
use tracing::{debug, trace};

use crate::api::CartDrawer;

// =============================================================================
// Event Model
// =============================================================================

/// Keyboard keys the drawer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Tab or Shift+Tab (the focus trap's concern).
    Tab { shift: bool },
    /// Escape closes the drawer.
    Escape,
}

/// One element on an event's bubble path.
#[derive(Debug, Clone, Default)]
pub struct EventNode {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
}

impl EventNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// A page event, carrying its bubble path target-first.
#[derive(Debug, Clone)]
pub enum PageEvent {
    Click { path: Vec<EventNode> },
    Input { path: Vec<EventNode>, value: String },
    KeyDown(Key),
}

// =============================================================================
// Selectors
// =============================================================================

/// The ids, classes, and data attributes the router matches against.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub open_trigger_id: String,
    pub close_trigger_id: String,
    pub backdrop_id: String,
    pub checkout_id: String,
    pub view_cart_id: String,

    pub add_to_cart_class: String,
    pub remove_class: String,
    pub qty_input_class: String,
    pub item_class: String,

    pub variant_attr: String,
    /// Legacy spelling some product templates still carry.
    pub variant_attr_alt: String,
    pub quantity_attr: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            open_trigger_id: "cartButton".to_string(),
            close_trigger_id: "cartCloseBtn".to_string(),
            backdrop_id: "cartBackdrop".to_string(),
            checkout_id: "checkoutBtn".to_string(),
            view_cart_id: "viewCartBtn".to_string(),
            add_to_cart_class: "add-to-cart".to_string(),
            remove_class: "remove-item".to_string(),
            qty_input_class: "qty-input".to_string(),
            item_class: "cart-item".to_string(),
            variant_attr: "data-variant-id".to_string(),
            variant_attr_alt: "data-variant".to_string(),
            quantity_attr: "data-quantity".to_string(),
        }
    }
}

// =============================================================================
// Event Router
// =============================================================================

/// Routes page events to a mounted drawer.
pub struct EventRouter {
    selectors: Selectors,
    drawer: CartDrawer,
}

impl EventRouter {
    pub fn new(drawer: CartDrawer) -> Self {
        Self::with_selectors(drawer, Selectors::default())
    }

    pub fn with_selectors(drawer: CartDrawer, selectors: Selectors) -> Self {
        EventRouter { selectors, drawer }
    }

    /// Dispatches one page event. Unmatched events are ignored.
    pub async fn dispatch(&self, event: PageEvent) {
        match event {
            PageEvent::Click { path } => self.dispatch_click(&path).await,
            PageEvent::Input { path, value } => self.dispatch_input(&path, &value),
            PageEvent::KeyDown(key) => {
                self.drawer.handle_key(&key);
            }
        }
    }

    async fn dispatch_click(&self, path: &[EventNode]) {
        let s = &self.selectors;
        for node in path {
            if node.has_class(&s.add_to_cart_class) {
                match self.variant_of(node) {
                    Some(variant) => {
                        let quantity = sanitize_add_quantity(node.attr(&s.quantity_attr));
                        self.drawer.add(variant, quantity).await;
                    }
                    None => debug!("add-to-cart trigger without a variant id"),
                }
                return;
            }
            if node.has_class(&s.remove_class) {
                if let Some(variant) = self.variant_of(node) {
                    self.drawer.remove(variant).await;
                }
                return;
            }
            if node.has_id(&s.open_trigger_id) {
                self.drawer.toggle().await;
                return;
            }
            if node.has_id(&s.close_trigger_id) || node.has_id(&s.backdrop_id) {
                self.drawer.close();
                return;
            }
            if node.has_id(&s.checkout_id) {
                self.drawer.checkout();
                return;
            }
            if node.has_id(&s.view_cart_id) {
                self.drawer.view_cart();
                return;
            }
        }
        trace!("click matched no drawer selector");
    }

    fn dispatch_input(&self, path: &[EventNode], value: &str) {
        let s = &self.selectors;
        let Some(target) = path.first() else {
            return;
        };
        if !target.has_class(&s.qty_input_class) {
            return;
        }

        // The input itself carries no variant; its enclosing row does
        let variant = path
            .iter()
            .find(|node| node.has_class(&s.item_class))
            .and_then(|row| self.variant_of(row));

        match variant {
            Some(variant) => {
                let quantity = sanitize_quantity(value);
                self.drawer.update(variant, quantity);
            }
            None => debug!("quantity input outside a cart item row"),
        }
    }

    fn variant_of(&self, node: &EventNode) -> Option<VariantId> {
        node.attr(&self.selectors.variant_attr)
            .or_else(|| node.attr(&self.selectors.variant_attr_alt))
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(VariantId)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrawerConfig;
    use crate::memory::MemoryPage;
    use crate::testutil::MockTransport;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::sleep;

    fn router(mock: Arc<MockTransport>) -> (MemoryPage, EventRouter) {
        let page = MemoryPage::new();
        let drawer = CartDrawer::mount(page.clone(), mock, DrawerConfig::default())
            .expect("complete page mounts");
        (page, EventRouter::new(drawer))
    }

    fn click(path: Vec<EventNode>) -> PageEvent {
        PageEvent::Click { path }
    }

    #[tokio::test]
    async fn add_trigger_resolves_through_ancestors() {
        let mock = MockTransport::new();
        let (_page, router) = router(Arc::clone(&mock));

        // Click landed on a <span> inside the button: the trigger is an ancestor
        let path = vec![
            EventNode::new().with_class("btn-label"),
            EventNode::new()
                .with_class("add-to-cart")
                .with_attr("data-variant-id", "42")
                .with_attr("data-quantity", "3"),
        ];
        router.dispatch(click(path)).await;

        assert_eq!(mock.add_calls(), vec![(VariantId(42), 3)]);
    }

    #[tokio::test]
    async fn add_trigger_defaults_to_one_unit() {
        let mock = MockTransport::new();
        let (_page, router) = router(Arc::clone(&mock));

        let path = vec![EventNode::new()
            .with_class("add-to-cart")
            .with_attr("data-variant", "7")]; // alternate attribute spelling
        router.dispatch(click(path)).await;

        assert_eq!(mock.add_calls(), vec![(VariantId(7), 1)]);
    }

    #[tokio::test]
    async fn add_trigger_without_variant_is_ignored() {
        let mock = MockTransport::new();
        let (_page, router) = router(Arc::clone(&mock));

        let path = vec![EventNode::new().with_class("add-to-cart")];
        router.dispatch(click(path)).await;

        assert!(mock.add_calls().is_empty());
    }

    #[tokio::test]
    async fn remove_click_routes_to_removal() {
        let mock = MockTransport::new();
        let (_page, router) = router(Arc::clone(&mock));

        let path = vec![EventNode::new()
            .with_class("remove-item")
            .with_attr("data-variant-id", "9")];
        router.dispatch(click(path)).await;

        assert_eq!(mock.set_calls(), vec![(VariantId(9), 0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn quantity_input_is_sanitized_and_debounced() {
        let mock = MockTransport::new();
        let (_page, router) = router(Arc::clone(&mock));

        let path = vec![
            EventNode::new().with_class("qty-input"),
            EventNode::new()
                .with_class("cart-item")
                .with_attr("data-variant-id", "5"),
        ];
        router
            .dispatch(PageEvent::Input {
                path: path.clone(),
                value: "junk".to_string(), // mid-edit garbage → 0
            })
            .await;
        router
            .dispatch(PageEvent::Input {
                path,
                value: "4".to_string(),
            })
            .await;

        assert!(mock.set_calls().is_empty(), "commits only after quiescence");
        sleep(Duration::from_millis(400)).await;
        assert_eq!(mock.set_calls(), vec![(VariantId(5), 4)]);
    }

    #[tokio::test]
    async fn input_outside_cart_items_is_ignored() {
        let mock = MockTransport::new();
        let (_page, router) = router(Arc::clone(&mock));

        router
            .dispatch(PageEvent::Input {
                path: vec![EventNode::new().with_class("qty-input")],
                value: "3".to_string(),
            })
            .await;

        assert!(mock.set_calls().is_empty());
    }

    #[tokio::test]
    async fn open_close_and_backdrop_clicks() {
        let mock = MockTransport::new();
        let (page, router) = router(mock);

        router
            .dispatch(click(vec![EventNode::new().with_id("cartButton")]))
            .await;
        assert!(page.is_open());

        router
            .dispatch(click(vec![EventNode::new().with_id("cartBackdrop")]))
            .await;
        assert!(!page.is_open());
    }

    #[tokio::test]
    async fn checkout_and_view_cart_navigate() {
        let mock = MockTransport::new();
        let (page, router) = router(mock);

        router
            .dispatch(click(vec![EventNode::new().with_id("checkoutBtn")]))
            .await;
        router
            .dispatch(click(vec![EventNode::new().with_id("viewCartBtn")]))
            .await;

        assert_eq!(page.navigations(), vec!["/checkout", "/cart"]);
    }

    #[tokio::test]
    async fn escape_key_closes_through_the_router() {
        let mock = MockTransport::new();
        let (page, router) = router(mock);

        router
            .dispatch(click(vec![EventNode::new().with_id("cartButton")]))
            .await;
        assert!(page.is_open());

        router.dispatch(PageEvent::KeyDown(Key::Escape)).await;
        assert!(!page.is_open());
    }

    #[tokio::test]
    async fn unmatched_clicks_do_nothing() {
        let mock = MockTransport::new();
        let (page, router) = router(Arc::clone(&mock));

        let before = page.mutations();
        router
            .dispatch(click(vec![EventNode::new().with_class("hero-banner")]))
            .await;

        assert_eq!(page.mutations(), before);
        assert!(mock.add_calls().is_empty());
    }
}
