//! # In-Memory Page
//!
//! [`MemoryPage`]: the crate's headless [`DrawerPage`] implementation, used
//! by the demo app and by unit tests. Handle-style: clones share one
//! underlying page, so a test can keep a clone and inspect what the engine
//! did to it.
//!
//! The panel focus order is `close trigger → rendered rows → checkout →
//! view-cart`, matching the markup order of a typical drawer. Every visual
//! mutation bumps a counter so idempotency is observable.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::page::{DrawerPage, FocusTarget, Hook, ItemNode};

// =============================================================================
// Element Model
// =============================================================================

/// Standard element ids mirroring the hook contract.
pub mod ids {
    pub const OPEN_TRIGGER: &str = "cartButton";
    pub const CLOSE_TRIGGER: &str = "cartCloseBtn";
    pub const CHECKOUT: &str = "checkoutBtn";
    pub const VIEW_CART: &str = "viewCartBtn";
}

#[derive(Debug)]
struct PageInner {
    hooks: Vec<Hook>,

    // Visual state
    panel_open: bool,
    aria_expanded: bool,
    subtotal: String,
    badge_text: String,
    badge_visible: bool,
    empty_visible: bool,
    items: Vec<ItemNode>,

    // Focus model: panel order is head + row controls + tail
    panel_head: Vec<String>,
    row_focusables: Vec<String>,
    panel_tail: Vec<String>,
    // All elements on the page, by id, with their focusability
    elements: HashMap<String, bool>,
    focused: Option<String>,

    navigations: Vec<String>,
    mutations: u64,
}

impl PageInner {
    fn touch(&mut self) {
        self.mutations += 1;
    }
}

// =============================================================================
// Memory Page
// =============================================================================

/// Headless page with every hook present and the standard trigger elements.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    inner: Arc<Mutex<PageInner>>,
}

impl MemoryPage {
    /// A complete page: all hooks, open/close/checkout/view-cart elements.
    pub fn new() -> Self {
        let hooks = vec![
            Hook::OpenTrigger,
            Hook::Badge,
            Hook::Backdrop,
            Hook::Panel,
            Hook::CloseTrigger,
            Hook::ItemsContainer,
            Hook::Subtotal,
            Hook::Checkout,
            Hook::ViewCart,
            Hook::EmptyState,
        ];
        Self::with_hooks(hooks)
    }

    /// A page with only the given hooks; elements for absent hooks are not
    /// created either.
    pub fn with_hooks(hooks: Vec<Hook>) -> Self {
        let mut elements = HashMap::new();
        let mut panel_head = Vec::new();
        let mut panel_tail = Vec::new();

        if hooks.contains(&Hook::OpenTrigger) {
            elements.insert(ids::OPEN_TRIGGER.to_string(), true);
        }
        if hooks.contains(&Hook::CloseTrigger) {
            elements.insert(ids::CLOSE_TRIGGER.to_string(), true);
            panel_head.push(ids::CLOSE_TRIGGER.to_string());
        }
        if hooks.contains(&Hook::Checkout) {
            elements.insert(ids::CHECKOUT.to_string(), true);
            panel_tail.push(ids::CHECKOUT.to_string());
        }
        if hooks.contains(&Hook::ViewCart) {
            elements.insert(ids::VIEW_CART.to_string(), true);
            panel_tail.push(ids::VIEW_CART.to_string());
        }

        MemoryPage {
            inner: Arc::new(Mutex::new(PageInner {
                hooks,
                panel_open: false,
                aria_expanded: false,
                subtotal: String::new(),
                badge_text: String::new(),
                badge_visible: false,
                empty_visible: false,
                items: Vec::new(),
                panel_head,
                row_focusables: Vec::new(),
                panel_tail,
                elements,
                focused: None,
                navigations: Vec::new(),
                mutations: 0,
            })),
        }
    }

    /// Builder: drops one hook (and its element) from the page.
    pub fn without_hook(self, hook: Hook) -> Self {
        {
            let mut inner = self.inner.lock().expect("page mutex poisoned");
            inner.hooks.retain(|h| *h != hook);
            let id = match hook {
                Hook::OpenTrigger => Some(ids::OPEN_TRIGGER),
                Hook::CloseTrigger => Some(ids::CLOSE_TRIGGER),
                Hook::Checkout => Some(ids::CHECKOUT),
                Hook::ViewCart => Some(ids::VIEW_CART),
                _ => None,
            };
            if let Some(id) = id {
                inner.elements.remove(id);
                inner.panel_head.retain(|e| e != id);
                inner.panel_tail.retain(|e| e != id);
            }
        }
        self
    }

    /// Removes an element from the page entirely (it can no longer receive
    /// focus), as if the surrounding markup re-rendered without it.
    pub fn remove_element(&self, id: &str) {
        let mut inner = self.inner.lock().expect("page mutex poisoned");
        inner.elements.remove(id);
        if inner.focused.as_deref() == Some(id) {
            inner.focused = None;
        }
    }

    // -------------------------------------------------------------------------
    // Inspection (tests, demo output)
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.inner.lock().expect("page mutex poisoned").panel_open
    }

    pub fn aria_expanded(&self) -> bool {
        self.inner.lock().expect("page mutex poisoned").aria_expanded
    }

    pub fn subtotal(&self) -> String {
        self.inner.lock().expect("page mutex poisoned").subtotal.clone()
    }

    pub fn badge(&self) -> (String, bool) {
        let inner = self.inner.lock().expect("page mutex poisoned");
        (inner.badge_text.clone(), inner.badge_visible)
    }

    pub fn empty_visible(&self) -> bool {
        self.inner.lock().expect("page mutex poisoned").empty_visible
    }

    pub fn items(&self) -> Vec<ItemNode> {
        self.inner.lock().expect("page mutex poisoned").items.clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.inner.lock().expect("page mutex poisoned").navigations.clone()
    }

    /// Number of visual mutations applied so far. Idempotent operations must
    /// leave this unchanged.
    pub fn mutations(&self) -> u64 {
        self.inner.lock().expect("page mutex poisoned").mutations
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerPage for MemoryPage {
    fn hook_present(&self, hook: Hook) -> bool {
        self.inner
            .lock()
            .expect("page mutex poisoned")
            .hooks
            .contains(&hook)
    }

    fn set_open_visuals(&self, open: bool) {
        let mut inner = self.inner.lock().expect("page mutex poisoned");
        inner.panel_open = open;
        inner.touch();
    }

    fn set_aria_expanded(&self, open: bool) {
        let mut inner = self.inner.lock().expect("page mutex poisoned");
        inner.aria_expanded = open;
        inner.touch();
    }

    fn replace_items(&self, rows: Vec<ItemNode>) {
        let mut inner = self.inner.lock().expect("page mutex poisoned");

        // Old row controls disappear with their rows
        for id in std::mem::take(&mut inner.row_focusables) {
            inner.elements.remove(&id);
            if inner.focused.as_deref() == Some(id.as_str()) {
                inner.focused = None;
            }
        }

        // Each row contributes its quantity input and remove button
        for row in &rows {
            for id in [format!("qty-{}", row.line_key), format!("remove-{}", row.line_key)] {
                inner.elements.insert(id.clone(), true);
                inner.row_focusables.push(id);
            }
        }

        inner.items = rows;
        inner.touch();
    }

    fn set_subtotal(&self, text: &str) {
        let mut inner = self.inner.lock().expect("page mutex poisoned");
        if !inner.hooks.contains(&Hook::Subtotal) {
            return; // feature inert
        }
        inner.subtotal = text.to_string();
        inner.touch();
    }

    fn set_badge(&self, text: &str, visible: bool) {
        let mut inner = self.inner.lock().expect("page mutex poisoned");
        if !inner.hooks.contains(&Hook::Badge) {
            return; // feature inert
        }
        inner.badge_text = text.to_string();
        inner.badge_visible = visible;
        inner.touch();
    }

    fn set_empty_visible(&self, visible: bool) {
        let mut inner = self.inner.lock().expect("page mutex poisoned");
        if !inner.hooks.contains(&Hook::EmptyState) {
            return; // feature inert
        }
        inner.empty_visible = visible;
        inner.touch();
    }

    fn focusables(&self) -> Vec<FocusTarget> {
        let inner = self.inner.lock().expect("page mutex poisoned");
        inner
            .panel_head
            .iter()
            .chain(inner.row_focusables.iter())
            .chain(inner.panel_tail.iter())
            .filter(|id| inner.elements.get(*id).copied().unwrap_or(false))
            .map(|id| FocusTarget(id.clone()))
            .collect()
    }

    fn focused(&self) -> Option<FocusTarget> {
        self.inner
            .lock()
            .expect("page mutex poisoned")
            .focused
            .clone()
            .map(FocusTarget)
    }

    fn focus(&self, target: &FocusTarget) -> bool {
        let mut inner = self.inner.lock().expect("page mutex poisoned");
        match inner.elements.get(&target.0) {
            Some(true) => {
                if inner.focused.as_deref() != Some(target.0.as_str()) {
                    inner.focused = Some(target.0.clone());
                    inner.touch();
                }
                true
            }
            _ => false,
        }
    }

    fn navigate(&self, url: &str) {
        let mut inner = self.inner.lock().expect("page mutex poisoned");
        inner.navigations.push(url.to_string());
    }
}
