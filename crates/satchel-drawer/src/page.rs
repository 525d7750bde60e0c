//! # Page Seam
//!
//! The [`DrawerPage`] trait: the strategy object through which the engine
//! drives the surrounding page.
//!
//! ## Why a trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Page Hook Contract                                 │
//! │                                                                         │
//! │  The drawer needs ten named hooks in the surrounding page:             │
//! │                                                                         │
//! │  REQUIRED                          OPTIONAL (absent = feature inert)   │
//! │  ────────────────                  ──────────────────────────────────  │
//! │  • open trigger                    • quantity badge                    │
//! │  • drawer panel                    • subtotal display                  │
//! │  • modal backdrop                  • close trigger                     │
//! │  • items container                 • checkout trigger                  │
//! │                                    • view-cart trigger                 │
//! │                                    • empty-state indicator             │
//! │                                                                         │
//! │  The controller never looks hooks up itself; it receives a DrawerPage  │
//! │  at mount time and fails fast (typed error) when a required hook is    │
//! │  missing. Optional-hook operations on an incomplete page are no-ops.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations own their interior mutability; every method takes
//! `&self` the way the page world is ambient. [`MemoryPage`] is the crate's
//! headless implementation.
//!
//! [`MemoryPage`]: crate::memory::MemoryPage

use satchel_core::{Money, VariantId};

// =============================================================================
// Hooks
// =============================================================================

/// The named page hooks the drawer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Button that toggles the drawer.
    OpenTrigger,
    /// Badge showing the total item quantity.
    Badge,
    /// Modal backdrop behind the panel.
    Backdrop,
    /// The slide-in panel itself.
    Panel,
    /// Close button inside the panel.
    CloseTrigger,
    /// Container the rendered item rows replace.
    ItemsContainer,
    /// Subtotal text display.
    Subtotal,
    /// Checkout trigger (opaque navigation).
    Checkout,
    /// View-cart trigger (opaque navigation).
    ViewCart,
    /// Empty-state indicator shown when the cart has no lines.
    EmptyState,
}

impl Hook {
    /// Hooks the drawer cannot operate without.
    pub const REQUIRED: [Hook; 4] = [
        Hook::OpenTrigger,
        Hook::Panel,
        Hook::Backdrop,
        Hook::ItemsContainer,
    ];

    /// Stable name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Hook::OpenTrigger => "open-trigger",
            Hook::Badge => "badge",
            Hook::Backdrop => "backdrop",
            Hook::Panel => "panel",
            Hook::CloseTrigger => "close-trigger",
            Hook::ItemsContainer => "items-container",
            Hook::Subtotal => "subtotal",
            Hook::Checkout => "checkout",
            Hook::ViewCart => "view-cart",
            Hook::EmptyState => "empty-state",
        }
    }
}

// =============================================================================
// Focus and Rows
// =============================================================================

/// Identity of a focusable element on the page.
///
/// Deliberately just a name: the page resolves it to a live element on every
/// call, so holding one never extends any element's lifetime. A target whose
/// element has gone away simply fails to focus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusTarget(pub String);

impl FocusTarget {
    pub fn new(id: impl Into<String>) -> Self {
        FocusTarget(id.into())
    }
}

/// A rendered item row handed to the page's items container.
///
/// Carries both the display markup (already escaped) and the structured
/// fields the page exposes back as data attributes for event delegation.
#[derive(Debug, Clone)]
pub struct ItemNode {
    /// Variant this row controls (transport addressing).
    pub variant_id: VariantId,

    /// Row identity: the server's line key, or the variant id (row identity
    /// only — never used to address the transport).
    pub line_key: String,

    /// Unit price exposed as a data attribute.
    pub unit_price: Money,

    /// Quantity the row's input is bound to.
    pub quantity: i64,

    /// Escaped inner markup of the row.
    pub markup: String,
}

// =============================================================================
// Page Trait
// =============================================================================

/// Strategy object for locating and driving the drawer's page hooks.
///
/// Methods addressing an optional hook that is absent must be silent no-ops;
/// required hooks are validated once, at mount.
pub trait DrawerPage: Send + Sync {
    /// True when the hook exists on this page.
    fn hook_present(&self, hook: Hook) -> bool;

    /// Applies or removes the open visual state on panel and backdrop.
    fn set_open_visuals(&self, open: bool);

    /// Mirrors the open state onto ARIA attributes (trigger `aria-expanded`,
    /// panel `aria-hidden`).
    fn set_aria_expanded(&self, open: bool);

    /// Replaces the items container's contents with the given rows.
    fn replace_items(&self, rows: Vec<ItemNode>);

    /// Sets the subtotal display text.
    fn set_subtotal(&self, text: &str);

    /// Sets the badge text and visibility.
    fn set_badge(&self, text: &str, visible: bool);

    /// Shows or hides the empty-state indicator.
    fn set_empty_visible(&self, visible: bool);

    /// Focusable elements inside the panel, in tab order.
    fn focusables(&self) -> Vec<FocusTarget>;

    /// Currently focused element anywhere on the page.
    fn focused(&self) -> Option<FocusTarget>;

    /// Moves focus to `target`. Returns false when the element no longer
    /// exists or no longer accepts focus.
    fn focus(&self, target: &FocusTarget) -> bool;

    /// Navigates away from the page (checkout / view-cart — opaque to the
    /// drawer).
    fn navigate(&self, url: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_hooks() {
        assert!(Hook::REQUIRED.contains(&Hook::Panel));
        assert!(Hook::REQUIRED.contains(&Hook::ItemsContainer));
        assert!(!Hook::REQUIRED.contains(&Hook::Badge));
    }

    #[test]
    fn test_hook_names_are_stable() {
        assert_eq!(Hook::OpenTrigger.name(), "open-trigger");
        assert_eq!(Hook::EmptyState.name(), "empty-state");
    }
}
