//! # Render Engine
//!
//! Cart snapshot → page mutations.
//!
//! ## Render Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       render(page, cart)                                │
//! │                                                                         │
//! │  cart is None or has no items                                          │
//! │  ───────────────────────────────                                       │
//! │  • items container cleared                                             │
//! │  • empty-state indicator shown                                         │
//! │  • badge hidden                                                        │
//! │  • subtotal formatted from the cart's currency (default currency       │
//! │    when no cart exists yet) and its total (zero when absent)           │
//! │                                                                         │
//! │  cart has items                                                        │
//! │  ──────────────                                                        │
//! │  • one row per line, server order, escaped markup                      │
//! │  • empty-state hidden                                                  │
//! │  • subtotal = formatted total_price                                    │
//! │  • badge = item_count (or derived sum), hidden when zero               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The snapshot is read-only here: rendering never mutates a cart, and a
//! re-render always starts from a fresh snapshot, never from previous rows.

use satchel_core::{format, Cart, Money};
use tracing::trace;

use crate::markup;
use crate::page::{DrawerPage, ItemNode};

/// Renders a cart snapshot into the drawer's page hooks.
pub fn render(page: &dyn DrawerPage, cart: Option<&Cart>, default_currency: &str) {
    let empty = cart.map_or(true, Cart::is_empty);
    if empty {
        let (total, currency) = match cart {
            Some(cart) => (cart.total_price, cart.currency.as_str()),
            None => (Money::zero(), default_currency),
        };

        trace!("rendering empty drawer");
        page.replace_items(Vec::new());
        page.set_empty_visible(true);
        page.set_badge("", false);
        page.set_subtotal(&format(total, currency));
        return;
    }

    let cart = cart.expect("non-empty branch has a cart");
    trace!(items = cart.items.len(), "rendering drawer");

    let rows = cart
        .items
        .iter()
        .map(|item| ItemNode {
            variant_id: item.variant_id,
            line_key: item.line_key(),
            unit_price: item.price,
            quantity: item.quantity,
            markup: markup::item_row(item, &cart.currency),
        })
        .collect();

    page.replace_items(rows);
    page.set_empty_visible(false);
    page.set_subtotal(&format(cart.total_price, &cart.currency));

    let quantity = cart.total_quantity();
    if quantity > 0 {
        page.set_badge(&quantity.to_string(), true);
    } else {
        page.set_badge("", false);
    }
}
