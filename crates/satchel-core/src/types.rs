//! # Cart Snapshot Types
//!
//! The shapes the remote cart resource speaks, plus the derived accessors
//! the drawer renders from.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Snapshot Types                                  │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐   ┌────────────────┐   │
//! │  │      Cart       │ 1 ── * │    LineItem     │   │   VariantId    │   │
//! │  │  ─────────────  │        │  ─────────────  │   │  ────────────  │   │
//! │  │  items          │        │  variant_id     │   │  u64 newtype   │   │
//! │  │  total_price    │        │  key (optional) │   │  opaque id of  │   │
//! │  │  currency       │        │  quantity       │   │  a purchasable │   │
//! │  │  item_count     │        │  price          │   │  variant       │   │
//! │  └─────────────────┘        │  line_price     │   └────────────────┘   │
//! │                             │  title, image   │                        │
//! │                             └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Discipline
//! A `Cart` is always a fresh snapshot obtained from the transport after any
//! add/update operation. The UI never mutates one locally — there is no
//! optimistic merge, which eliminates drift between displayed and server
//! state at the cost of one extra round trip per mutation.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Variant Identity
// =============================================================================

/// Opaque identifier of a purchasable variant, unique within the cart.
///
/// ## Design Notes
/// - The server assigns these; the client never invents one
/// - Used for transport addressing (`updates[<variant>]=<qty>`) and for the
///   debounce timer table keys
/// - Newtype over u64 so it can't be confused with a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantId(pub u64);

impl VariantId {
    /// Returns the raw numeric id.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VariantId {
    fn from(raw: u64) -> Self {
        VariantId(raw)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One purchasable variant and its quantity within a cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Variant this line refers to.
    pub variant_id: VariantId,

    /// Finer-grained line identifier assigned by the server.
    ///
    /// Used only for row identity in the drawer; transport addressing always
    /// goes through `variant_id`. Falls back to the variant id when absent
    /// (see [`LineItem::line_key`]).
    #[serde(default)]
    pub key: Option<String>,

    /// Quantity in the cart (≥ 0).
    ///
    /// A quantity of 0 is a valid transient *request* value meaning "remove
    /// this line"; the server decides whether the line disappears from the
    /// next snapshot.
    pub quantity: i64,

    /// Price per unit, minor units.
    pub price: Money,

    /// Precomputed line total, minor units; servers may omit it
    /// (see [`LineItem::line_total`]).
    #[serde(default)]
    pub line_price: Option<Money>,

    /// Display title.
    pub title: String,

    /// Variant title sub-line, when the variant is not the product default.
    #[serde(default)]
    pub variant_title: Option<String>,

    /// Image URL, when the variant has one.
    #[serde(default)]
    pub image: Option<String>,
}

impl LineItem {
    /// Returns the line total, deriving it from `price × quantity` when the
    /// server did not precompute one.
    pub fn line_total(&self) -> Money {
        self.line_price
            .unwrap_or_else(|| self.price.multiply_quantity(self.quantity))
    }

    /// Returns the identity used for the rendered row.
    ///
    /// The server's `key` when present, the variant id otherwise.
    pub fn line_key(&self) -> String {
        self.key
            .clone()
            .unwrap_or_else(|| self.variant_id.to_string())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A server-owned cart snapshot, fetched fresh at every synchronization
/// point and immutable once rendered.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Line items in server-defined display order.
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Sum of all line totals, minor units.
    pub total_price: Money,

    /// ISO currency code for every amount in this snapshot.
    pub currency: String,

    /// Sum of line quantities, when the server supplies it
    /// (see [`Cart::total_quantity`]).
    #[serde(default)]
    pub item_count: Option<i64>,
}

impl Cart {
    /// True when the snapshot has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all lines: the server-supplied `item_count`
    /// when present, the sum of line quantities otherwise.
    pub fn total_quantity(&self) -> i64 {
        self.item_count
            .unwrap_or_else(|| self.items.iter().map(|i| i.quantity).sum())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(variant: u64, qty: i64, price: i64) -> LineItem {
        LineItem {
            variant_id: VariantId(variant),
            key: None,
            quantity: qty,
            price: Money::from_minor(price),
            line_price: None,
            title: format!("Item {variant}"),
            variant_title: None,
            image: None,
        }
    }

    #[test]
    fn test_line_total_prefers_server_value() {
        let mut item = line(1, 2, 500);
        item.line_price = Some(Money::from_minor(900)); // discounted by server
        assert_eq!(item.line_total().minor(), 900);
    }

    #[test]
    fn test_line_total_derived_when_absent() {
        let item = line(1, 2, 500);
        assert_eq!(item.line_total().minor(), 1000);
    }

    #[test]
    fn test_line_key_falls_back_to_variant_id() {
        let mut item = line(42, 1, 100);
        assert_eq!(item.line_key(), "42");

        item.key = Some("42:deadbeef".to_string());
        assert_eq!(item.line_key(), "42:deadbeef");
    }

    #[test]
    fn test_total_quantity_prefers_item_count() {
        let cart = Cart {
            items: vec![line(1, 2, 100), line(2, 3, 100)],
            total_price: Money::from_minor(500),
            currency: "EUR".to_string(),
            item_count: Some(7), // server says 7; trust it
        };
        assert_eq!(cart.total_quantity(), 7);
    }

    #[test]
    fn test_total_quantity_derived_when_absent() {
        let cart = Cart {
            items: vec![line(1, 2, 100), line(2, 3, 100)],
            total_price: Money::from_minor(500),
            currency: "EUR".to_string(),
            item_count: None,
        };
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_deserializes_remote_shape() {
        // The shape the remote cart endpoint actually returns, including
        // fields we ignore and fields we default.
        let json = r#"{
            "items": [
                {
                    "variant_id": 39897499729985,
                    "key": "39897499729985:3bf6f4b",
                    "quantity": 2,
                    "price": 1250,
                    "line_price": 2500,
                    "title": "Linen Shirt",
                    "variant_title": "Medium",
                    "image": "https://cdn.example/shirt.jpg",
                    "vendor": "ignored-field"
                },
                {
                    "variant_id": 7,
                    "quantity": 1,
                    "price": 300,
                    "title": "Socks"
                }
            ],
            "total_price": 2800,
            "currency": "GBP",
            "item_count": 3
        }"#;

        let cart: Cart = serde_json::from_str(json).expect("cart parses");
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].variant_id, VariantId(39897499729985));
        assert_eq!(cart.items[0].line_total().minor(), 2500);
        assert_eq!(cart.items[1].line_key(), "7");
        assert_eq!(cart.items[1].variant_title, None);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.currency, "GBP");
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let cart: Cart =
            serde_json::from_str(r#"{"total_price": 0, "currency": "EUR"}"#).expect("parses");
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }
}
