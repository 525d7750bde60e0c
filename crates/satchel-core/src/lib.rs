//! # satchel-core: Pure Domain Logic for Satchel
//!
//! This crate is the **heart** of the Satchel cart drawer engine. It holds
//! the cart snapshot types and the money arithmetic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Satchel Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront Page                              │   │
//! │  │    Add-to-cart buttons ──► Drawer panel ──► Checkout           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ events / page hooks                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    satchel-drawer                               │   │
//! │  │    controller, render engine, debouncer, event router           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ satchel-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌───────────┐      ┌───────────────────┐  │   │
//! │  │   │   types   │      │   money   │      │    validation     │  │   │
//! │  │   │   Cart    │      │   Money   │      │  quantity input   │  │   │
//! │  │   │ LineItem  │      │  format   │      │   sanitization    │  │   │
//! │  │   └───────────┘      └───────────┘      └───────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO PAGE ACCESS • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Cart snapshot types (Cart, LineItem, VariantId)
//! - [`money`] - Money type with integer arithmetic and display formatting
//! - [`validation`] - Quantity input sanitization
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, page, and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64), no floats
//! 4. **Snapshots Are Immutable**: a `Cart` is never patched in place; a new
//!    one is fetched after every mutation

// =============================================================================
// Module Declarations
// =============================================================================

pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use satchel_core::Money` instead of
// `use satchel_core::money::Money`

pub use money::{format, Money};
pub use types::{Cart, LineItem, VariantId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency used when no cart snapshot is available yet.
///
/// ## Why a constant?
/// Before the first successful fetch the drawer still renders a zero
/// subtotal; the remote cart is the only authority on currency, so until it
/// answers we need *some* code to format with.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Maximum quantity accepted from a quantity input.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// The server applies its own limits; this only bounds what we send.
pub const MAX_LINE_QUANTITY: i64 = 999;
