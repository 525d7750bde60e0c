//! # Validation Module
//!
//! Input sanitization for values arriving from the page.
//!
//! ## Sanitization Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Input Arrives                                │
//! │                                                                         │
//! │  Quantity input field ──► raw text ("3", "", "-2", "abc")              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  sanitize_quantity ──► integer ≥ 0, clamped to MAX_LINE_QUANTITY       │
//! │                                                                         │
//! │  Add-to-cart trigger ──► optional quantity attribute                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  sanitize_add_quantity ──► integer ≥ 1 (missing/garbage → 1)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These functions are total: a quantity field mid-edit is routine, not an
//! error, so garbage maps to a safe value instead of a rejection. The typed
//! failure path belongs to the transport, where failures are real.

use crate::MAX_LINE_QUANTITY;

// =============================================================================
// Quantity Sanitizers
// =============================================================================

/// Sanitizes a quantity typed into a line's quantity input.
///
/// ## Rules
/// - Unparseable or negative input → 0 (0 means "remove this line")
/// - Values above [`MAX_LINE_QUANTITY`] are clamped
///
/// ## Example
/// ```rust
/// use satchel_core::validation::sanitize_quantity;
///
/// assert_eq!(sanitize_quantity("3"), 3);
/// assert_eq!(sanitize_quantity(""), 0);
/// assert_eq!(sanitize_quantity("-2"), 0);
/// assert_eq!(sanitize_quantity("abc"), 0);
/// ```
pub fn sanitize_quantity(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .unwrap_or(0)
        .clamp(0, MAX_LINE_QUANTITY)
}

/// Sanitizes the quantity attribute of an add-to-cart trigger.
///
/// Missing or unparseable attributes mean "one unit", matching what a bare
/// add button does. Zero and negatives also map to 1: an add trigger always
/// adds something.
pub fn sanitize_add_quantity(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|q| *q >= 1)
        .unwrap_or(1)
        .min(MAX_LINE_QUANTITY)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_quantity_parses_digits() {
        assert_eq!(sanitize_quantity("5"), 5);
        assert_eq!(sanitize_quantity(" 12 "), 12);
        assert_eq!(sanitize_quantity("0"), 0);
    }

    #[test]
    fn test_sanitize_quantity_maps_garbage_to_zero() {
        assert_eq!(sanitize_quantity(""), 0);
        assert_eq!(sanitize_quantity("abc"), 0);
        assert_eq!(sanitize_quantity("1.5"), 0);
        assert_eq!(sanitize_quantity("-3"), 0);
    }

    #[test]
    fn test_sanitize_quantity_clamps_to_max() {
        assert_eq!(sanitize_quantity("100000"), MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_sanitize_add_quantity_defaults_to_one() {
        assert_eq!(sanitize_add_quantity(None), 1);
        assert_eq!(sanitize_add_quantity(Some("")), 1);
        assert_eq!(sanitize_add_quantity(Some("zero")), 1);
        assert_eq!(sanitize_add_quantity(Some("0")), 1);
        assert_eq!(sanitize_add_quantity(Some("-4")), 1);
    }

    #[test]
    fn test_sanitize_add_quantity_accepts_positive() {
        assert_eq!(sanitize_add_quantity(Some("3")), 3);
        assert_eq!(sanitize_add_quantity(Some(" 2 ")), 2);
    }
}
