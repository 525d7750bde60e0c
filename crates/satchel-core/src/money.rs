//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, and the
//! display formatter used by the drawer's subtotal and line prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    The remote cart resource already speaks minor units (cents),        │
//! │    so every amount stays an i64 from the wire to the formatter.        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use satchel_core::money::{format, Money};
//!
//! // Create from minor units (the only way)
//! let price = Money::from_minor(1099); // €10.99
//!
//! // Arithmetic operations
//! let line_total = price * 2;
//!
//! // Display formatting with a currency code
//! assert_eq!(format(line_total, "EUR"), "€21.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for EUR).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for refunds and discounts the
///   remote cart may report
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, so wire amounts deserialize directly
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// let price = Money::from_minor(1099); // Represents €10.99
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (whole currency) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(1099).minor_part(), 99);
    /// assert_eq!(Money::from_minor(-550).minor_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a quantity (for line totals).
    ///
    /// ## Example
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(500);
    /// assert_eq!(unit_price.multiply_quantity(2).minor(), 1000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Returns the display symbol for a currency code, if we know one.
///
/// The table is deliberately small; the storefront only trades in these
/// currencies. Unknown codes render without a symbol rather than guessing.
fn symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "USD" => Some("$"),
        _ => None,
    }
}

/// Formats a monetary amount for display.
///
/// ## Contract
/// - Divides by 100 and fixes to two decimal places
/// - Prepends the currency symbol when the code is known (EUR, GBP, USD)
/// - Unknown codes produce the bare numeric string
/// - Always returns a string; there are no error cases
///
/// ## Example
/// ```rust
/// use satchel_core::money::{format, Money};
///
/// assert_eq!(format(Money::from_minor(1234), "GBP"), "£12.34");
/// assert_eq!(format(Money::zero(), "ZZZ"), "0.00");
/// ```
///
/// Locale-agnostic on purpose: deterministic output is what the render
/// tests assert against.
pub fn format(amount: Money, currency: &str) -> String {
    let symbol = symbol_for(currency).unwrap_or("");
    let sign = if amount.minor() < 0 { "-" } else { "" };
    std::format!(
        "{}{}{}.{:02}",
        symbol,
        sign,
        amount.major().abs(),
        amount.minor_part()
    )
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the bare amount without a currency symbol.
///
/// Use [`format`] for user-facing output; this is for logs and debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
