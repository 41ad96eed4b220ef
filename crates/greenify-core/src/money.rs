//! # Money Module
//!
//! Provides the `Money` type for handling prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float prices drifts:                                           │
//! │    24.99 + 29.99 + 19.99 = 74.97000000000001                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2499 + 2999 + 1999 = 7497 cents, exactly                             │
//! │                                                                         │
//! │  Floats only appear at the very edge, for presentation.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use greenify_core::money::Money;
//!
//! let price = Money::from_cents(2499); // €24.99
//! let line = price.multiply_quantity(2);
//! assert_eq!(line.cents(), 4998);
//! assert_eq!(line.to_string(), "€49.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

/// Currency symbol used by the `Display` implementation.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Product.price_cents ──► LineItem.line_total() ──► CartSummary.total_cost
///                                                        │
///                                                        └──► "€ 49.98" in UI
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use greenify_core::money::Money;
    ///
    /// let price = Money::from_cents(1499);
    /// assert_eq!(price.cents(), 1499);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a quantity, saturating at the `i64` bounds.
    ///
    /// ```rust
    /// use greenify_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1999);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 5997);
    /// assert_eq!(Money::from_cents(i64::MAX).multiply_quantity(2).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Returns the amount in major units as a float.
    ///
    /// Display and export only. Never feed the result back into arithmetic.
    ///
    /// ```rust
    /// use greenify_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(2500).to_major_f64(), 25.0);
    /// ```
    #[inline]
    pub fn to_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Formats the amount with a custom currency symbol, separated by a space.
    ///
    /// ```rust
    /// use greenify_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(2499).format_with("€"), "€ 24.99");
    /// assert_eq!(Money::from_cents(-550).format_with("$"), "-$ 5.50");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{} {}.{:02}", sign, symbol, self.major().abs(), self.minor())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

// Arithmetic saturates at the i64 bounds; a cart total never overflows.

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            DEFAULT_CURRENCY_SYMBOL,
            self.major().abs(),
            self.minor()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
