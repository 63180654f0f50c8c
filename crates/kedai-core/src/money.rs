//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! Floating point cannot represent retail amounts exactly (`0.1 + 0.2 !=
//! 0.3`), so every monetary value in the system is an `i64` of whole rupiah.
//! Indonesian rupiah has no minor unit in day-to-day use: prices, order
//! totals and expenses are all whole-rupiah amounts, and the display format
//! carries no decimal digits.
//!
//! ## Usage
//! ```rust
//! use kedai_core::money::Money;
//!
//! let price = Money::from_rupiah(15_000);
//! let line_total = price * 2;
//! assert_eq!(line_total.rupiah(), 30_000);
//! assert_eq!(line_total.format_rupiah(), "Rp30.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Indonesian rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: profit/loss figures may be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the value in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kedai_core::money::Money;
    ///
    /// let unit_price = Money::from_rupiah(15_000);
    /// assert_eq!(unit_price.multiply_quantity(3).rupiah(), 45_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the value the way `id-ID` currency formatting does:
    /// `Rp` prefix, `.` as the thousands separator, no decimal digits.
    ///
    /// ## Example
    /// ```rust
    /// use kedai_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupiah(15_000).format_rupiah(), "Rp15.000");
    /// assert_eq!(Money::from_rupiah(-40_000).format_rupiah(), "-Rp40.000");
    /// assert_eq!(Money::zero().format_rupiah(), "Rp0");
    /// ```
    pub fn format_rupiah(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        format!("{}Rp{}", sign, grouped)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the localized rupiah format; it is also what the order
/// message composer embeds in the WhatsApp text.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_rupiah())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line totals and record amounts.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
