//! # Money Module
//!
//! Provides the `Money` type and the tax-inclusive VAT split.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount is an i64 in the smallest currency unit.               │
//! │    Rounding happens exactly once, in the VAT back-out.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tax-Inclusive Pricing
//! Lagoon prices are TTC (tax included), the French retail model.
//! The VAT portion is backed OUT of the displayed price:
//!
//! ```text
//! tax = amount × rate / (100 + rate)
//! net = amount − tax        (always derived, never computed separately)
//! ```
//!
//! Deriving `net` by subtraction means the two parts reconcile to the
//! displayed amount exactly, with no rounding drift between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (euro cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: change and refunds can go negative during arithmetic
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for the JSON store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use lagoon_core::money::Money;
    ///
    /// let price = Money::from_cents(1050); // 10.50
    /// assert_eq!(price.cents(), 1050);
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

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Backs the VAT portion out of a tax-inclusive amount.
    ///
    /// ## The Formula
    /// ```text
    /// tax = amount × rate / (100 + rate)
    /// ```
    /// In basis points with round-half-up integer division:
    /// ```text
    /// tax_cents = (cents × bps + (10000 + bps)/2) / (10000 + bps)
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use lagoon_core::money::Money;
    /// use lagoon_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(1000);         // 10.00 TTC
    /// let tax = price.included_tax(TaxRate::Reduced); // 2.1%
    /// // 10.00 × 2.1 / 102.1 = 0.2057 → 21 cents
    /// assert_eq!(tax.cents(), 21);
    /// ```
    ///
    /// The pre-tax amount is `self - tax`, see [`Money::excluding_tax`].
    pub fn included_tax(&self, rate: TaxRate) -> Money {
        let bps = rate.bps() as i128;
        let denom = 10000 + bps;
        // i128 intermediates so large line totals cannot overflow
        let tax_cents = (self.0 as i128 * bps + denom / 2) / denom;
        Money::from_cents(tax_cents as i64)
    }

    /// The pre-tax (HT) portion of a tax-inclusive amount.
    ///
    /// Always derived as `amount − tax` so the split reconciles exactly.
    pub fn excluding_tax(&self, rate: TaxRate) -> Money {
        *self - self.included_tax(rate)
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use lagoon_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(350); // 3.50
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 1050);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and the seed binary. The frontend formats
/// amounts itself to handle localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02} €", sign, self.euros().abs(), self.cents_part())
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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.euros(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99 €");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00 €");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50 €");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00 €");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_included_tax_reduced_rate() {
        // 10.00 TTC at 2.1%: 1000 × 210 / 10210 = 20.57 → 21 cents
        let amount = Money::from_cents(1000);
        let tax = amount.included_tax(TaxRate::Reduced);
        assert_eq!(tax.cents(), 21);

        // Net is derived by subtraction, so the split reconciles exactly
        let net = amount.excluding_tax(TaxRate::Reduced);
        assert_eq!(net.cents(), 979);
        assert_eq!((net + tax).cents(), amount.cents());
    }

    #[test]
    fn test_included_tax_standard_rate() {
        // 10.00 TTC at 8.5%: 1000 × 850 / 10850 = 78.34 → 78 cents
        let amount = Money::from_cents(1000);
        let tax = amount.included_tax(TaxRate::Standard);
        assert_eq!(tax.cents(), 78);
        assert_eq!(amount.excluding_tax(TaxRate::Standard).cents(), 922);
    }

    #[test]
    fn test_included_tax_zero_amount() {
        let tax = Money::zero().included_tax(TaxRate::Standard);
        assert!(tax.is_zero());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    }

    /// The split must reconcile for every amount, both rates.
    #[test]
    fn test_split_reconciles_over_range() {
        for cents in [1, 7, 99, 100, 1001, 123_456, 9_999_999] {
            for rate in [TaxRate::Reduced, TaxRate::Standard] {
                let amount = Money::from_cents(cents);
                let tax = amount.included_tax(rate);
                let net = amount.excluding_tax(rate);
                assert_eq!((net + tax).cents(), cents);
                assert!(!tax.is_negative());
            }
        }
    }
}
