//! # Money Module
//!
//! Provides the `Money` type for price amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price in the table is a whole amount (1900, 2500, 300).          │
//! │                                                                         │
//! │  Base price   = sum of table entries        (integer addition)          │
//! │  Final price  = base price - one discount   (integer subtraction)       │
//! │                                                                         │
//! │  No division, no rates, no rounding: an i64 is exact for all of it.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wedding_core::money::Money;
//!
//! let bundle = Money::new(2300);
//! let bluray = Money::new(300);
//! assert_eq!((bundle + bluray).amount(), 2600);
//! ```
//!
//! Currency symbols and locale formatting belong to whoever displays the
//! amount. `Display` prints the bare integer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A price amount in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never wraps; callers clamp with
///   [`Money::sub_floor_zero`] where a negative amount would be meaningless
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as a plain number**: `{"basePrice": 2500}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a whole amount.
    ///
    /// ## Example
    /// ```rust
    /// use wedding_core::money::Money;
    ///
    /// let price = Money::new(1900);
    /// assert_eq!(price.amount(), 1900);
    /// ```
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Subtracts `other`, flooring the result at zero.
    ///
    /// ## Example
    /// ```rust
    /// use wedding_core::money::Money;
    ///
    /// assert_eq!(Money::new(600).sub_floor_zero(Money::new(300)), Money::new(300));
    /// assert_eq!(Money::new(300).sub_floor_zero(Money::new(600)), Money::zero());
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Base price: 2500
    ///      │
    ///      ▼
    /// sub_floor_zero(discount: 600) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Final price: 1900   (never below 0)
    /// ```
    #[inline]
    pub const fn sub_floor_zero(&self, other: Money) -> Self {
        let diff = self.0.saturating_sub(other.0);
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
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

/// Summing line prices into a base price.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
