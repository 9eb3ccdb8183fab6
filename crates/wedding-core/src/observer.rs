//! # Discount Advisories
//!
//! Diagnostic channel for the "several equally large discounts" notice.
//!
//! The calculator never prints anything itself. It hands the notice to a
//! [`DiscountObserver`] supplied by the caller:
//!
//! ```text
//! PriceCalculator::calculate_with(observer)
//!      │
//!      ├── candidates: [600, 600]  (tie)
//!      │
//!      ├── observer.tied_discounts(&notice) ──► host decides (log, UI, ignore)
//!      │
//!      ▼
//! PriceResult { base, base - 600 }   (unchanged by the observer)
//! ```
//!
//! The notice is informational. Observers cannot fail and cannot change the
//! computed price.

use tracing::warn;

use crate::money::Money;
use crate::types::Year;

/// Emitted when two or more candidate discounts share the largest amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiedDiscountNotice {
    pub year: Year,
    /// The amount that was applied, once.
    pub amount: Money,
    /// How many candidates carried that amount.
    pub tied: usize,
}

/// Receives pricing advisories.
pub trait DiscountObserver {
    fn tied_discounts(&self, notice: &TiedDiscountNotice);
}

/// Any `Fn(&TiedDiscountNotice)` closure is an observer.
impl<F> DiscountObserver for F
where
    F: Fn(&TiedDiscountNotice),
{
    fn tied_discounts(&self, notice: &TiedDiscountNotice) {
        self(notice)
    }
}

/// Forwards advisories to `tracing` at WARN level.
///
/// With no subscriber installed the event goes nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DiscountObserver for TracingObserver {
    fn tied_discounts(&self, notice: &TiedDiscountNotice) {
        warn!(
            year = %notice.year,
            amount = %notice.amount,
            tied = notice.tied,
            "The greatest discount was applied. Other discounts were ignored"
        );
    }
}

/// Drops every advisory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl DiscountObserver for NoOpObserver {
    fn tied_discounts(&self, _notice: &TiedDiscountNotice) {}
}
