//! # Price Calculator
//!
//! Turns a selection and a pricing year into a base and final price.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    calculate()                                          │
//! │                                                                         │
//! │  Selection + Year                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate_base_price()                                                 │
//! │       ├── Photo + Video?  ──► bundle price (replaces both)              │
//! │       │   else            ──► Photo price, Video price (each if set)    │
//! │       ├── WeddingSession  ──► always its own price                      │
//! │       ├── Bluray          ──► only with VideoRecording                  │
//! │       └── TwoDayEvent     ──► only with Photography or VideoRecording   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  potential_discounts()     (only when WeddingSession is selected)       │
//! │       ├── latest year + Photography ──► session is free                 │
//! │       └── else Photo or Video       ──► flat 300 off                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  final = base - largest discount    (ties: apply once, notify observer) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use wedding_core::{compute_price, Money, Selection, Service, Year};
//!
//! let selection = Selection::from([Service::Photography, Service::WeddingSession]);
//! let result = compute_price(&selection, Year::Y2022).unwrap();
//!
//! assert_eq!(result.base_price, Money::new(2500));
//! assert_eq!(result.final_price, Money::new(1900)); // session is free in 2022
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::observer::{DiscountObserver, TiedDiscountNotice, TracingObserver};
use crate::price_table::PriceTable;
use crate::selection::Selection;
use crate::types::{PriceResult, Service, Year};

/// Flat amount off the wedding session when booked with photo or video.
pub const FLAT_WEDDING_SESSION_DISCOUNT: Money = Money::new(300);

// =============================================================================
// Discounts
// =============================================================================

/// Which rule produced a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountRule {
    /// Latest year, session booked with Photography: session costs nothing.
    FreeWeddingSession,
    /// Session booked with Photography or VideoRecording: flat amount off.
    FlatWeddingSession,
}

/// A candidate discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Discount {
    pub rule: DiscountRule,
    pub amount: Money,
}

/// Largest discount among candidates, and how many share that amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BestDiscount {
    discount: Discount,
    tied: usize,
}

fn best_discount(candidates: &[Discount]) -> Option<BestDiscount> {
    let top = candidates.iter().map(|d| d.amount).max()?;
    if !top.is_positive() {
        return None;
    }

    // First candidate wins among equals.
    let discount = *candidates.iter().find(|d| d.amount == top)?;
    let tied = candidates.iter().filter(|d| d.amount == top).count();

    Some(BestDiscount { discount, tied })
}

// =============================================================================
// Price Calculator
// =============================================================================

/// Prices one selection for one year.
///
/// Immutable once built. Every method is a pure function of
/// (selection, year, table).
#[derive(Debug, Clone, Copy)]
pub struct PriceCalculator<'a> {
    selection: &'a Selection,
    year: Year,
    table: &'a PriceTable,
}

impl<'a> PriceCalculator<'a> {
    /// Creates a calculator over the standard price table.
    pub fn new(selection: &'a Selection, year: Year) -> Self {
        PriceCalculator {
            selection,
            year,
            table: PriceTable::standard(),
        }
    }

    /// Uses `table` instead of the standard prices.
    pub fn with_table(self, table: &'a PriceTable) -> Self {
        PriceCalculator { table, ..self }
    }

    fn has(&self, service: Service) -> bool {
        self.selection.contains(service)
    }

    fn price(&self, service: Service) -> CoreResult<Money> {
        self.table.service_price(self.year, service)
    }

    /// Sum of the selected services before discounts.
    ///
    /// Add-ons whose base service is missing contribute nothing; they are not
    /// rejected here.
    pub fn calculate_base_price(&self) -> CoreResult<Money> {
        let mut base = Money::zero();

        if self.selection.has_bundle() {
            base += self.table.bundle_price(self.year)?;
        } else {
            if self.has(Service::Photography) {
                base += self.price(Service::Photography)?;
            }
            if self.has(Service::VideoRecording) {
                base += self.price(Service::VideoRecording)?;
            }
        }

        if self.has(Service::WeddingSession) {
            base += self.price(Service::WeddingSession)?;
        }

        if self.has(Service::BlurayPackage) && self.has(Service::VideoRecording) {
            base += self.price(Service::BlurayPackage)?;
        }

        if self.has(Service::TwoDayEvent) && self.selection.has_photo_or_video() {
            base += self.price(Service::TwoDayEvent)?;
        }

        Ok(base)
    }

    /// Every discount the selection qualifies for.
    ///
    /// The two wedding session rules are exclusive: in the latest year with
    /// Photography only the free-session discount is offered.
    pub fn potential_discounts(&self) -> CoreResult<Vec<Discount>> {
        let mut discounts = Vec::new();

        if self.has(Service::WeddingSession) {
            if self.year.is_latest() && self.has(Service::Photography) {
                discounts.push(Discount {
                    rule: DiscountRule::FreeWeddingSession,
                    amount: self.price(Service::WeddingSession)?,
                });
            } else if self.selection.has_photo_or_video() {
                discounts.push(Discount {
                    rule: DiscountRule::FlatWeddingSession,
                    amount: FLAT_WEDDING_SESSION_DISCOUNT,
                });
            }
        }

        Ok(discounts)
    }

    /// The discount [`calculate`](Self::calculate) would apply, if any.
    pub fn applied_discount(&self) -> CoreResult<Option<Discount>> {
        let candidates = self.potential_discounts()?;
        Ok(best_discount(&candidates).map(|best| best.discount))
    }

    /// Prices the selection, logging tie advisories through `tracing`.
    pub fn calculate(&self) -> CoreResult<PriceResult> {
        self.calculate_with(&TracingObserver)
    }

    /// Prices the selection, reporting tie advisories to `observer`.
    pub fn calculate_with(&self, observer: &dyn DiscountObserver) -> CoreResult<PriceResult> {
        let base_price = self.calculate_base_price()?;
        let candidates = self.potential_discounts()?;
        let result = settle(self.year, base_price, &candidates, observer);

        debug!(
            year = %self.year,
            services = self.selection.len(),
            base = %result.base_price,
            final_price = %result.final_price,
            "Price calculated"
        );

        Ok(result)
    }
}

/// Applies the largest candidate once and reports ties.
fn settle(
    year: Year,
    base_price: Money,
    candidates: &[Discount],
    observer: &dyn DiscountObserver,
) -> PriceResult {
    let Some(best) = best_discount(candidates) else {
        return PriceResult {
            base_price,
            final_price: base_price,
        };
    };

    if best.tied > 1 {
        observer.tied_discounts(&TiedDiscountNotice {
            year,
            amount: best.discount.amount,
            tied: best.tied,
        });
    }

    PriceResult {
        base_price,
        final_price: base_price.sub_floor_zero(best.discount.amount),
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Prices `selection` for `year` with the standard table.
pub fn compute_price(selection: &Selection, year: Year) -> CoreResult<PriceResult> {
    PriceCalculator::new(selection, year).calculate()
}

/// Prices `selection` against a given table and observer.
pub fn compute_price_with(
    selection: &Selection,
    year: Year,
    table: &PriceTable,
    observer: &dyn DiscountObserver,
) -> CoreResult<PriceResult> {
    PriceCalculator::new(selection, year)
        .with_table(table)
        .calculate_with(observer)
}

// =============================================================================
// Unit Tests
// =============================================================================
