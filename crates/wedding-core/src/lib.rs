//! # wedding-core: Pure Pricing Logic for Wedding Quotes
//!
//! Prices a bundle of wedding photo/video services for a given year and keeps
//! the customer's selection valid as options are toggled. Everything here is
//! a pure function with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Wedding Quote Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Callers (quote-cli, UI, server)                 │   │
//! │  │     toggle option ──► transition()   show quote ──► compute     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ wedding-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌───────────┐  ┌─────────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │  │ selection │  │ calculator  │  │price_table │  │validation│  │   │
//! │  │  │ Selection │  │ PriceCalc   │  │ PriceTable │  │  rules   │  │   │
//! │  │  │ transition│  │ Discount    │  │ YearPrices │  │  checks  │  │   │
//! │  │  └───────────┘  └─────────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Service, Year, actions, PriceResult
//! - [`money`] - Integer money type
//! - [`price_table`] - Prices per year and the photo + video bundle
//! - [`calculator`] - Base price, discounts, final price
//! - [`selection`] - Selection set and its reducer
//! - [`observer`] - Advisory channel for tied discounts
//! - [`validation`] - Checks for selections built outside the reducer
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use wedding_core::{compute_price, replay, Money, Selection, Service, ServiceAction, Year};
//!
//! let selection = replay(
//!     &Selection::new(),
//!     [
//!         ServiceAction::select(Service::Photography),
//!         ServiceAction::select(Service::VideoRecording),
//!         ServiceAction::select(Service::BlurayPackage),
//!         ServiceAction::select(Service::TwoDayEvent),
//!     ],
//! );
//!
//! let quote = compute_price(&selection, Year::Y2021).unwrap();
//! assert_eq!(quote.base_price, Money::new(3000)); // 2300 bundle + 300 + 400
//! assert_eq!(quote.final_price, Money::new(3000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod observer;
pub mod price_table;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{compute_price, compute_price_with, Discount, DiscountRule, PriceCalculator};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use observer::{DiscountObserver, NoOpObserver, TiedDiscountNotice, TracingObserver};
pub use price_table::PriceTable;
pub use selection::{replay, transition, transition_raw, Selection};
pub use types::*;
