//! # Error Types
//!
//! Domain-specific error types for wedding-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  wedding-core errors (this file)                                       │
//! │  ├── CoreError        - Price lookups, actions, years, services        │
//! │  └── ValidationError  - Selection / input validation failures          │
//! │                                                                         │
//! │  quote-cli errors (app)                                                │
//! │  └── QuoteError       - Config, I/O, wraps CoreError                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → QuoteError → exit code            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (year, service, action kind)
//! 3. Errors are enum variants, never String
//! 4. A failed operation never produces a partial result

use thiserror::Error;

use crate::money::Money;
use crate::types::{Service, Year};

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing and selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The price table has no entry for this service in this year.
    ///
    /// ## When This Occurs
    /// Never with the standard table, which covers every supported year and
    /// service. Only a hand-built, incomplete [`PriceTable`] can trigger it.
    ///
    /// [`PriceTable`]: crate::price_table::PriceTable
    #[error("No price for {service} in {year}")]
    ServicePriceNotFound { year: Year, service: Service },

    /// The price table has no photo + video bundle price for this year.
    #[error("No bundle price for {year}")]
    BundlePriceNotFound { year: Year },

    /// A price table entry below zero. `item` is a service name or `bundle`.
    #[error("Negative price for {item} in {year}: {amount}")]
    NegativePrice {
        year: Year,
        item: String,
        amount: Money,
    },

    /// A selection action kind other than `Select` / `Deselect`.
    ///
    /// ## When This Occurs
    /// Only at the text boundary (CLI arguments, untyped requests). The typed
    /// [`ActionKind`](crate::types::ActionKind) cannot express it. Always a
    /// caller bug, never recovered.
    #[error("Unhandled action type: {kind}")]
    InvalidAction { kind: String },

    /// A pricing year outside the supported set.
    #[error("Unsupported pricing year: {year}")]
    UnsupportedYear { year: u16 },

    /// A service name that does not match any known service.
    #[error("Unknown service: {name}")]
    UnknownService { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when a selection or year arrives from outside the reducer
/// (deserialized request, CLI input) and breaks a business rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An add-on is present without the service it depends on.
    #[error("{service} requires {requires}")]
    MissingPrerequisite { service: Service, requires: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
