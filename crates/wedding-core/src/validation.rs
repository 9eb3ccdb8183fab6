//! # Validation Module
//!
//! Checks for input that did not come through the selection reducer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Selections Come From                         │
//! │                                                                         │
//! │  Path 1: Reducer (transition / replay)                                 │
//! │  └── Always consistent. No validation needed.                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Path 2: Raw list (JSON request, CLI arguments)                        │
//! │  ├── Deserialization checks names                                      │
//! │  └── THIS MODULE: add-on prerequisites, supported years                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  PriceCalculator (trusts its input)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wedding_core::validation::{validate_selection, validate_year};
//! use wedding_core::{Selection, Service};
//!
//! let selection = Selection::from([Service::VideoRecording, Service::BlurayPackage]);
//! assert!(validate_selection(&selection).is_ok());
//! assert!(validate_year(2021).is_ok());
//! ```

use crate::error::ValidationError;
use crate::selection::Selection;
use crate::types::{Service, Year};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the add-on dependencies of a selection.
///
/// ## Rules
/// - BlurayPackage requires VideoRecording
/// - TwoDayEvent requires Photography or VideoRecording
///
/// Reports the first broken rule, Bluray first.
pub fn validate_selection(selection: &Selection) -> ValidationResult<()> {
    if selection.contains(Service::BlurayPackage) && !selection.contains(Service::VideoRecording) {
        return Err(ValidationError::MissingPrerequisite {
            service: Service::BlurayPackage,
            requires: Service::VideoRecording.to_string(),
        });
    }

    if selection.contains(Service::TwoDayEvent) && !selection.has_photo_or_video() {
        return Err(ValidationError::MissingPrerequisite {
            service: Service::TwoDayEvent,
            requires: format!("{} or {}", Service::Photography, Service::VideoRecording),
        });
    }

    Ok(())
}

/// Validates a calendar year against the supported pricing years.
///
/// ## Example
/// ```rust
/// use wedding_core::validation::validate_year;
/// use wedding_core::Year;
///
/// assert_eq!(validate_year(2022), Ok(Year::Y2022));
/// assert!(validate_year(2019).is_err());
/// ```
pub fn validate_year(year: u16) -> ValidationResult<Year> {
    Year::try_from(year).map_err(|_| ValidationError::NotAllowed {
        field: "year".to_string(),
        allowed: Year::ALL.iter().map(|y| y.to_string()).collect(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
