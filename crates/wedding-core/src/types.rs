//! # Domain Types
//!
//! Core domain types used throughout the quote engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Service      │   │      Year       │   │  ServiceAction  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Photography    │   │  2020           │   │  kind           │       │
//! │  │  VideoRecording │   │  2021           │   │  service        │       │
//! │  │  BlurayPackage  │   │  2022 (LATEST)  │   └─────────────────┘       │
//! │  │  TwoDayEvent    │   └─────────────────┘                              │
//! │  │  WeddingSession │                         ┌─────────────────┐       │
//! │  └─────────────────┘   ┌─────────────────┐   │   PriceResult   │       │
//! │                        │   ActionKind    │   │  ─────────────  │       │
//! │                        │  Select         │   │  base_price     │       │
//! │                        │  Deselect       │   │  final_price    │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both `Service` and `Year` are closed sets. Adding a year means adding a
//! variant here and a row in the price table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Service
// =============================================================================

/// A bookable wedding service.
///
/// ## Dependencies Between Services
/// ```text
/// Photography ─────┐
///                  ├──► TwoDayEvent     (needs either)
/// VideoRecording ──┤
///                  └──► BlurayPackage   (needs VideoRecording)
///
/// WeddingSession        (standalone, discounted with photo/video)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Service {
    Photography,
    VideoRecording,
    BlurayPackage,
    TwoDayEvent,
    WeddingSession,
}

impl Service {
    /// Every service, in declaration order.
    pub const ALL: [Service; 5] = [
        Service::Photography,
        Service::VideoRecording,
        Service::BlurayPackage,
        Service::TwoDayEvent,
        Service::WeddingSession,
    ];

    /// Returns the canonical name (`"VideoRecording"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Service::Photography => "Photography",
            Service::VideoRecording => "VideoRecording",
            Service::BlurayPackage => "BlurayPackage",
            Service::TwoDayEvent => "TwoDayEvent",
            Service::WeddingSession => "WeddingSession",
        }
    }

    /// Returns true for the two base services add-ons depend on.
    #[inline]
    pub const fn is_photo_or_video(&self) -> bool {
        matches!(self, Service::Photography | Service::VideoRecording)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `VideoRecording`, `video-recording`, `video_recording`, etc.
impl FromStr for Service {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        Service::ALL
            .into_iter()
            .find(|service| service.as_str().to_lowercase() == normalized)
            .ok_or_else(|| CoreError::UnknownService {
                name: s.to_string(),
            })
    }
}

// =============================================================================
// Year
// =============================================================================

/// A supported pricing year.
///
/// Serialized as a plain number (`2022`). Any other number fails to
/// deserialize with [`CoreError::UnsupportedYear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Year {
    Y2020,
    Y2021,
    Y2022,
}

impl Year {
    /// Every supported year, oldest first.
    pub const ALL: [Year; 3] = [Year::Y2020, Year::Y2021, Year::Y2022];

    /// The most recent pricing year. Drives the free wedding session rule.
    pub const LATEST: Year = Year::Y2022;

    /// Returns the calendar year.
    pub const fn as_u16(&self) -> u16 {
        match self {
            Year::Y2020 => 2020,
            Year::Y2021 => 2021,
            Year::Y2022 => 2022,
        }
    }

    #[inline]
    pub fn is_latest(&self) -> bool {
        *self == Year::LATEST
    }
}

impl TryFrom<u16> for Year {
    type Error = CoreError;

    fn try_from(year: u16) -> CoreResult<Self> {
        Year::ALL
            .into_iter()
            .find(|y| y.as_u16() == year)
            .ok_or(CoreError::UnsupportedYear { year })
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.as_u16()
    }
}

impl Default for Year {
    fn default() -> Self {
        Year::LATEST
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

// =============================================================================
// Selection Actions
// =============================================================================

/// What a [`ServiceAction`] does to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ActionKind {
    Select,
    Deselect,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Select => f.write_str("Select"),
            ActionKind::Deselect => f.write_str("Deselect"),
        }
    }
}

/// Parses `Select` / `Deselect` case-insensitively.
///
/// ## Example
/// ```rust
/// use wedding_core::types::ActionKind;
/// use wedding_core::CoreError;
///
/// assert_eq!("select".parse::<ActionKind>(), Ok(ActionKind::Select));
/// assert!(matches!(
///     "toggle".parse::<ActionKind>(),
///     Err(CoreError::InvalidAction { .. })
/// ));
/// ```
impl FromStr for ActionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "select" => Ok(ActionKind::Select),
            "deselect" => Ok(ActionKind::Deselect),
            _ => Err(CoreError::InvalidAction {
                kind: s.to_string(),
            }),
        }
    }
}

/// A single select/deselect step fed to the selection reducer.
///
/// Serialized as `{"type": "Select", "service": "Photography"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub service: Service,
}

impl ServiceAction {
    pub const fn new(kind: ActionKind, service: Service) -> Self {
        ServiceAction { kind, service }
    }

    pub const fn select(service: Service) -> Self {
        ServiceAction::new(ActionKind::Select, service)
    }

    pub const fn deselect(service: Service) -> Self {
        ServiceAction::new(ActionKind::Deselect, service)
    }
}

/// Parses `<kind>:<service>`, e.g. `select:photography`.
impl FromStr for ServiceAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, service) = s.split_once(':').ok_or_else(|| CoreError::InvalidAction {
            kind: s.to_string(),
        })?;

        Ok(ServiceAction::new(kind.parse()?, service.parse()?))
    }
}

// =============================================================================
// Price Result
// =============================================================================

/// The outcome of pricing a selection.
///
/// ## Invariants
/// - `final_price <= base_price`
/// - both are `>= 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceResult {
    /// Sum of all selected services before any discount.
    pub base_price: Money,

    /// Base price minus the single largest discount.
    pub final_price: Money,
}

impl PriceResult {
    /// Amount taken off the base price.
    #[inline]
    pub fn discount(&self) -> Money {
        self.base_price - self.final_price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_parse_accepts_common_spellings() {
        assert_eq!("VideoRecording".parse::<Service>(), Ok(Service::VideoRecording));
        assert_eq!("video-recording".parse::<Service>(), Ok(Service::VideoRecording));
        assert_eq!("video_recording".parse::<Service>(), Ok(Service::VideoRecording));
        assert_eq!(" bluraypackage ".parse::<Service>(), Ok(Service::BlurayPackage));
        assert!(matches!(
            "drone".parse::<Service>(),
            Err(CoreError::UnknownService { .. })
        ));
    }

    #[test]
    fn test_service_serde_uses_variant_names() {
        let json = serde_json::to_string(&Service::TwoDayEvent).unwrap();
        assert_eq!(json, "\"TwoDayEvent\"");
    }

    #[test]
    fn test_year_conversion() {
        assert_eq!(Year::try_from(2021), Ok(Year::Y2021));
        assert_eq!(
            Year::try_from(2023),
            Err(CoreError::UnsupportedYear { year: 2023 })
        );
        assert_eq!(u16::from(Year::Y2020), 2020);
        assert!(Year::Y2022.is_latest());
        assert!(!Year::Y2021.is_latest());
    }

    #[test]
    fn test_year_serde_round_trips_as_number() {
        assert_eq!(serde_json::to_string(&Year::Y2022).unwrap(), "2022");
        let year: Year = serde_json::from_str("2020").unwrap();
        assert_eq!(year, Year::Y2020);
        assert!(serde_json::from_str::<Year>("1999").is_err());
    }

    #[test]
    fn test_action_parse() {
        let action: ServiceAction = "select:two-day-event".parse().unwrap();
        assert_eq!(action, ServiceAction::select(Service::TwoDayEvent));

        let action: ServiceAction = "Deselect:Photography".parse().unwrap();
        assert_eq!(action, ServiceAction::deselect(Service::Photography));

        assert_eq!(
            "toggle:photography".parse::<ServiceAction>(),
            Err(CoreError::InvalidAction {
                kind: "toggle".to_string()
            })
        );
        assert!(matches!(
            "photography".parse::<ServiceAction>(),
            Err(CoreError::InvalidAction { .. })
        ));
    }

    #[test]
    fn test_action_json_shape() {
        let action = ServiceAction::select(Service::BlurayPackage);
        let json = serde_json::to_value(action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "Select", "service": "BlurayPackage" })
        );

        // Unknown kinds are rejected at deserialization.
        let bad = serde_json::from_str::<ServiceAction>(
            r#"{ "type": "Toggle", "service": "Photography" }"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_price_result_json_is_camel_case() {
        let result = PriceResult {
            base_price: Money::new(2500),
            final_price: Money::new(1900),
        };
        assert_eq!(result.discount(), Money::new(600));
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            serde_json::json!({ "basePrice": 2500, "finalPrice": 1900 })
        );
    }
}
