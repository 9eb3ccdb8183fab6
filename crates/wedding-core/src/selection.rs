//! # Selection State
//!
//! The set of services a customer has picked, and the reducer that moves it
//! from one valid state to the next.
//!
//! ## Transition Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Reducer                                    │
//! │                                                                         │
//! │  Action                      Precondition / Effect                      │
//! │  ──────                      ─────────────────────                      │
//! │                                                                         │
//! │  Select(BlurayPackage) ────► needs VideoRecording, else no-op           │
//! │                                                                         │
//! │  Select(TwoDayEvent) ──────► needs Photography or VideoRecording,       │
//! │                              else no-op                                 │
//! │                                                                         │
//! │  Select(other) ────────────► insert                                     │
//! │                                                                         │
//! │  Deselect(Photo | Video) ──► remove; if neither left, also remove       │
//! │                              BlurayPackage and TwoDayEvent              │
//! │                                                                         │
//! │  Deselect(Video) ──────────► also removes BlurayPackage, even while     │
//! │                              Photography stays                          │
//! │                                                                         │
//! │  Deselect(other) ──────────► remove                                     │
//! │                                                                         │
//! │  NOTE: Every transition returns a NEW selection. The input is never     │
//! │        mutated.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! Every selection reachable from the empty set through [`transition`]
//! satisfies:
//! - `BlurayPackage ∈ s ⇒ VideoRecording ∈ s`
//! - `TwoDayEvent ∈ s ⇒ Photography ∈ s ∨ VideoRecording ∈ s`
//!
//! The reducer is the only place these are enforced. The price calculator
//! trusts them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::types::{ActionKind, Service, ServiceAction};

// =============================================================================
// Selection
// =============================================================================

/// A set of selected services.
///
/// Backed by a `BTreeSet` so membership has set semantics (no duplicates,
/// insertion order irrelevant) and iteration order is stable. Serializes as a
/// JSON array: `["Photography","WeddingSession"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Selection(BTreeSet<Service>);

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Selection(BTreeSet::new())
    }

    #[inline]
    pub fn contains(&self, service: Service) -> bool {
        self.0.contains(&service)
    }

    /// Returns true if Photography or VideoRecording is selected.
    #[inline]
    pub fn has_photo_or_video(&self) -> bool {
        self.contains(Service::Photography) || self.contains(Service::VideoRecording)
    }

    /// Returns true if both Photography and VideoRecording are selected.
    #[inline]
    pub fn has_bundle(&self) -> bool {
        self.contains(Service::Photography) && self.contains(Service::VideoRecording)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates selected services in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Service> + '_ {
        self.0.iter().copied()
    }

    /// Checks the add-on invariant without building an error.
    ///
    /// See [`validate_selection`](crate::validation::validate_selection) for
    /// the reporting form.
    pub fn is_consistent(&self) -> bool {
        let bluray_ok =
            !self.contains(Service::BlurayPackage) || self.contains(Service::VideoRecording);
        let two_day_ok = !self.contains(Service::TwoDayEvent) || self.has_photo_or_video();
        bluray_ok && two_day_ok
    }

    fn with(&self, service: Service) -> Selection {
        let mut next = self.0.clone();
        next.insert(service);
        Selection(next)
    }

    fn without(&self, services: &[Service]) -> Selection {
        let mut next = self.0.clone();
        for service in services {
            next.remove(service);
        }
        Selection(next)
    }
}

impl FromIterator<Service> for Selection {
    fn from_iter<I: IntoIterator<Item = Service>>(iter: I) -> Self {
        Selection(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Service; N]> for Selection {
    fn from(services: [Service; N]) -> Self {
        services.into_iter().collect()
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Returns the selection that results from applying `action` to `current`.
///
/// Rejected selects return a copy of `current` unchanged; they are not
/// errors.
///
/// ## Example
/// ```rust
/// use wedding_core::selection::{transition, Selection};
/// use wedding_core::{Service, ServiceAction};
///
/// let empty = Selection::new();
///
/// // Bluray needs video first
/// let still_empty = transition(&empty, ServiceAction::select(Service::BlurayPackage));
/// assert!(still_empty.is_empty());
///
/// let with_video = transition(&empty, ServiceAction::select(Service::VideoRecording));
/// let with_bluray = transition(&with_video, ServiceAction::select(Service::BlurayPackage));
/// assert!(with_bluray.contains(Service::BlurayPackage));
///
/// // Removing video cascades
/// let cleared = transition(&with_bluray, ServiceAction::deselect(Service::VideoRecording));
/// assert!(cleared.is_empty());
/// ```
pub fn transition(current: &Selection, action: ServiceAction) -> Selection {
    let ServiceAction { kind, service } = action;

    match kind {
        ActionKind::Select => {
            let allowed = match service {
                Service::BlurayPackage => current.contains(Service::VideoRecording),
                Service::TwoDayEvent => current.has_photo_or_video(),
                _ => true,
            };

            if !allowed {
                debug!(service = %service, "Select rejected, prerequisite not selected");
                return current.clone();
            }

            current.with(service)
        }
        ActionKind::Deselect => {
            let mut next = current.without(&[service]);

            if service == Service::VideoRecording && next.contains(Service::BlurayPackage) {
                debug!("VideoRecording removed, dropping BlurayPackage");
                next = next.without(&[Service::BlurayPackage]);
            }

            if service.is_photo_or_video() && !next.has_photo_or_video() {
                debug!(service = %service, "Last photo/video service removed, dropping add-ons");
                next = next.without(&[Service::BlurayPackage, Service::TwoDayEvent]);
            }

            next
        }
    }
}

/// Like [`transition`], with the action kind given as text.
///
/// ## Errors
/// [`CoreError::InvalidAction`](crate::CoreError::InvalidAction) when `kind`
/// is neither `Select` nor `Deselect`. No selection is produced in that case.
pub fn transition_raw(current: &Selection, kind: &str, service: Service) -> CoreResult<Selection> {
    let kind: ActionKind = kind.parse()?;
    Ok(transition(current, ServiceAction::new(kind, service)))
}

/// Folds a sequence of actions over `start`.
pub fn replay<I>(start: &Selection, actions: I) -> Selection
where
    I: IntoIterator<Item = ServiceAction>,
{
    actions
        .into_iter()
        .fold(start.clone(), |selection, action| transition(&selection, action))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    use Service::*;

    #[test]
    fn test_select_adds_plain_services() {
        let s = transition(&Selection::new(), ServiceAction::select(Photography));
        assert_eq!(s, Selection::from([Photography]));

        let s = transition(&s, ServiceAction::select(WeddingSession));
        assert_eq!(s, Selection::from([Photography, WeddingSession]));
    }

    #[test]
    fn test_select_is_idempotent() {
        let once = transition(&Selection::new(), ServiceAction::select(VideoRecording));
        let twice = transition(&once, ServiceAction::select(VideoRecording));
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_bluray_requires_video() {
        let photo_only = Selection::from([Photography]);
        let s = transition(&photo_only, ServiceAction::select(BlurayPackage));
        assert_eq!(s, photo_only);

        let video = Selection::from([VideoRecording]);
        let s = transition(&video, ServiceAction::select(BlurayPackage));
        assert_eq!(s, Selection::from([VideoRecording, BlurayPackage]));
    }

    #[test]
    fn test_two_day_event_requires_photo_or_video() {
        let s = transition(&Selection::new(), ServiceAction::select(TwoDayEvent));
        assert!(s.is_empty());

        let s = transition(&Selection::from([WeddingSession]), ServiceAction::select(TwoDayEvent));
        assert_eq!(s, Selection::from([WeddingSession]));

        let s = transition(&Selection::from([Photography]), ServiceAction::select(TwoDayEvent));
        assert!(s.contains(TwoDayEvent));

        let s = transition(&Selection::from([VideoRecording]), ServiceAction::select(TwoDayEvent));
        assert!(s.contains(TwoDayEvent));
    }

    #[test]
    fn test_deselect_video_cascades_when_no_base_left() {
        let s = Selection::from([VideoRecording, BlurayPackage, TwoDayEvent, WeddingSession]);
        let next = transition(&s, ServiceAction::deselect(VideoRecording));
        assert_eq!(next, Selection::from([WeddingSession]));
    }

    #[test]
    fn test_deselect_keeps_add_ons_while_a_base_remains() {
        let s = Selection::from([Photography, VideoRecording, TwoDayEvent]);
        let next = transition(&s, ServiceAction::deselect(Photography));
        assert_eq!(next, Selection::from([VideoRecording, TwoDayEvent]));
    }

    #[test]
    fn test_deselect_video_drops_bluray_even_with_photo() {
        let s = Selection::from([Photography, VideoRecording, BlurayPackage]);
        let next = transition(&s, ServiceAction::deselect(VideoRecording));
        assert_eq!(next, Selection::from([Photography]));

        // TwoDayEvent is still backed by Photography
        let s = Selection::from([Photography, VideoRecording, BlurayPackage, TwoDayEvent]);
        let next = transition(&s, ServiceAction::deselect(VideoRecording));
        assert_eq!(next, Selection::from([Photography, TwoDayEvent]));
        assert!(next.is_consistent());
    }

    #[test]
    fn test_deselect_other_does_not_cascade() {
        let s = Selection::from([Photography, TwoDayEvent, WeddingSession]);
        let next = transition(&s, ServiceAction::deselect(WeddingSession));
        assert_eq!(next, Selection::from([Photography, TwoDayEvent]));

        let next = transition(&s, ServiceAction::deselect(TwoDayEvent));
        assert_eq!(next, Selection::from([Photography, WeddingSession]));
    }

    #[test]
    fn test_deselect_absent_service_is_noop() {
        let s = Selection::from([WeddingSession]);
        assert_eq!(transition(&s, ServiceAction::deselect(BlurayPackage)), s);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let s = Selection::from([Photography, TwoDayEvent]);
        let before = s.clone();
        let _ = transition(&s, ServiceAction::deselect(Photography));
        let _ = transition(&s, ServiceAction::select(VideoRecording));
        assert_eq!(s, before);
    }

    #[test]
    fn test_transition_raw() {
        let s = transition_raw(&Selection::new(), "Select", Photography).unwrap();
        assert_eq!(s, Selection::from([Photography]));

        let err = transition_raw(&s, "Toggle", Photography).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidAction {
                kind: "Toggle".to_string()
            }
        );
    }

    #[test]
    fn test_replay() {
        let s = replay(
            &Selection::new(),
            [
                ServiceAction::select(BlurayPackage),
                ServiceAction::select(VideoRecording),
                ServiceAction::select(BlurayPackage),
                ServiceAction::select(Photography),
            ],
        );
        assert_eq!(s, Selection::from([Photography, VideoRecording, BlurayPackage]));
        assert!(s.is_consistent());
    }

    #[test]
    fn test_is_consistent() {
        assert!(Selection::new().is_consistent());
        assert!(Selection::from([VideoRecording, BlurayPackage]).is_consistent());
        assert!(!Selection::from([Photography, BlurayPackage]).is_consistent());
        assert!(!Selection::from([TwoDayEvent, WeddingSession]).is_consistent());
    }

    #[test]
    fn test_serializes_as_array() {
        let s = Selection::from([WeddingSession, Photography]);
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"["Photography","WeddingSession"]"#
        );

        let parsed: Selection =
            serde_json::from_str(r#"["Photography","Photography","VideoRecording"]"#).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
