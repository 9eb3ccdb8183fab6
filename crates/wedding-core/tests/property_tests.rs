//! Property-Based Tests for wedding-core
//!
//! These tests verify:
//! - Reducer invariants over arbitrary action sequences
//! - Select idempotence and the precondition/cascade rules
//! - Price ordering (final <= base) for every reachable selection

use proptest::prelude::*;

use wedding_core::{
    compute_price, replay, transition, ActionKind, Selection, Service, ServiceAction, Year,
};

// =============================================================================
// Strategies
// =============================================================================

fn service_strategy() -> impl Strategy<Value = Service> {
    prop_oneof![
        Just(Service::Photography),
        Just(Service::VideoRecording),
        Just(Service::BlurayPackage),
        Just(Service::TwoDayEvent),
        Just(Service::WeddingSession),
    ]
}

fn year_strategy() -> impl Strategy<Value = Year> {
    prop_oneof![Just(Year::Y2020), Just(Year::Y2021), Just(Year::Y2022)]
}

fn action_strategy() -> impl Strategy<Value = ServiceAction> {
    (
        prop_oneof![Just(ActionKind::Select), Just(ActionKind::Deselect)],
        service_strategy(),
    )
        .prop_map(|(kind, service)| ServiceAction::new(kind, service))
}

/// Selections reachable from the empty set through the reducer.
fn reachable_selection() -> impl Strategy<Value = Selection> {
    prop::collection::vec(action_strategy(), 0..24)
        .prop_map(|actions| replay(&Selection::new(), actions))
}

/// Any subset of services, consistent or not.
fn arbitrary_selection() -> impl Strategy<Value = Selection> {
    prop::collection::vec(service_strategy(), 0..6)
        .prop_map(|services| services.into_iter().collect())
}

// =============================================================================
// Reducer Properties
// =============================================================================

proptest! {
    /// Every reachable state satisfies the add-on invariant.
    #[test]
    fn reachable_selections_are_consistent(selection in reachable_selection()) {
        prop_assert!(selection.is_consistent());
    }

    /// Applying the same Select twice equals applying it once.
    #[test]
    fn select_is_idempotent(selection in arbitrary_selection(), service in service_strategy()) {
        let action = ServiceAction::select(service);
        let once = transition(&selection, action);
        let twice = transition(&once, action);
        prop_assert_eq!(once, twice);
    }

    /// Selecting Bluray without video never changes anything.
    #[test]
    fn bluray_requires_video(selection in arbitrary_selection()) {
        prop_assume!(!selection.contains(Service::VideoRecording));
        let next = transition(&selection, ServiceAction::select(Service::BlurayPackage));
        prop_assert_eq!(next, selection);
    }

    /// Removing the only photo/video service also removes the add-ons.
    #[test]
    fn deselecting_last_base_cascades(selection in reachable_selection()) {
        let bases: Vec<Service> = selection.iter().filter(|s| s.is_photo_or_video()).collect();
        prop_assume!(bases.len() == 1);

        let next = transition(&selection, ServiceAction::deselect(bases[0]));
        prop_assert!(!next.has_photo_or_video());
        prop_assert!(!next.contains(Service::BlurayPackage));
        prop_assert!(!next.contains(Service::TwoDayEvent));
    }

    /// Transitions never touch their input.
    #[test]
    fn transition_does_not_mutate_input(
        selection in arbitrary_selection(),
        action in action_strategy(),
    ) {
        let before = selection.clone();
        let _ = transition(&selection, action);
        prop_assert_eq!(selection, before);
    }
}

// =============================================================================
// Pricing Properties
// =============================================================================

proptest! {
    #[test]
    fn final_price_at_most_base_price(
        selection in reachable_selection(),
        year in year_strategy(),
    ) {
        let result = compute_price(&selection, year).unwrap();
        prop_assert!(result.final_price <= result.base_price);
        prop_assert!(result.final_price.amount() >= 0);
    }

    #[test]
    fn no_discount_without_wedding_session(
        selection in arbitrary_selection(),
        year in year_strategy(),
    ) {
        prop_assume!(!selection.contains(Service::WeddingSession));
        let result = compute_price(&selection, year).unwrap();
        prop_assert_eq!(result.final_price, result.base_price);
    }

    /// Same input, same output.
    #[test]
    fn pricing_is_deterministic(selection in arbitrary_selection(), year in year_strategy()) {
        prop_assert_eq!(
            compute_price(&selection, year).unwrap(),
            compute_price(&selection, year).unwrap()
        );
    }
}
