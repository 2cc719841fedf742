//! Property tests for the facet filter.

mod common;

use isolate_domain::{AccessLevel, Isolate};
use isolate_facets::{apply_facet_filter, FacetUniverse, FilterSelection};
use isolate_store::resolve_all;
use proptest::prelude::*;

const LABELS: &[&str] = &[
    "Public",
    "Limited",
    "Restricted",
    "Laguna",
    "Mountain Province",
    "Bacteria",
    "Fungi",
    "Soil",
    "Guano",
    "Nowhere",
];

fn arb_access() -> impl Strategy<Value = Option<AccessLevel>> {
    prop_oneof![
        Just(None),
        Just(Some(AccessLevel::Public)),
        Just(Some(AccessLevel::Limited)),
        Just(Some(AccessLevel::Restricted)),
    ]
}

// Reference ids 1..=3, where 3 dangles.
fn arb_isolates() -> impl Strategy<Value = Vec<Isolate>> {
    prop::collection::vec((arb_access(), 1i64..=3, 1i64..=3, 1i64..=3), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (access, cave, organism, sample))| common::isolate(i as i64 + 1, access, cave, organism, sample))
            .collect()
    })
}

fn arb_labels() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(LABELS.to_vec(), 0..LABELS.len())
}

fn filtered_ids(labels: &[&str], isolates: &[Isolate]) -> Vec<i64> {
    let store = common::store();
    let resolved = resolve_all(isolates, &store);
    let universe = FacetUniverse::from_store(&store);
    let selection = FilterSelection::with_selected(labels.iter().copied());
    apply_facet_filter(&selection, isolates, &resolved, &universe)
        .into_iter()
        .map(|i| i.id)
        .collect()
}

proptest! {
    #[test]
    fn empty_selection_returns_input(isolates in arb_isolates()) {
        let all: Vec<i64> = isolates.iter().map(|i| i.id).collect();
        prop_assert_eq!(filtered_ids(&[], &isolates), all);
    }

    #[test]
    fn selection_order_does_not_matter(isolates in arb_isolates(), labels in arb_labels()) {
        let mut reversed = labels.clone();
        reversed.reverse();
        prop_assert_eq!(filtered_ids(&labels, &isolates), filtered_ids(&reversed, &isolates));
    }

    #[test]
    fn filtering_is_idempotent(isolates in arb_isolates(), labels in arb_labels()) {
        let once = filtered_ids(&labels, &isolates);
        let survivors: Vec<Isolate> = isolates.iter().filter(|i| once.contains(&i.id)).cloned().collect();
        prop_assert_eq!(filtered_ids(&labels, &survivors), once);
    }

    #[test]
    fn result_is_an_ordered_subset(isolates in arb_isolates(), labels in arb_labels()) {
        let kept = filtered_ids(&labels, &isolates);
        let mut input = isolates.iter().map(|i| i.id);
        for id in &kept {
            prop_assert!(input.any(|x| x == *id));
        }
    }
}
