//! Arity-dependent combination of facet categories.
//!
//! Selection labels: Public (access), Laguna (location), Bacteria (organism),
//! Soil (sample). Isolates:
//! - 1 matches all four
//! - 2 matches access, location, organism (sample is Guano)
//! - 3 matches access only
//! - 4 matches nothing

mod common;

use isolate_domain::{AccessLevel, Isolate};
use isolate_facets::{apply_facet_filter, FacetUniverse, FilterSelection};
use isolate_store::resolve_all;
use rstest::rstest;

fn isolates() -> Vec<Isolate> {
    vec![
        common::isolate(1, Some(AccessLevel::Public), 1, 1, 1),
        common::isolate(2, Some(AccessLevel::Public), 1, 1, 2),
        common::isolate(3, Some(AccessLevel::Public), 2, 2, 2),
        common::isolate(4, Some(AccessLevel::Restricted), 2, 2, 2),
    ]
}

fn run(labels: &[&str]) -> Vec<i64> {
    let store = common::store();
    let isolates = isolates();
    let resolved = resolve_all(&isolates, &store);
    let universe = FacetUniverse::from_store(&store);
    let selection = FilterSelection::with_selected(labels.iter().copied());
    apply_facet_filter(&selection, &isolates, &resolved, &universe)
        .into_iter()
        .map(|i| i.id)
        .collect()
}

#[rstest]
#[case::none(&[], vec![1, 2, 3, 4])]
#[case::access(&["Public"], vec![1, 2, 3])]
#[case::location(&["Laguna"], vec![1, 2])]
#[case::sample(&["Soil"], vec![1])]
#[case::two_categories(&["Public", "Laguna"], vec![1, 2])]
#[case::two_other_categories(&["Bacteria", "Soil"], vec![1])]
#[case::three_categories(&["Public", "Laguna", "Bacteria"], vec![1, 2])]
#[case::four_categories(&["Public", "Laguna", "Bacteria", "Soil"], vec![1])]
fn tiers(#[case] labels: &[&str], #[case] expected: Vec<i64>) {
    assert_eq!(run(labels), expected);
}

#[test]
fn only_the_fourth_tier_drops_isolate_two() {
    assert!(run(&["Public", "Laguna", "Bacteria"]).contains(&2));
    assert!(!run(&["Public", "Laguna", "Bacteria", "Soil"]).contains(&2));
}

#[test]
fn second_category_excludes_single_matches() {
    // 3 passes on access alone, but not once location is also active
    assert!(run(&["Public"]).contains(&3));
    assert!(!run(&["Public", "Laguna"]).contains(&3));
}

#[test]
fn or_within_a_category_under_higher_arity() {
    assert_eq!(run(&["Public", "Restricted", "Mountain Province"]), vec![3, 4]);
    assert_eq!(run(&["Laguna", "Mountain Province", "Fungi"]), vec![3, 4]);
}

#[test]
fn both_labels_required_once_both_categories_are_active() {
    // isolate 2 has Laguna + Guano
    assert!(run(&["Laguna"]).contains(&2));
    assert!(run(&["Guano"]).contains(&2));
    assert!(run(&["Laguna", "Guano"]).contains(&2));
    assert!(!run(&["Mountain Province", "Guano"]).contains(&2));
}

#[test]
fn clearing_restores_everything() {
    let store = common::store();
    let isolates = isolates();
    let resolved = resolve_all(&isolates, &store);
    let universe = FacetUniverse::from_store(&store);

    let mut selection = FilterSelection::with_selected(["Soil", "Public"]);
    assert_eq!(apply_facet_filter(&selection, &isolates, &resolved, &universe).len(), 1);
    selection.clear();
    assert_eq!(apply_facet_filter(&selection, &isolates, &resolved, &universe).len(), 4);
}

#[test]
fn label_shared_by_two_categories_activates_both() {
    use isolate_domain::{Organism, Sample};
    use isolate_facets::{FacetCategory, FacetEngine};
    use isolate_store::EntityStore;

    let store = EntityStore::builder()
        .insert(Organism { id: 1, organism_type: "Bacteria".into() })
        .insert(Organism { id: 2, organism_type: "Mixed".into() })
        .insert(Sample { id: 1, sample_type: "Soil".into() })
        .insert(Sample { id: 2, sample_type: "Mixed".into() })
        .build();
    let isolates = vec![
        common::isolate(1, Some(AccessLevel::Public), 1, 2, 2),
        common::isolate(2, Some(AccessLevel::Public), 1, 2, 1),
        common::isolate(3, Some(AccessLevel::Public), 1, 1, 2),
    ];
    let resolved = resolve_all(&isolates, &store);
    let engine = FacetEngine::from_store(&store);
    let selection = FilterSelection::with_selected(["Mixed"]);

    let active = engine.partition(&selection);
    assert_eq!(active.arity(), 2);
    assert!(active.categories().contains(FacetCategory::Organism));
    assert!(active.categories().contains(FacetCategory::Sample));

    let kept: Vec<i64> = engine.apply(&selection, &isolates, &resolved).into_iter().map(|i| i.id).collect();
    assert_eq!(kept, vec![1]);
}
