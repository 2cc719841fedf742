//! Join resolution never fails and reports exactly the lookups that missed.

use isolate_domain::{Cave, Isolate, Location, Organism, ReferenceKind, Sample};
use isolate_store::{resolve_all, EntityStore, StoreMutation, UNKNOWN};
use proptest::prelude::*;
use rstest::rstest;

fn store() -> EntityStore {
    EntityStore::builder()
        .insert(Organism { id: 1, organism_type: "Bacteria".into() })
        .insert(Sample { id: 1, sample_type: "Soil".into() })
        .insert(Location { id: 1, town: "Calauan".into(), province: "Laguna".into() })
        .insert(Cave { id: 1, cave_code: "A".into(), cave_name: "Cave A".into(), location_id: Some(1) })
        .insert(Cave { id: 2, cave_code: "B".into(), cave_name: "Cave B".into(), location_id: None })
        .build()
}

fn isolate(id: i64, organism_id: Option<i64>, cave_id: Option<i64>, sample_id: Option<i64>) -> Isolate {
    Isolate {
        organism_id,
        cave_id,
        sample_id,
        ..Isolate::new(id, format!("C-I-{}", id), "Bacillus", "subtilis")
    }
}

#[rstest]
#[case(Some(1), Some(1), Some(1), &[])]
#[case(None, Some(1), Some(1), &[ReferenceKind::Organism])]
#[case(Some(9), Some(1), Some(1), &[ReferenceKind::Organism])]
#[case(Some(1), Some(2), Some(1), &[ReferenceKind::Location])]
#[case(Some(1), Some(9), None, &[ReferenceKind::Sample, ReferenceKind::Cave, ReferenceKind::Location])]
fn unresolved_kinds(
    #[case] organism: Option<i64>,
    #[case] cave: Option<i64>,
    #[case] sample: Option<i64>,
    #[case] expected: &[ReferenceKind],
) {
    let store = store();
    let resolved = resolve_all(&[isolate(1, organism, cave, sample)], &store);
    for kind in [ReferenceKind::Organism, ReferenceKind::Sample, ReferenceKind::Cave, ReferenceKind::Location] {
        assert_eq!(resolved[0].is_resolved(kind), !expected.contains(&kind), "{:?}", kind);
    }
}

fn arb_fk() -> impl Strategy<Value = Option<i64>> {
    prop::option::of(1i64..=3)
}

proptest! {
    #[test]
    fn resolution_is_total_and_parallel(
        keys in prop::collection::vec((arb_fk(), arb_fk(), arb_fk()), 0..30)
    ) {
        let store = store();
        let isolates: Vec<Isolate> = keys
            .into_iter()
            .enumerate()
            .map(|(i, (o, c, s))| isolate(i as i64, o, c, s))
            .collect();

        let resolved = resolve_all(&isolates, &store);
        prop_assert_eq!(resolved.len(), isolates.len());

        for (iso, res) in isolates.iter().zip(&resolved) {
            prop_assert_eq!(res.isolate_id, iso.id);
            prop_assert_eq!(res.organism().is_some(), store.organism_of(iso).is_some());
            prop_assert_eq!(res.province().is_some(), store.location_of(iso).is_some());
            if res.organism().is_none() {
                prop_assert_eq!(res.organism_type.as_str(), UNKNOWN);
            }
        }
    }

    #[test]
    fn deleting_a_referenced_row_unresolves_it(cave_id in 1i64..=2) {
        let store = store();
        let iso = isolate(1, Some(1), Some(cave_id), Some(1));
        let next = store.apply(&[StoreMutation::Delete {
            table: isolate_store::Table::Caves,
            id: cave_id,
        }]);

        prop_assert!(resolve_all(std::slice::from_ref(&iso), &store)[0].is_resolved(ReferenceKind::Cave));
        prop_assert!(!resolve_all(std::slice::from_ref(&iso), &next)[0].is_resolved(ReferenceKind::Cave));
        prop_assert_eq!(next.generation(), store.generation() + 1);
    }
}
