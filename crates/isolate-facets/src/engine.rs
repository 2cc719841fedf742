//! Facet filter evaluation.
//!
//! With k active categories, the filter walks every k-sized combination of
//! the four categories and keeps an isolate when all categories of any one
//! combination accept it. A category without selected labels never accepts,
//! so only combinations made entirely of active categories can pass.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use isolate_domain::Isolate;
use isolate_store::{EntityStore, ResolvedIsolate};

use crate::category::{CategorySet, FacetCategory};
use crate::selection::FilterSelection;
use crate::universe::FacetUniverse;

/// Selected labels partitioned by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFacets {
    labels: BTreeMap<FacetCategory, BTreeSet<String>>,
}

impl ActiveFacets {
    /// Classify each selected label by membership. Unknown labels are dropped.
    pub fn partition(selection: &FilterSelection, universe: &FacetUniverse) -> Self {
        let mut labels: BTreeMap<FacetCategory, BTreeSet<String>> = BTreeMap::new();
        for label in selection.selected_labels() {
            let categories = universe.categories_of(label);
            if categories.is_empty() {
                tracing::debug!(label, "ignoring facet label outside every category");
                continue;
            }
            for category in categories.iter() {
                labels.entry(category).or_default().insert(label.to_string());
            }
        }
        Self { labels }
    }

    pub fn categories(&self) -> CategorySet {
        self.labels.keys().copied().collect()
    }

    /// Number of categories with at least one selected label.
    pub fn arity(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self, category: FacetCategory) -> Option<&BTreeSet<String>> {
        self.labels.get(&category)
    }

    fn selects(&self, category: FacetCategory, value: Option<&str>) -> bool {
        match (self.labels.get(&category), value) {
            (Some(labels), Some(value)) => labels.contains(value),
            _ => false,
        }
    }
}

/// Evaluates facet selections against one arity-specific rule.
struct Matcher<'a> {
    active: &'a ActiveFacets,
    combinations: Vec<CategorySet>,
    /// Records without an access level pass the access category only when
    /// it is the sole active category.
    lenient_access: bool,
}

impl<'a> Matcher<'a> {
    fn new(active: &'a ActiveFacets) -> Self {
        let arity = active.arity();
        Self {
            active,
            combinations: CategorySet::combinations(arity),
            lenient_access: arity == 1,
        }
    }

    fn accepts(&self, isolate: &Isolate, resolved: Option<&ResolvedIsolate>) -> bool {
        self.combinations
            .iter()
            .any(|combo| combo.iter().all(|category| self.category_accepts(category, isolate, resolved)))
    }

    fn category_accepts(&self, category: FacetCategory, isolate: &Isolate, resolved: Option<&ResolvedIsolate>) -> bool {
        match category {
            FacetCategory::AccessLevel => match isolate.access_level {
                Some(level) => self.active.selects(category, Some(level.label())),
                None => self.lenient_access && self.active.labels(category).is_some(),
            },
            FacetCategory::Location => self.active.selects(category, resolved.and_then(|r| r.province())),
            FacetCategory::Organism => self.active.selects(category, resolved.and_then(|r| r.organism())),
            FacetCategory::Sample => self.active.selects(category, resolved.and_then(|r| r.sample())),
        }
    }
}

/// Filter isolates by a facet selection.
///
/// `resolved` must be parallel to `isolates` (as produced by
/// [`isolate_store::resolve_all`]); an isolate without a resolved entry is
/// treated as having no resolvable references. Returns the surviving
/// isolates in input order. An empty selection returns every isolate.
pub fn apply_facet_filter<'a>(
    selection: &FilterSelection,
    isolates: &'a [Isolate],
    resolved: &[ResolvedIsolate],
    universe: &FacetUniverse,
) -> Vec<&'a Isolate> {
    let active = ActiveFacets::partition(selection, universe);
    filter_with(&active, isolates, resolved)
}

fn filter_with<'a>(active: &ActiveFacets, isolates: &'a [Isolate], resolved: &[ResolvedIsolate]) -> Vec<&'a Isolate> {
    kept_positions(active, isolates, resolved)
        .into_iter()
        .map(|i| &isolates[i])
        .collect()
}

fn kept_positions(active: &ActiveFacets, isolates: &[Isolate], resolved: &[ResolvedIsolate]) -> Vec<usize> {
    if resolved.len() != isolates.len() {
        tracing::warn!(
            isolates = isolates.len(),
            resolved = resolved.len(),
            "resolved attributes are not parallel to isolates"
        );
    }

    if active.arity() == 0 {
        return (0..isolates.len()).collect();
    }

    let matcher = Matcher::new(active);
    let kept: Vec<usize> = isolates
        .iter()
        .enumerate()
        .filter(|(i, isolate)| matcher.accepts(isolate, resolved.get(*i)))
        .map(|(i, _)| i)
        .collect();

    tracing::debug!(
        arity = active.arity(),
        combinations = matcher.combinations.len(),
        input = isolates.len(),
        kept = kept.len(),
        "applied facet filter"
    );
    kept
}

/// Number of isolates carrying one facet label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub category: FacetCategory,
    pub label: String,
    pub count: usize,
}

/// A facet universe bound to one snapshot.
#[derive(Debug, Clone)]
pub struct FacetEngine {
    universe: FacetUniverse,
}

impl FacetEngine {
    pub fn new(universe: FacetUniverse) -> Self {
        Self { universe }
    }

    pub fn from_store(store: &EntityStore) -> Self {
        Self::new(FacetUniverse::from_store(store))
    }

    pub fn universe(&self) -> &FacetUniverse {
        &self.universe
    }

    pub fn partition(&self, selection: &FilterSelection) -> ActiveFacets {
        ActiveFacets::partition(selection, &self.universe)
    }

    pub fn apply<'a>(
        &self,
        selection: &FilterSelection,
        isolates: &'a [Isolate],
        resolved: &[ResolvedIsolate],
    ) -> Vec<&'a Isolate> {
        filter_with(&self.partition(selection), isolates, resolved)
    }

    /// Positions in `isolates` that survive the filter, ascending.
    ///
    /// Isolate ids are not guaranteed unique, so callers pairing the result
    /// with other parallel slices should use positions rather than ids.
    pub fn apply_positions(
        &self,
        selection: &FilterSelection,
        isolates: &[Isolate],
        resolved: &[ResolvedIsolate],
    ) -> Vec<usize> {
        kept_positions(&self.partition(selection), isolates, resolved)
    }

    /// Per-option counts over the given isolates, in option order.
    ///
    /// Options nobody carries are reported with a zero count so every
    /// checkbox has a badge.
    pub fn facet_counts(&self, isolates: &[Isolate], resolved: &[ResolvedIsolate]) -> Vec<FacetCount> {
        let mut counts = Vec::new();
        for category in FacetCategory::ALL {
            for label in self.universe.options(category) {
                let count = isolates
                    .iter()
                    .enumerate()
                    .filter(|(i, isolate)| {
                        let r = resolved.get(*i);
                        let value = match category {
                            FacetCategory::AccessLevel => isolate.access_level.map(|l| l.label()),
                            FacetCategory::Location => r.and_then(|r| r.province()),
                            FacetCategory::Organism => r.and_then(|r| r.organism()),
                            FacetCategory::Sample => r.and_then(|r| r.sample()),
                        };
                        value == Some(label.as_str())
                    })
                    .count();
                counts.push(FacetCount {
                    category,
                    label: label.clone(),
                    count,
                });
            }
        }
        counts
    }
}
