//! The known label sets of each facet category.

use std::collections::{BTreeMap, HashMap};

use isolate_domain::{AccessLevel, Location, Organism, Sample};
use isolate_store::EntityStore;

use crate::category::{CategorySet, FacetCategory};

/// Facet options per category, used to classify selected labels.
#[derive(Debug, Clone, Default)]
pub struct FacetUniverse {
    options: BTreeMap<FacetCategory, Vec<String>>,
    membership: HashMap<String, CategorySet>,
}

impl FacetUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options drawn from a snapshot's reference tables.
    ///
    /// Access levels come from the fixed enumeration; locations are
    /// provinces; organisms and samples are their type names. Each list keeps
    /// first-seen order without duplicates.
    pub fn from_store(store: &EntityStore) -> Self {
        let mut universe = Self::new();
        for level in AccessLevel::ALL {
            universe.add(FacetCategory::AccessLevel, level.label());
        }
        for location in store.rows::<Location>() {
            universe.add(FacetCategory::Location, &location.province);
        }
        for organism in store.rows::<Organism>() {
            universe.add(FacetCategory::Organism, &organism.organism_type);
        }
        for sample in store.rows::<Sample>() {
            universe.add(FacetCategory::Sample, &sample.sample_type);
        }
        universe
    }

    /// Register a label under a category. Blank labels are skipped.
    pub fn add(&mut self, category: FacetCategory, label: &str) {
        if label.trim().is_empty() {
            return;
        }
        let categories = self.membership.entry(label.to_string()).or_default();
        if categories.contains(category) {
            return;
        }
        categories.insert(category);
        self.options.entry(category).or_default().push(label.to_string());
    }

    /// Options of one category, for rendering checkboxes.
    pub fn options(&self, category: FacetCategory) -> &[String] {
        self.options.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every category the label is a member of. Empty for unknown labels.
    pub fn categories_of(&self, label: &str) -> CategorySet {
        self.membership.get(label).copied().unwrap_or_default()
    }

    pub fn contains(&self, category: FacetCategory, label: &str) -> bool {
        self.categories_of(label).contains(category)
    }
}
