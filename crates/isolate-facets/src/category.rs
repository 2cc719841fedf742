//! Facet categories and small sets of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four dimensions a user can filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetCategory {
    AccessLevel,
    Location,
    Organism,
    Sample,
}

impl FacetCategory {
    pub const ALL: [FacetCategory; 4] = [
        FacetCategory::AccessLevel,
        FacetCategory::Location,
        FacetCategory::Organism,
        FacetCategory::Sample,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FacetCategory::AccessLevel => "access_level",
            FacetCategory::Location => "location",
            FacetCategory::Organism => "organism",
            FacetCategory::Sample => "sample",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for FacetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of facet categories, stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    pub fn all() -> Self {
        FacetCategory::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, category: FacetCategory) {
        self.0 |= category.bit();
    }

    pub fn contains(&self, category: FacetCategory) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn union(self, other: CategorySet) -> CategorySet {
        CategorySet(self.0 | other.0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = FacetCategory> {
        FacetCategory::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Every k-sized subset of the four categories, in ascending mask order.
    ///
    /// k = 2 yields the 6 pairs, k = 3 the 4 triples.
    pub fn combinations(k: usize) -> Vec<CategorySet> {
        let full = CategorySet::all().0;
        (1..=full)
            .map(CategorySet)
            .filter(|set| set.len() == k)
            .collect()
    }
}

impl FromIterator<FacetCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = FacetCategory>>(iter: I) -> Self {
        let mut set = CategorySet::EMPTY;
        for category in iter {
            set.insert(category);
        }
        set
    }
}
