//! The central isolate record.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::access::AccessLevel;
use crate::accession::AccessionNumber;
use crate::error::DomainError;
use crate::reference::EntityId;

/// Taxonomic ranks carried on an isolate, from broadest to narrowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum TaxonomicRank {
    Domain,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
}

impl TaxonomicRank {
    pub const ALL: [TaxonomicRank; 7] = [
        TaxonomicRank::Domain,
        TaxonomicRank::Phylum,
        TaxonomicRank::Class,
        TaxonomicRank::Order,
        TaxonomicRank::Family,
        TaxonomicRank::Genus,
        TaxonomicRank::Species,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TaxonomicRank::Domain => "domain",
            TaxonomicRank::Phylum => "phylum",
            TaxonomicRank::Class => "class",
            TaxonomicRank::Order => "order",
            TaxonomicRank::Family => "family",
            TaxonomicRank::Genus => "genus",
            TaxonomicRank::Species => "species",
        }
    }
}

impl fmt::Display for TaxonomicRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cataloged microorganism isolate.
///
/// Foreign keys are optional: a record may arrive before (or without) the
/// rows it points at, and consumers must degrade rather than fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct Isolate {
    pub id: EntityId,
    pub accession_number: String,
    pub genus: String,
    pub species: String,

    // Higher ranks
    pub domain: Option<String>,
    pub phylum: Option<String>,
    pub class: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,

    #[serde(deserialize_with = "lenient_access_level")]
    pub access_level: Option<AccessLevel>,

    // References
    pub organism_id: Option<EntityId>,
    pub sample_id: Option<EntityId>,
    pub host_id: Option<EntityId>,
    pub method_id: Option<EntityId>,
    pub sampling_point_id: Option<EntityId>,
    pub cave_id: Option<EntityId>,
    pub institution_id: Option<EntityId>,
    pub collection_id: Option<EntityId>,

    pub image: Option<String>,
}

impl Isolate {
    /// Create an isolate with the required identity fields.
    pub fn new(id: EntityId, accession_number: impl Into<String>, genus: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            id,
            accession_number: accession_number.into(),
            genus: genus.into(),
            species: species.into(),
            ..Self::default()
        }
    }

    /// Parse the stored accession number.
    pub fn accession(&self) -> Result<AccessionNumber, DomainError> {
        AccessionNumber::parse(&self.accession_number)
    }

    /// "Genus species", or whichever half is present.
    pub fn scientific_name(&self) -> String {
        match (self.genus.trim(), self.species.trim()) {
            ("", s) => s.to_string(),
            (g, "") => g.to_string(),
            (g, s) => format!("{} {}", g, s),
        }
    }

    /// Value of a taxonomic rank. Empty strings count as missing.
    pub fn rank(&self, rank: TaxonomicRank) -> Option<&str> {
        let value = match rank {
            TaxonomicRank::Domain => self.domain.as_deref(),
            TaxonomicRank::Phylum => self.phylum.as_deref(),
            TaxonomicRank::Class => self.class.as_deref(),
            TaxonomicRank::Order => self.order.as_deref(),
            TaxonomicRank::Family => self.family.as_deref(),
            TaxonomicRank::Genus => Some(self.genus.as_str()),
            TaxonomicRank::Species => Some(self.species.as_str()),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Unrecognized access levels decode as absent instead of failing the record.
fn lenient_access_level<'de, D>(deserializer: D) -> Result<Option<AccessLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
