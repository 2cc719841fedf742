//! Normalized reference tables referenced by isolates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Row identifier shared by every table.
pub type EntityId = i64;

/// Names each reference table an isolate can point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ReferenceKind {
    Organism,
    Sample,
    Host,
    Method,
    Location,
    Cave,
    SamplingPoint,
    Institution,
    Collection,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 9] = [
        ReferenceKind::Organism,
        ReferenceKind::Sample,
        ReferenceKind::Host,
        ReferenceKind::Method,
        ReferenceKind::Location,
        ReferenceKind::Cave,
        ReferenceKind::SamplingPoint,
        ReferenceKind::Institution,
        ReferenceKind::Collection,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReferenceKind::Organism => "organism",
            ReferenceKind::Sample => "sample",
            ReferenceKind::Host => "host",
            ReferenceKind::Method => "method",
            ReferenceKind::Location => "location",
            ReferenceKind::Cave => "cave",
            ReferenceKind::SamplingPoint => "sampling_point",
            ReferenceKind::Institution => "institution",
            ReferenceKind::Collection => "collection",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common surface of every reference table row.
pub trait ReferenceEntity {
    /// Which table the row belongs to.
    const KIND: ReferenceKind;

    fn id(&self) -> EntityId;

    /// Primary display field.
    fn label(&self) -> &str;
}

/// Organism type (e.g. Bacteria, Fungi).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct Organism {
    pub id: EntityId,
    pub organism_type: String,
}

/// Sample type (e.g. Soil, Guano).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct Sample {
    pub id: EntityId,
    pub sample_type: String,
}

/// Host organism an isolate was recovered from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct Host {
    pub id: EntityId,
    pub host_type: String,
    pub host_genus: String,
    pub host_species: String,
}

/// Analysis or identification method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct Method {
    pub id: EntityId,
    pub method_name: String,
}

/// Town and province a cave is located in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct Location {
    pub id: EntityId,
    pub town: String,
    pub province: String,
}

/// A cave; points at its Location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct Cave {
    pub id: EntityId,
    pub cave_code: String,
    pub cave_name: String,
    pub location_id: Option<EntityId>,
}

/// Sampling point within a cave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct SamplingPoint {
    pub id: EntityId,
    pub description: String,
}

/// Institution holding an isolate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct Institution {
    pub id: EntityId,
    pub institution_code: String,
    pub institution_name: String,
}

/// Culture collection an isolate is deposited in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct Collection {
    pub id: EntityId,
    pub collection_code: String,
    pub collection_name: String,
}

macro_rules! reference_entity {
    ($ty:ty, $kind:expr, $label:ident) => {
        impl ReferenceEntity for $ty {
            const KIND: ReferenceKind = $kind;

            fn id(&self) -> EntityId {
                self.id
            }

            fn label(&self) -> &str {
                &self.$label
            }
        }
    };
}

reference_entity!(Organism, ReferenceKind::Organism, organism_type);
reference_entity!(Sample, ReferenceKind::Sample, sample_type);
reference_entity!(Host, ReferenceKind::Host, host_type);
reference_entity!(Method, ReferenceKind::Method, method_name);
reference_entity!(Location, ReferenceKind::Location, province);
reference_entity!(Cave, ReferenceKind::Cave, cave_name);
reference_entity!(SamplingPoint, ReferenceKind::SamplingPoint, description);
reference_entity!(Institution, ReferenceKind::Institution, institution_name);
reference_entity!(Collection, ReferenceKind::Collection, collection_name);
