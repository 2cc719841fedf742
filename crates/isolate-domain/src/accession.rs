//! Accession numbers of the form `{CollectionCode}-{InstitutionCode}-{IsolateCode}`.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::reference::{Collection, Institution};

lazy_static! {
    /// Collection and institution codes never contain a dash; the isolate code may.
    static ref ACCESSION_RE: Regex =
        Regex::new(r"^([A-Za-z0-9]+)-([A-Za-z0-9]+)-([A-Za-z0-9][A-Za-z0-9-]*)$").unwrap();
}

/// A parsed accession number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct AccessionNumber {
    pub collection_code: String,
    pub institution_code: String,
    pub isolate_code: String,
}

impl AccessionNumber {
    /// Parse an accession number from its canonical text form.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        let caps = ACCESSION_RE.captures(trimmed).ok_or_else(|| DomainError::MalformedAccession {
            value: value.to_string(),
            reason: "expected {collection}-{institution}-{isolate}".to_string(),
        })?;

        Ok(Self {
            collection_code: caps[1].to_string(),
            institution_code: caps[2].to_string(),
            isolate_code: caps[3].to_string(),
        })
    }

    /// Compose an accession number from the owning collection and institution.
    pub fn compose(
        collection: &Collection,
        institution: &Institution,
        isolate_code: &str,
    ) -> Result<Self, DomainError> {
        let candidate = format!(
            "{}-{}-{}",
            collection.collection_code.trim(),
            institution.institution_code.trim(),
            isolate_code.trim()
        );
        Self::parse(&candidate)
    }

    /// Whether a string is a well-formed accession number.
    pub fn is_valid(value: &str) -> bool {
        ACCESSION_RE.is_match(value.trim())
    }
}

impl fmt::Display for AccessionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.collection_code, self.institution_code, self.isolate_code)
    }
}
