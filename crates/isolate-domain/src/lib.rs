//! Domain types for the isolate catalog
//!
//! This crate provides the canonical records the catalog engines operate on:
//! - Isolate: a cataloged microorganism sample with taxonomy and provenance
//! - Reference tables: Organism, Sample, Host, Method, Location, Cave,
//!   SamplingPoint, Institution, Collection
//! - AccessLevel: visibility tier of an isolate
//! - AccessionNumber: `{Collection}-{Institution}-{Isolate}` identifiers

pub mod access;
pub mod accession;
pub mod error;
pub mod isolate;
pub mod reference;

pub use access::*;
pub use accession::*;
pub use error::*;
pub use isolate::*;
pub use reference::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
