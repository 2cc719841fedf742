//! isolate-taxonomy: nested taxonomy trees from flat isolate rows.
//!
//! The tree runs organism type → domain → phylum → class → order → family →
//! genus → species, with one accession leaf per isolate.

pub mod builder;
pub mod node;

pub use builder::*;
pub use node::*;
