//! isolate-facets: facet selection and filtering.
//!
//! Facets are checkbox labels from four categories: access level, location
//! (province), organism type, and sample type. A label's category is found
//! by looking it up in the [`FacetUniverse`], never by its spelling.
//!
//! With k categories active, an isolate is kept when it satisfies every
//! category of at least one k-sized combination of the four categories.

pub mod category;
pub mod engine;
pub mod selection;
pub mod universe;

pub use category::*;
pub use engine::*;
pub use selection::*;
pub use universe::*;
