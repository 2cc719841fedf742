//! isolate-store: in-memory entity snapshots and join resolution.
//!
//! An [`EntityStore`] is an immutable snapshot of the reference tables and
//! the isolate list. Id indices are memoized per snapshot; applying a
//! mutation produces a new snapshot with fresh indices.
//!
//! The join resolver flattens an isolate's foreign keys into display fields,
//! substituting [`UNKNOWN`] for anything that does not resolve.

pub mod error;
pub mod index;
pub mod join;
pub mod mutation;
pub mod store;

pub use error::*;
pub use index::*;
pub use join::*;
pub use mutation::*;
pub use store::*;
