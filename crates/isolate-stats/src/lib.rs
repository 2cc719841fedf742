//! isolate-stats - Count series for statistical display
//!
//! Four independent series over an isolate collection:
//!
//! - **Province**: isolate → cave → location
//! - **Cave**: tagged with the cave's province for grouping and coloring
//! - **Organism type**
//! - **Sample type**
//!
//! An isolate only counts toward a series when the join behind it resolves.
//! Buckets come out in first-encountered order and are never zero.

pub mod bucket;
pub mod counts;

pub use bucket::*;
pub use counts::*;
