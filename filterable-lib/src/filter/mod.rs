//! Row matching
//!
//! The pieces that decide whether a row is visible: per-column excluded
//! values, the search term, the per-row evaluation combining both, and the
//! scan over a whole table.

mod column;
mod evaluator;
mod normalize;
mod scan;
mod search;

pub use column::*;
pub use evaluator::*;
pub use normalize::*;
pub use scan::*;
pub use search::*;
