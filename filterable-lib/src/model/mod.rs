//! Table data model

mod column;
mod control;
mod row;

pub use column::*;
pub use control::*;
pub use row::*;
