pub mod query;
pub mod report;

pub use query::*;
pub use report::*;
