pub mod builtin;
pub mod catalog;
pub mod consistency;

pub use catalog::{Catalog, ProblemFilter};
pub use consistency::{check_consistency, CacheDrift};
