pub mod error;
pub mod problem;
pub mod traits;
pub mod types;

pub use error::*;
pub use problem::*;
pub use traits::*;
pub use types::*;
