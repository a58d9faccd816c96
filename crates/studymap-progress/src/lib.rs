pub mod store;
pub mod tracker;

pub use store::{JsonFileStore, MemoryStore, COMPLETED_KEY};
pub use tracker::ProgressTracker;
