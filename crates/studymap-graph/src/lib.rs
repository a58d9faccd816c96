pub mod graph;

pub use graph::PrereqGraph;
