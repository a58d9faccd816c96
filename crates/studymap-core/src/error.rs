use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudymapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Pattern not found: {0}")]
    PatternNotFound(String),

    #[error("Problem not found: {0}")]
    ProblemNotFound(String),

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),
}

pub type Result<T> = std::result::Result<T, StudymapError>;
