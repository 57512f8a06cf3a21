use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("node {1} not reachable from {0}")]
    NoPath(String, String),
    #[error("node {0} not found in graph")]
    NodeNotFound(String),
    #[error("k must be at least 1")]
    ZeroK,
    #[error("edge {0} has no weight attribute `{1}`")]
    MissingWeight(String, String),
    #[error("edge {0} has invalid weight {1} on `{2}`")]
    InvalidWeight(String, f64, String),
    #[error("unknown acceptance policy `{0}`")]
    UnknownAcceptance(String),
    #[error("failed to read {0}")]
    Io(String, #[source] io::Error),
    #[error("failed to parse yaml")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse json")]
    Json(#[from] serde_json::Error),
}
