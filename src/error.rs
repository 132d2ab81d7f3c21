use thiserror::Error;

/// Possible errors that arise due to issues with the input graph or its textual encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SteinerError {
    #[error("Vertex out of range: {0}")]
    VertexOutOfRange(String),
    #[error("Non finite weight: {0}")]
    NonFiniteWeight(String),
    #[error("Too many vertices: {0}")]
    TooManyVertices(String),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}
