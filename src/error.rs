//! Error types for graph construction, validation and reporting.

use std::io;

use thiserror::Error;

/// Errors raised while constructing or validating a graph and its run parameters.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A graph needs at least one vertex.
    #[error("graph must have at least one vertex")]
    Empty,

    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("vertex {vertex} has a self-loop")]
    SelfLoop { vertex: usize },

    /// An undirected graph whose cell (from, to) differs from (to, from).
    #[error("undirected graph has asymmetric weights between vertices {from} and {to}")]
    Asymmetric { from: usize, to: usize },

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// The requested source vertex is outside `0..=max`.
    #[error("source vertex must be in the range 0 to {max}, got {vertex}")]
    SourceOutOfRange { vertex: usize, max: usize },

    /// Edges must carry a positive weight, a zero cell means "no edge".
    #[error("edge {from} -> {to} has a zero weight")]
    ZeroWeight { from: usize, to: usize },

    #[error("edge probability {0} is outside the range [0, 1]")]
    InvalidProbability(f64),
}

/// Top-level error type for a full run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for a full run.
pub type Result<T> = std::result::Result<T, Error>;
