//! Street Routing - shortest paths over road networks
//!
//! The engine is built from three pieces: a separate-chaining hash map keyed
//! by a table-mixing hash, a binary heap that tracks element positions so
//! priorities can be lowered in place, and an adjacency-list graph that runs
//! Dijkstra's algorithm and a great-circle A* on top of them.
//!
//! Searches keep their distance and predecessor maps local to each call, so a
//! graph can answer read-only queries from several threads at once.

pub mod algorithm;
pub mod data_structures;
pub mod geo;
pub mod graph;
pub mod street_map;

pub use algorithm::{AStar, Dijkstra, SearchTree, ShortestPathAlgorithm};
pub use data_structures::{ChainedHashMap, IndexedPriorityQueue, KeyedMixHash};
pub use geo::Coordinate;
/// Re-export main types for convenient use
pub use graph::{AdjacencyListGraph, Edge, EdgeWeight, Graph, Road, Vertex};
pub use street_map::{Intersection, Route, RouteConfig, RouteStrategy, StreetMap};

/// Broad classes of [`Error`], letting callers tell bad input from bugs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A vertex the call depends on does not exist
    NotFound,
    /// The arguments are unusable as given
    InvalidArgument,
    /// The engine reached a state that should be impossible
    Internal,
}

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid edge weight: {0}")]
    NegativeWeight(f64),

    #[error("No coordinates for vertex {0}")]
    MissingCoordinates(String),

    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::VertexNotFound(_) => ErrorKind::NotFound,
            Error::InvalidArgument(_) | Error::NegativeWeight(_) | Error::MissingCoordinates(_) => {
                ErrorKind::InvalidArgument
            }
            Error::InternalInconsistency(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
