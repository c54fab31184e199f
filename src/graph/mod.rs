pub mod adjacency_list;
pub mod traits;
pub mod weight;

pub use adjacency_list::AdjacencyListGraph;
pub use traits::{Edge, Graph, Vertex};
pub use weight::{EdgeWeight, Road};
