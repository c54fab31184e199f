pub mod a_star;
mod best_first;
pub mod dijkstra;
pub mod traits;
pub mod traversal;

pub use a_star::{haversine_heuristic, AStar};
pub use dijkstra::Dijkstra;
pub use traits::{SearchTree, ShortestPathAlgorithm};
