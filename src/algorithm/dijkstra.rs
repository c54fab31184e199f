use crate::algorithm::best_first::best_first;
use crate::algorithm::{SearchTree, ShortestPathAlgorithm};
use crate::graph::{EdgeWeight, Graph, Vertex};
use crate::Result;

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W> ShortestPathAlgorithm<V, W> for Dijkstra
where
    V: Vertex,
    W: EdgeWeight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search<G>(&self, graph: &G, source: &V, target: Option<&V>) -> Result<SearchTree<V, W>>
    where
        G: Graph<V, W> + ?Sized,
    {
        best_first(graph, source, target, |_| Ok(W::zero()))
    }
}
