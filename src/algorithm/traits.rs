use crate::data_structures::ChainedHashMap;
use crate::graph::{EdgeWeight, Graph, Vertex};
use crate::{Error, Result};

/// Result of a single shortest path search.
///
/// Built fresh for every call and owned by the caller, so concurrent
/// read-only queries on one graph never share scratch state.
#[derive(Debug, Clone)]
pub struct SearchTree<V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    /// Source vertex of the search
    pub source: V,

    /// Best known distance from the source. Final for every vertex that was
    /// settled; tentative for vertices still queued when the search stopped.
    pub distances: ChainedHashMap<V, W>,

    /// Relaxation predecessor of each reached vertex other than the source
    pub predecessors: ChainedHashMap<V, V>,

    /// Number of vertices removed from the queue
    pub settled: usize,
}

impl<V, W> SearchTree<V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    /// Distance to `target`, or `W::infinity()` if it was never reached
    pub fn distance_to(&self, target: &V) -> W {
        self.distances.get(target).cloned().unwrap_or_else(W::infinity)
    }

    /// Walks the predecessor chain back from `target` and returns the path
    /// from the source. Empty if `target` was never reached.
    pub fn path_to(&self, target: &V) -> Result<Vec<V>> {
        if *target == self.source {
            return Ok(vec![self.source.clone()]);
        }
        if !self.predecessors.contains_key(target) {
            return Ok(Vec::new());
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.predecessors.get(current).ok_or_else(|| {
                Error::InternalInconsistency(format!(
                    "predecessor chain from {:?} breaks at {:?}",
                    target, current
                ))
            })?;
            path.push(current.clone());

            // A simple path visits each reached vertex at most once.
            if path.len() > self.predecessors.len() + 1 {
                return Err(Error::InternalInconsistency(format!(
                    "cycle in predecessor chain from {:?}",
                    target
                )));
            }
        }

        path.reverse();
        Ok(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Searches from `source`, stopping as soon as `target` is settled.
    /// With no target the whole reachable graph is explored.
    fn search<G>(&self, graph: &G, source: &V, target: Option<&V>) -> Result<SearchTree<V, W>>
    where
        G: Graph<V, W> + ?Sized;

    /// Get the shortest path from source to target as a sequence of vertices
    fn find_path<G>(&self, graph: &G, source: &V, target: &V) -> Result<Vec<V>>
    where
        G: Graph<V, W> + ?Sized,
    {
        self.search(graph, source, Some(target))?.path_to(target)
    }
}
