use crate::algorithm::best_first::best_first;
use crate::algorithm::{SearchTree, ShortestPathAlgorithm};
use crate::data_structures::ChainedHashMap;
use crate::geo::Coordinate;
use crate::graph::{EdgeWeight, Graph, Vertex};
use crate::{Error, Result};

/// A* search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The heuristic estimates the remaining cost from a vertex to the goal the
/// algorithm was built for. Paths are optimal when it is admissible (never
/// overestimates) and consistent.
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        AStar { heuristic }
    }
}

impl<V, W, H> ShortestPathAlgorithm<V, W> for AStar<H>
where
    V: Vertex,
    W: EdgeWeight,
    H: Fn(&V) -> Result<W>,
{
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search<G>(&self, graph: &G, source: &V, target: Option<&V>) -> Result<SearchTree<V, W>>
    where
        G: Graph<V, W> + ?Sized,
    {
        best_first(graph, source, target, |vertex| (self.heuristic)(vertex))
    }
}

/// Great-circle distance heuristic towards `destination`, in meters.
///
/// Admissible whenever edge weights are road lengths in meters: no road is
/// shorter than the straight line between its ends. Fails if `destination`
/// has no coordinates; the returned closure fails for any vertex without
/// coordinates.
pub fn haversine_heuristic<'a, V, W>(
    coordinates: &'a ChainedHashMap<V, Coordinate>,
    destination: &V,
) -> Result<impl Fn(&V) -> Result<W> + 'a>
where
    V: Vertex + 'a,
    W: EdgeWeight + 'a,
{
    let goal = *coordinates
        .get(destination)
        .ok_or_else(|| Error::MissingCoordinates(format!("{:?}", destination)))?;

    Ok(move |vertex: &V| {
        coordinates
            .get(vertex)
            .map(|position| W::from_weight(position.distance_to(&goal)))
            .ok_or_else(|| Error::MissingCoordinates(format!("{:?}", vertex)))
    })
}
