use crate::algorithm::{haversine_heuristic, AStar, Dijkstra, SearchTree, ShortestPathAlgorithm};
use crate::data_structures::ChainedHashMap;
use crate::geo::Coordinate;
use crate::graph::traits::{Edge, Graph, Vertex};
use crate::graph::weight::EdgeWeight;
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists.
///
/// Every vertex owns a row mapping each outbound neighbor to the weight of
/// the edge. Rows exist for every vertex, including those without edges, so
/// an edge endpoint is always a vertex of the graph.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    /// vertex -> (neighbor -> weight)
    adjacency: ChainedHashMap<V, ChainedHashMap<V, W>>,
}

impl<V, W> AdjacencyListGraph<V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyListGraph {
            adjacency: ChainedHashMap::new(),
        }
    }

    /// Creates an empty graph sized for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyListGraph {
            adjacency: ChainedHashMap::with_capacity(vertices),
        }
    }

    /// Returns the number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(ChainedHashMap::len).sum()
    }

    /// Total weight of following `path` hop by hop.
    /// Fails if two consecutive vertices are not joined by an edge.
    pub fn path_cost(&self, path: &[V]) -> Result<W> {
        let mut total: Option<W> = None;
        for hop in path.windows(2) {
            let weight = self.get(&hop[0], &hop[1])?.ok_or_else(|| {
                Error::InvalidArgument(format!("no edge from {:?} to {:?}", hop[0], hop[1]))
            })?;
            total = Some(match total {
                Some(sum) => sum.saturating_add(weight),
                None => weight.clone(),
            });
        }
        Ok(total.unwrap_or_else(W::zero))
    }

    /// First edge matching `predicate`. Only the match is cloned.
    pub fn find_edge<P>(&self, mut predicate: P) -> Option<Edge<V, W>>
    where
        P: FnMut(&V, &V, &W) -> bool,
    {
        self.adjacency.entries().find_map(|(from, row)| {
            row.entries()
                .find(|(to, weight)| predicate(from, to, weight))
                .map(|(to, weight)| Edge {
                    from: from.clone(),
                    to: to.clone(),
                    weight: weight.clone(),
                })
        })
    }

    /// Distances and predecessors from `source` to every reachable vertex
    pub fn shortest_path_tree(&self, source: &V) -> Result<SearchTree<V, W>> {
        <Dijkstra as ShortestPathAlgorithm<V, W>>::search(&Dijkstra, self, source, None)
    }

    /// Shortest path found by A* with the great-circle distance to `to` as
    /// heuristic. `coordinates` maps every vertex to its position; weights
    /// are expected in meters.
    pub fn path_astar(
        &self,
        from: &V,
        to: &V,
        coordinates: &ChainedHashMap<V, Coordinate>,
    ) -> Result<Vec<V>> {
        if !coordinates.contains_key(from) {
            return Err(Error::MissingCoordinates(format!("{:?}", from)));
        }
        let heuristic = haversine_heuristic(coordinates, to)?;
        self.path_astar_by(from, to, heuristic)
    }

    /// Shortest path found by A* with a caller supplied heuristic
    pub fn path_astar_by<H>(&self, from: &V, to: &V, heuristic: H) -> Result<Vec<V>>
    where
        H: Fn(&V) -> Result<W>,
    {
        let a_star = AStar::new(heuristic);
        <AStar<H> as ShortestPathAlgorithm<V, W>>::find_path(&a_star, self, from, to)
    }

    fn row(&self, vertex: &V) -> Result<&ChainedHashMap<V, W>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", vertex)))
    }
}

impl<V, W> Default for AdjacencyListGraph<V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for AdjacencyListGraph<V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    fn size(&self) -> usize {
        self.adjacency.len()
    }

    fn get(&self, from: &V, to: &V) -> Result<Option<&W>> {
        Ok(self.row(from)?.get(to))
    }

    fn set(&mut self, from: V, to: V, weight: W) -> Result<Option<W>> {
        if !weight.is_valid_edge() {
            return Err(Error::NegativeWeight(weight.weight()));
        }

        self.adjacency.put_if_absent(to.clone(), ChainedHashMap::new());
        Ok(self
            .adjacency
            .put_if_absent(from, ChainedHashMap::new())
            .put(to, weight))
    }

    fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    fn edges(&self) -> Vec<Edge<V, W>> {
        self.adjacency
            .entries()
            .flat_map(|(from, row)| {
                row.entries().map(move |(to, weight)| Edge {
                    from: from.clone(),
                    to: to.clone(),
                    weight: weight.clone(),
                })
            })
            .collect()
    }

    fn add_all<I>(&mut self, vertices: I) -> Vec<V>
    where
        I: IntoIterator<Item = V>,
    {
        let mut already_present = Vec::new();
        for vertex in vertices {
            if self.adjacency.contains_key(&vertex) {
                already_present.push(vertex);
            } else {
                self.adjacency.put(vertex, ChainedHashMap::new());
            }
        }
        already_present
    }

    fn remove_all<I>(&mut self, vertices: I) -> Vec<V>
    where
        I: IntoIterator<Item = V>,
    {
        let mut not_present = Vec::new();
        for vertex in vertices {
            if self.adjacency.remove(&vertex).is_some() {
                for row in self.adjacency.values_mut() {
                    row.remove(&vertex);
                }
            } else {
                not_present.push(vertex);
            }
        }
        not_present
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> Result<Option<W>> {
        let row = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", from)))?;
        Ok(row.remove(to))
    }

    fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn outgoing_edges<'a>(&'a self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&'a V, &'a W)> + 'a>> {
        Ok(Box::new(self.row(vertex)?.entries()))
    }

    fn count_edges_between(&self, v1: &V, v2: &V) -> usize {
        let has_edge = |from: &V, to: &V| {
            self.adjacency
                .get(from)
                .map_or(false, |row| row.contains_key(to))
        };
        has_edge(v1, v2) as usize + has_edge(v2, v1) as usize
    }

    /// The row already lists the outbound neighbors, so no probing is needed.
    fn neighbors(&self, source: &V) -> Result<Vec<V>> {
        self.connected(source)
    }

    fn subgraph(&self, vertices: &[V]) -> Result<Self> {
        let mut keep: ChainedHashMap<V, ()> = ChainedHashMap::with_capacity(vertices.len());
        for vertex in vertices {
            if !self.contains(vertex) {
                return Err(Error::InvalidArgument(format!(
                    "{:?} is not in the graph",
                    vertex
                )));
            }
            keep.put(vertex.clone(), ());
        }

        let mut subgraph = AdjacencyListGraph::with_capacity(keep.len());
        subgraph.add_all(keep.keys().cloned());
        for from in keep.keys() {
            for (to, weight) in self.row(from)?.entries() {
                if keep.contains_key(to) {
                    subgraph.set(from.clone(), to.clone(), weight.clone())?;
                }
            }
        }
        Ok(subgraph)
    }

    fn path(&self, from: &V, to: &V) -> Result<Vec<V>> {
        <Dijkstra as ShortestPathAlgorithm<V, W>>::find_path(&Dijkstra, self, from, to)
    }

    fn distance(&self, from: &V, to: &V) -> Result<W> {
        let tree = <Dijkstra as ShortestPathAlgorithm<V, W>>::search(&Dijkstra, self, from, Some(to))?;
        Ok(tree.distance_to(to))
    }
}
