use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::algorithm::traversal;
use crate::graph::weight::EdgeWeight;
use crate::Result;

/// Requirements on vertex values: stable equality with a matching hash.
/// The engine never looks inside a vertex beyond these.
pub trait Vertex: Hash + Eq + Clone + Debug {}

impl<T: Hash + Eq + Clone + Debug> Vertex for T {}

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

/// Trait representing a mutable, directed, weighted graph.
///
/// Undirected connections are two edges of equal weight. Searches keep all
/// of their scratch state local to the call, so every query takes `&self`.
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: EdgeWeight,
{
    /// Returns the number of vertices in the graph
    fn size(&self) -> usize;

    /// Weight of the edge `from -> to`, or `None` if there is no such edge.
    /// Fails if `from` is not in the graph.
    fn get(&self, from: &V, to: &V) -> Result<Option<&W>>;

    /// Sets the weight of `from -> to`, adding either endpoint that is
    /// missing. Returns the weight it replaced.
    fn set(&mut self, from: V, to: V, weight: W) -> Result<Option<W>>;

    /// Snapshot of the vertices. No order is guaranteed.
    fn vertices(&self) -> Vec<V>;

    /// Snapshot of the directed edges
    fn edges(&self) -> Vec<Edge<V, W>>;

    /// Adds unconnected vertices, returning the ones already present
    fn add_all<I>(&mut self, vertices: I) -> Vec<V>
    where
        I: IntoIterator<Item = V>;

    /// Removes vertices along with every edge touching them, returning the
    /// ones that were not present
    fn remove_all<I>(&mut self, vertices: I) -> Vec<V>
    where
        I: IntoIterator<Item = V>;

    /// Removes `from -> to`, returning its weight. Fails if `from` is not in
    /// the graph.
    fn remove_edge(&mut self, from: &V, to: &V) -> Result<Option<W>>;

    /// Returns true if the vertex exists in the graph
    fn contains(&self, vertex: &V) -> bool;

    /// Iterator over the outgoing edges from a vertex
    fn outgoing_edges<'a>(&'a self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&'a V, &'a W)> + 'a>>;

    /// Number of directed edges between `v1` and `v2`: 0, 1 or 2
    fn count_edges_between(&self, v1: &V, v2: &V) -> usize;

    /// New graph holding only `vertices` and the edges among them.
    /// Fails if any of the vertices is not in this graph.
    fn subgraph(&self, vertices: &[V]) -> Result<Self>
    where
        Self: Sized;

    /// Shortest path from `from` to `to` as a vertex sequence; empty if `to`
    /// is unreachable and `[from]` when both are the same vertex
    fn path(&self, from: &V, to: &V) -> Result<Vec<V>>;

    /// Shortest distance from `from` to `to`; `W::infinity()` if unreachable
    fn distance(&self, from: &V, to: &V) -> Result<W>;

    /// Adds a single vertex. Returns false if it was already present.
    fn add(&mut self, vertex: V) -> bool {
        self.add_all(std::iter::once(vertex)).is_empty()
    }

    /// Removes a single vertex. Returns false if it was not present.
    fn remove(&mut self, vertex: V) -> bool {
        self.remove_all(std::iter::once(vertex)).is_empty()
    }

    /// Removes the edges in both directions, returning how many existed
    fn disconnect(&mut self, v1: &V, v2: &V) -> Result<usize> {
        let mut removed = 0;
        if self.remove_edge(v1, v2)?.is_some() {
            removed += 1;
        }
        if self.remove_edge(v2, v1)?.is_some() {
            removed += 1;
        }
        Ok(removed)
    }

    /// Removes every edge, keeping the vertices
    fn clear_edges(&mut self) {
        for edge in self.edges() {
            // Both endpoints come from the snapshot, so the source exists.
            let _ = self.remove_edge(&edge.from, &edge.to);
        }
    }

    /// Vertices `source` has an outbound edge to
    fn connected(&self, source: &V) -> Result<Vec<V>> {
        Ok(self
            .outgoing_edges(source)?
            .map(|(to, _)| to.clone())
            .collect())
    }

    /// Vertices reachable from `source` by one edge, found by probing every
    /// vertex of the graph
    fn neighbors(&self, source: &V) -> Result<Vec<V>> {
        let mut neighbors = Vec::new();
        for vertex in self.vertices() {
            if self.get(source, &vertex)?.is_some() {
                neighbors.push(vertex);
            }
        }
        Ok(neighbors)
    }

    /// Shallow copy of the whole graph
    fn copy(&self) -> Result<Self>
    where
        Self: Sized,
    {
        self.subgraph(&self.vertices())
    }

    /// Adds the vertices and edges of `other` to this graph. Edges present in
    /// both take the weight from `other`.
    fn union(&mut self, other: &Self) -> Result<()>
    where
        Self: Sized,
    {
        self.add_all(other.vertices());
        for edge in other.edges() {
            self.set(edge.from, edge.to, edge.weight)?;
        }
        Ok(())
    }

    /// Path found by an unweighted depth-first search; empty if unreachable
    fn depth_first_search(&self, source: &V, destination: &V) -> Result<Vec<V>> {
        traversal::search(self, traversal::Order::DepthFirst, source, destination)
    }

    /// Path found by an unweighted breadth-first search; empty if unreachable
    fn breadth_first_search(&self, source: &V, destination: &V) -> Result<Vec<V>> {
        traversal::search(self, traversal::Order::BreadthFirst, source, destination)
    }
}
