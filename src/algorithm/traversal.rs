use std::collections::VecDeque;

use crate::data_structures::ChainedHashMap;
use crate::graph::{EdgeWeight, Graph, Vertex};
use crate::{Error, Result};

/// Order in which discovered vertices are expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Newly discovered vertices go to the front of the work list (stack)
    DepthFirst,
    /// Newly discovered vertices go to the back of the work list (queue)
    BreadthFirst,
}

/// Unweighted search from `source` to `destination`.
///
/// Each vertex remembers the vertex it was first discovered from. Returns the
/// path along those links, or an empty path when `destination` cannot be
/// reached. A broken or cyclic chain after the destination was discovered is
/// reported as [`Error::InternalInconsistency`].
pub fn search<V, W, G>(graph: &G, order: Order, source: &V, destination: &V) -> Result<Vec<V>>
where
    V: Vertex,
    W: EdgeWeight,
    G: Graph<V, W> + ?Sized,
{
    if !graph.contains(source) {
        return Err(Error::VertexNotFound(format!("{:?}", source)));
    }
    if !graph.contains(destination) {
        return Err(Error::VertexNotFound(format!("{:?}", destination)));
    }

    let mut work = VecDeque::new();
    let mut previous: ChainedHashMap<V, V> = ChainedHashMap::with_capacity(graph.size());

    work.push_front(source.clone());
    previous.put(source.clone(), source.clone());

    'search: while let Some(current) = work.pop_front() {
        if current == *destination {
            break;
        }

        for neighbor in graph.connected(&current)? {
            if previous.contains_key(&neighbor) {
                continue;
            }
            previous.put(neighbor.clone(), current.clone());
            if neighbor == *destination {
                break 'search;
            }
            match order {
                Order::DepthFirst => work.push_front(neighbor),
                Order::BreadthFirst => work.push_back(neighbor),
            }
        }
    }

    if !previous.contains_key(destination) {
        return Ok(Vec::new());
    }

    let mut path = vec![destination.clone()];
    let mut current = destination;
    while current != source {
        current = previous.get(current).ok_or_else(|| {
            Error::InternalInconsistency(format!(
                "{:?} was discovered but {:?} has no parent",
                destination, current
            ))
        })?;
        path.push(current.clone());

        if path.len() > previous.len() {
            return Err(Error::InternalInconsistency(format!(
                "cycle in discovery chain from {:?}",
                destination
            )));
        }
    }

    path.reverse();
    Ok(path)
}
