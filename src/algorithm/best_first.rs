use crate::algorithm::SearchTree;
use crate::data_structures::{ChainedHashMap, IndexedPriorityQueue};
use crate::graph::{EdgeWeight, Graph, Vertex};
use crate::{Error, Result};

/// Relaxation loop shared by Dijkstra and A*.
///
/// Vertices are queued by `g + h` where `g` is the best known distance from
/// the source and `h` the estimate returned by `heuristic`. Dijkstra is the
/// case `h = 0`. The search stops the moment `target` leaves the queue.
pub(crate) fn best_first<V, W, G, H>(
    graph: &G,
    source: &V,
    target: Option<&V>,
    mut heuristic: H,
) -> Result<SearchTree<V, W>>
where
    V: Vertex,
    W: EdgeWeight,
    G: Graph<V, W> + ?Sized,
    H: FnMut(&V) -> Result<W>,
{
    if !graph.contains(source) {
        return Err(Error::VertexNotFound(format!("{:?}", source)));
    }
    if let Some(target) = target {
        if !graph.contains(target) {
            return Err(Error::VertexNotFound(format!("{:?}", target)));
        }
    }

    log::debug!("searching from {:?} to {:?}", source, target);

    let infinity = W::infinity();
    let mut distances: ChainedHashMap<V, W> = ChainedHashMap::new();
    let mut predecessors: ChainedHashMap<V, V> = ChainedHashMap::new();
    let mut queue: IndexedPriorityQueue<V, W> = IndexedPriorityQueue::new();
    let mut settled = 0;

    distances.put(source.clone(), W::zero());
    queue.push(source.clone(), heuristic(source)?)?;

    while let Some((current, _)) = queue.poll() {
        settled += 1;
        if target == Some(&current) {
            break;
        }

        let g = distances.get(&current).cloned().ok_or_else(|| {
            Error::InternalInconsistency(format!("{:?} was queued without a distance", current))
        })?;

        for (neighbor, weight) in graph.outgoing_edges(&current)? {
            let candidate = g.saturating_add(weight);
            if candidate >= *distances.get_or_default(neighbor, &infinity) {
                continue;
            }

            log::trace!("relax {:?} -> {:?}: {:?}", current, neighbor, candidate);
            let priority = candidate.saturating_add(&heuristic(neighbor)?);
            distances.put(neighbor.clone(), candidate);
            predecessors.put(neighbor.clone(), current.clone());

            if queue.contains(neighbor) {
                queue.decrease_key(neighbor, priority)?;
            } else {
                queue.push(neighbor.clone(), priority)?;
            }
        }
    }

    log::debug!(
        "search from {:?} settled {} vertices, {} reached",
        source,
        settled,
        distances.len()
    );

    Ok(SearchTree {
        source: source.clone(),
        distances,
        predecessors,
        settled,
    })
}
