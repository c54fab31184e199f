use ordered_float::OrderedFloat;
use street_routing::{
    AdjacencyListGraph, ChainedHashMap, Error, ErrorKind, Graph, SearchTree,
};

type Weight = OrderedFloat<f64>;

fn triangle() -> AdjacencyListGraph<char, Weight> {
    let mut graph = AdjacencyListGraph::new();
    graph.set('a', 'b', OrderedFloat(1.0)).unwrap();
    graph.set('b', 'a', OrderedFloat(1.0)).unwrap();
    graph.set('b', 'c', OrderedFloat(2.0)).unwrap();
    graph.set('c', 'a', OrderedFloat(3.0)).unwrap();
    graph
}

#[test]
fn test_set_adds_missing_endpoints() {
    let mut graph: AdjacencyListGraph<&str, Weight> = AdjacencyListGraph::new();
    assert_eq!(graph.set("x", "y", OrderedFloat(4.0)).unwrap(), None);

    assert_eq!(graph.size(), 2);
    assert!(graph.contains(&"x"));
    assert!(graph.contains(&"y"));
    assert_eq!(graph.get(&"x", &"y").unwrap(), Some(&OrderedFloat(4.0)));
    assert_eq!(graph.get(&"y", &"x").unwrap(), None);

    assert_eq!(graph.set("x", "y", OrderedFloat(6.0)).unwrap(), Some(OrderedFloat(4.0)));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_invalid_weights_are_rejected() {
    let mut graph: AdjacencyListGraph<u8, Weight> = AdjacencyListGraph::new();
    let err = graph.set(1, 2, OrderedFloat(-1.0)).unwrap_err();
    assert_eq!(err, Error::NegativeWeight(-1.0));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(graph.set(1, 2, OrderedFloat(f64::NAN)).is_err());
    assert_eq!(graph.size(), 0);

    graph.set(1, 2, OrderedFloat(0.0)).unwrap();
    assert_eq!(graph.distance(&1, &2).unwrap(), OrderedFloat(0.0));
}

#[test]
fn test_queries_on_absent_vertex_fail() {
    let mut graph = triangle();
    assert_eq!(graph.get(&'z', &'a').unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(graph.remove_edge(&'z', &'a').unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(graph.connected(&'z').unwrap_err().kind(), ErrorKind::NotFound);
    assert!(graph.outgoing_edges(&'z').is_err());

    // An absent target is only a missing edge.
    assert_eq!(graph.get(&'a', &'z').unwrap(), None);
}

#[test]
fn test_count_edges_between() {
    let graph = triangle();
    assert_eq!(graph.count_edges_between(&'a', &'b'), 2);
    assert_eq!(graph.count_edges_between(&'b', &'c'), 1);
    assert_eq!(graph.count_edges_between(&'c', &'b'), 1);

    let mut graph = graph;
    graph.add('d');
    assert_eq!(graph.count_edges_between(&'a', &'d'), 0);
    assert_eq!(graph.count_edges_between(&'a', &'q'), 0);
}

#[test]
fn test_add_and_remove_vertices() {
    let mut graph = triangle();
    assert!(!graph.add('a'));
    assert!(graph.add('d'));
    assert_eq!(graph.add_all(vec!['d', 'e']), vec!['d']);
    assert_eq!(graph.size(), 5);

    // Removing a vertex drops the edges into it as well.
    assert!(graph.remove('c'));
    assert!(!graph.remove('c'));
    assert_eq!(graph.get(&'b', &'c').unwrap(), None);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.remove_all(vec!['d', 'q']), vec!['q']);
    assert_eq!(graph.size(), 3);
}

#[test]
fn test_disconnect_and_clear_edges() {
    let mut graph = triangle();
    assert_eq!(graph.disconnect(&'a', &'b').unwrap(), 2);
    assert_eq!(graph.disconnect(&'a', &'b').unwrap(), 0);
    assert_eq!(graph.disconnect(&'c', &'b').unwrap(), 1);

    graph.clear_edges();
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.size(), 3);
    assert!(graph.edges().is_empty());
}

#[test]
fn test_connected_and_neighbors_agree() {
    let graph = triangle();
    let mut connected = graph.connected(&'b').unwrap();
    connected.sort();
    assert_eq!(connected, vec!['a', 'c']);

    let mut neighbors = graph.neighbors(&'b').unwrap();
    neighbors.sort();
    assert_eq!(neighbors, connected);

    let mut outgoing: Vec<(char, f64)> = graph
        .outgoing_edges(&'c')
        .unwrap()
        .map(|(to, w)| (*to, w.0))
        .collect();
    outgoing.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(outgoing, vec![('a', 3.0)]);
}

#[test]
fn test_subgraph_keeps_internal_edges() {
    let graph = triangle();
    let sub = graph.subgraph(&['a', 'b']).unwrap();

    assert_eq!(sub.size(), 2);
    assert_eq!(sub.edge_count(), 2);
    assert_eq!(sub.get(&'a', &'b').unwrap(), Some(&OrderedFloat(1.0)));
    assert!(!sub.contains(&'c'));

    let err = graph.subgraph(&['a', 'q']).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_copy_is_independent() {
    let graph = triangle();
    let mut copy = graph.copy().unwrap();
    assert_eq!(copy.size(), graph.size());
    assert_eq!(copy.edge_count(), graph.edge_count());

    copy.remove_edge(&'a', &'b').unwrap();
    assert!(graph.get(&'a', &'b').unwrap().is_some());
}

#[test]
fn test_union_takes_weights_from_other() {
    let mut graph = triangle();
    let mut other: AdjacencyListGraph<char, Weight> = AdjacencyListGraph::new();
    other.set('a', 'b', OrderedFloat(9.0)).unwrap();
    other.set('c', 'd', OrderedFloat(1.0)).unwrap();
    other.add('e');

    graph.union(&other).unwrap();
    assert_eq!(graph.size(), 5);
    assert_eq!(graph.get(&'a', &'b').unwrap(), Some(&OrderedFloat(9.0)));
    assert_eq!(graph.get(&'c', &'d').unwrap(), Some(&OrderedFloat(1.0)));
    assert_eq!(graph.get(&'b', &'c').unwrap(), Some(&OrderedFloat(2.0)));
}

#[test]
fn test_integer_weights() {
    let mut graph: AdjacencyListGraph<u32, u64> = AdjacencyListGraph::new();
    graph.set(1, 2, 7).unwrap();
    graph.set(2, 3, 5).unwrap();
    graph.set(1, 3, 20).unwrap();
    graph.add(4);

    assert_eq!(graph.distance(&1, &3).unwrap(), 12);
    assert_eq!(graph.path(&1, &3).unwrap(), vec![1, 2, 3]);
    assert_eq!(graph.distance(&1, &4).unwrap(), u64::MAX);
    assert_eq!(graph.path_cost(&[1, 2, 3]).unwrap(), 12);
    assert_eq!(graph.path_cost(&[]).unwrap(), 0);
    assert_eq!(graph.path_cost(&[3, 1]).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_broken_predecessor_chain_is_reported() {
    let mut predecessors = ChainedHashMap::new();
    predecessors.put('c', 'b');
    let tree: SearchTree<char, Weight> = SearchTree {
        source: 'a',
        distances: ChainedHashMap::new(),
        predecessors,
        settled: 0,
    };
    let err = tree.path_to(&'c').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);

    let mut predecessors = ChainedHashMap::new();
    predecessors.put('b', 'c');
    predecessors.put('c', 'b');
    let tree: SearchTree<char, Weight> = SearchTree {
        source: 'a',
        distances: ChainedHashMap::new(),
        predecessors,
        settled: 0,
    };
    assert!(matches!(tree.path_to(&'b'), Err(Error::InternalInconsistency(_))));
}

#[test]
fn test_find_edge_returns_first_match() {
    let graph = triangle();
    let edge = graph.find_edge(|_, _, w| *w == OrderedFloat(2.0)).unwrap();
    assert_eq!((edge.from, edge.to), ('b', 'c'));

    let into_a = graph.find_edge(|from, to, _| *from == 'c' && *to == 'a').unwrap();
    assert_eq!(into_a.weight, OrderedFloat(3.0));

    assert!(graph.find_edge(|_, _, w| w.0 > 10.0).is_none());
}
