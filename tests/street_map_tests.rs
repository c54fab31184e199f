use street_routing::{
    Coordinate, EdgeWeight, ErrorKind, Graph, Intersection, Road, RouteConfig, RouteStrategy,
    StreetMap,
};

// A few intersections around a university campus
fn campus(config: RouteConfig) -> StreetMap {
    let mut map = StreetMap::with_config(config);
    map.add_intersection("gate", 43.0845, -77.6749);
    map.add_intersection("library", 43.0839, -77.6763);
    map.add_intersection("gym", 43.0857, -77.6715);
    map.add_intersection("dorms", 43.0823, -77.6680);
    map.add_intersection("island", 43.0900, -77.6600);

    map.add_road("quarter-mile", "gate", "library").unwrap();
    map.add_road("andrews", "gate", "gym").unwrap();
    map.add_road("lomb", "gym", "dorms").unwrap();
    map.add_one_way_road("shortcut", "library", "dorms").unwrap();
    map
}

#[test]
fn test_duplicate_intersection_is_ignored() {
    let mut map = StreetMap::new();
    assert!(map.add_intersection("a", 1.0, 2.0));
    assert!(!map.add_intersection("a", 5.0, 6.0));
    assert_eq!(map.intersection("a").unwrap().coordinate, Coordinate::new(1.0, 2.0));
    assert_eq!(map.graph().size(), 1);
}

#[test]
fn test_road_length_is_great_circle_distance() {
    let map = campus(RouteConfig::new());
    let gate = map.intersection("gate").unwrap();
    let library = map.intersection("library").unwrap();

    let road = map.graph().get(gate, library).unwrap().unwrap();
    assert_eq!(road.road_id, "quarter-mile");
    assert_eq!(road.distance(), gate.coordinate.distance_to(&library.coordinate));
    assert_eq!(map.graph().count_edges_between(gate, library), 2);
}

#[test]
fn test_one_way_road_has_a_single_edge() {
    let map = campus(RouteConfig::new());
    let library = map.intersection("library").unwrap();
    let dorms = map.intersection("dorms").unwrap();
    assert_eq!(map.graph().count_edges_between(library, dorms), 1);
    assert!(map.graph().get(dorms, library).unwrap().is_none());
}

#[test]
fn test_road_lookup_by_id() {
    let map = campus(RouteConfig::new());
    let edge = map.road("lomb").unwrap();
    assert_eq!(edge.weight.road_id, "lomb");
    assert!(
        (edge.from.id == "gym" && edge.to.id == "dorms")
            || (edge.from.id == "dorms" && edge.to.id == "gym")
    );
    assert!(map.road("missing").is_none());

    let shortcut = map.road("shortcut").unwrap();
    assert_eq!((shortcut.from.id.as_str(), shortcut.to.id.as_str()), ("library", "dorms"));
}

#[test]
fn test_road_to_unknown_intersection_fails() {
    let mut map = campus(RouteConfig::new());
    let err = map.add_road("nowhere", "gate", "moon").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(map.road("nowhere").is_none());
}

#[test]
fn test_every_strategy_finds_the_same_route() {
    let strategies = [
        RouteStrategy::Dijkstra,
        RouteStrategy::AStar,
        RouteStrategy::default(),
    ];

    let mut lengths = Vec::new();
    for strategy in strategies {
        let map = campus(RouteConfig::new().with_strategy(strategy));
        let route = map.find_path("gate", "dorms").unwrap().unwrap();

        let ids: Vec<&str> = route.intersections.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"gate"));
        assert_eq!(ids.last(), Some(&"dorms"));
        assert_eq!(route.distance, map.graph().path_cost(&route.intersections).unwrap());
        lengths.push(route.distance.distance());
    }

    for length in &lengths {
        assert!((length - lengths[0]).abs() < 1e-6);
    }
}

#[test]
fn test_route_label_lists_roads() {
    let map = campus(RouteConfig::new().with_strategy(RouteStrategy::Dijkstra));
    let route = map.find_path("dorms", "library").unwrap().unwrap();

    // The shortcut is one-way, so the trip back goes round by the gym.
    assert_eq!(route.distance.road_id, "lomb+andrews+quarter-mile");
    assert_eq!(route.distance.to_string(), "lomb+andrews+quarter-mile");
}

#[test]
fn test_auto_strategy_switches_on_distance() {
    let map = campus(RouteConfig::new().with_astar_threshold(100.0));
    let far = map.find_path("gate", "dorms").unwrap().unwrap();
    assert_eq!(far.strategy, RouteStrategy::AStar);

    let map = campus(RouteConfig::new());
    let near = map.find_path("gate", "dorms").unwrap().unwrap();
    assert_eq!(near.strategy, RouteStrategy::Dijkstra);

    assert_eq!(
        RouteStrategy::default().resolve(250_000.0),
        RouteStrategy::AStar
    );
    assert_eq!(RouteStrategy::AStar.resolve(0.0), RouteStrategy::AStar);
}

#[test]
fn test_route_to_self() {
    let map = campus(RouteConfig::new());
    let route = map.find_path("gym", "gym").unwrap().unwrap();
    assert_eq!(route.intersections.len(), 1);
    assert_eq!(route.distance.distance(), 0.0);
}

#[test]
fn test_unreachable_and_unknown_intersections() {
    for strategy in [RouteStrategy::Dijkstra, RouteStrategy::AStar] {
        let map = campus(RouteConfig::new().with_strategy(strategy));
        assert!(map.find_path("gate", "island").unwrap().is_none());

        let err = map.find_path("gate", "moon").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

#[test]
fn test_intersections_compare_by_id() {
    let a = Intersection::new("x", 1.0, 1.0);
    let b = Intersection::new("x", 2.0, 2.0);
    assert_eq!(a, b);
    assert_ne!(a, Intersection::new("y", 1.0, 1.0));
}

#[test]
fn test_serde_round_trip() {
    let intersection = Intersection::new("gate", 43.0845, -77.6749);
    let json = serde_json::to_string(&intersection).unwrap();
    let back: Intersection = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, "gate");
    assert_eq!(back.coordinate, intersection.coordinate);

    let road = Road::new("andrews", 412.5);
    let json = serde_json::to_string(&road).unwrap();
    let back: Road = serde_json::from_str(&json).unwrap();
    assert_eq!(back.road_id, "andrews");
    assert_eq!(back.distance(), 412.5);

    let config = RouteConfig::new().with_expected_intersections(10);
    assert_eq!(config.strategy, RouteStrategy::default());
    assert!(!Road::zero().is_infinite());
}
