use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::data_structures::ChainedHashMap;
use crate::geo::Coordinate;
use crate::graph::{AdjacencyListGraph, Edge, Graph, Road};
use crate::{Error, Result};

/// Straight-line distance above which [`RouteStrategy::default`] switches
/// to A*. Dijkstra over a few hundred kilometers of streets gets slow.
pub const DEFAULT_ASTAR_THRESHOLD_METERS: f64 = 200_000.0;

/// A street intersection. Identity is the id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intersection {
    pub id: String,
    pub coordinate: Coordinate,
}

impl Intersection {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Intersection {
            id: id.into(),
            coordinate: Coordinate::new(latitude, longitude),
        }
    }
}

impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Intersection {}

impl Hash for Intersection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Defines which search answers a route query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteStrategy {
    /// Always run Dijkstra
    Dijkstra,
    /// Always run A* with the great-circle heuristic
    AStar,
    /// Run A* when the endpoints are further apart than the threshold
    Auto { threshold_meters: f64 },
}

impl Default for RouteStrategy {
    fn default() -> Self {
        RouteStrategy::Auto {
            threshold_meters: DEFAULT_ASTAR_THRESHOLD_METERS,
        }
    }
}

impl RouteStrategy {
    /// Picks a concrete search for endpoints `straight_line` meters apart.
    /// Never returns `Auto`.
    pub fn resolve(self, straight_line: f64) -> RouteStrategy {
        match self {
            RouteStrategy::Auto { threshold_meters } if straight_line > threshold_meters => {
                RouteStrategy::AStar
            }
            RouteStrategy::Auto { .. } => RouteStrategy::Dijkstra,
            concrete => concrete,
        }
    }
}

/// Configuration for a [`StreetMap`]
#[derive(Debug, Clone, PartialEq)]
pub struct RouteConfig {
    /// How route queries are answered
    pub strategy: RouteStrategy,
    /// Number of intersections to size the tables for
    pub expected_intersections: usize,
}

impl Default for RouteConfig {
    fn default() -> Self {
        RouteConfig {
            strategy: RouteStrategy::default(),
            expected_intersections: 0,
        }
    }
}

impl RouteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search strategy
    pub fn with_strategy(mut self, strategy: RouteStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Use [`RouteStrategy::Auto`] with the given threshold
    pub fn with_astar_threshold(mut self, threshold_meters: f64) -> Self {
        self.strategy = RouteStrategy::Auto {
            threshold_meters: threshold_meters.max(0.0),
        };
        self
    }

    pub fn with_expected_intersections(mut self, count: usize) -> Self {
        self.expected_intersections = count;
        self
    }
}

/// A route between two intersections
#[derive(Debug, Clone)]
pub struct Route {
    /// Intersections in travel order, both ends included
    pub intersections: Vec<Intersection>,
    /// Combined road: joined road ids and total length in meters
    pub distance: Road,
    /// Search that produced the route
    pub strategy: RouteStrategy,
}

/// Road network of intersections joined by roads, with route queries.
///
/// Road lengths are the great-circle distance between their ends, which keeps
/// the A* heuristic admissible.
#[derive(Debug, Clone)]
pub struct StreetMap {
    graph: AdjacencyListGraph<Intersection, Road>,
    by_id: ChainedHashMap<String, Intersection>,
    coordinates: ChainedHashMap<Intersection, Coordinate>,
    config: RouteConfig,
}

impl Default for StreetMap {
    fn default() -> Self {
        Self::new()
    }
}

impl StreetMap {
    pub fn new() -> Self {
        Self::with_config(RouteConfig::default())
    }

    pub fn with_config(config: RouteConfig) -> Self {
        let expected = config.expected_intersections;
        StreetMap {
            graph: AdjacencyListGraph::with_capacity(expected),
            by_id: ChainedHashMap::with_capacity(expected),
            coordinates: ChainedHashMap::with_capacity(expected),
            config,
        }
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// The underlying graph
    pub fn graph(&self) -> &AdjacencyListGraph<Intersection, Road> {
        &self.graph
    }

    /// Position of every intersection
    pub fn coordinates(&self) -> &ChainedHashMap<Intersection, Coordinate> {
        &self.coordinates
    }

    /// Adds an intersection. Returns false if the id is already taken.
    pub fn add_intersection(&mut self, id: impl Into<String>, latitude: f64, longitude: f64) -> bool {
        let intersection = Intersection::new(id, latitude, longitude);
        if self.by_id.contains_key(intersection.id.as_str()) {
            return false;
        }

        self.coordinates
            .put(intersection.clone(), intersection.coordinate);
        self.graph.add(intersection.clone());
        self.by_id.put(intersection.id.clone(), intersection);
        true
    }

    pub fn intersection(&self, id: &str) -> Option<&Intersection> {
        self.by_id.get(id)
    }

    /// Adds a two-way road between two intersections and returns it
    pub fn add_road(&mut self, road_id: impl Into<String>, a: &str, b: &str) -> Result<Road> {
        let road = self.add_one_way_road(road_id, a, b)?;
        let (from, to) = (self.lookup(a)?.clone(), self.lookup(b)?.clone());
        self.graph.set(to, from, road.clone())?;
        Ok(road)
    }

    /// Adds a road usable only from `from` to `to` and returns it
    pub fn add_one_way_road(&mut self, road_id: impl Into<String>, from: &str, to: &str) -> Result<Road> {
        let from = self.lookup(from)?.clone();
        let to = self.lookup(to)?.clone();
        let road = Road::new(road_id, from.coordinate.distance_to(&to.coordinate));
        self.graph.set(from, to, road.clone())?;
        Ok(road)
    }

    /// First edge carrying the road with this id
    pub fn road(&self, road_id: &str) -> Option<Edge<Intersection, Road>> {
        self.graph
            .find_edge(|_, _, road| road.road_id == road_id)
    }

    /// Shortest route between two intersections, or `None` if `end` cannot be
    /// reached from `start`
    pub fn find_path(&self, start: &str, end: &str) -> Result<Option<Route>> {
        let start = self.lookup(start)?;
        let end = self.lookup(end)?;

        let straight_line = start.coordinate.distance_to(&end.coordinate);
        let strategy = self.config.strategy.resolve(straight_line);

        let intersections = match strategy {
            RouteStrategy::AStar => {
                log::info!(
                    "using A* for {} -> {} ({:.0} km apart)",
                    start.id,
                    end.id,
                    straight_line / 1000.0
                );
                self.graph.path_astar(start, end, &self.coordinates)?
            }
            _ => self.graph.path(start, end)?,
        };

        if intersections.is_empty() {
            return Ok(None);
        }

        let distance = self.graph.path_cost(&intersections)?;
        Ok(Some(Route {
            intersections,
            distance,
            strategy,
        }))
    }

    fn lookup(&self, id: &str) -> Result<&Intersection> {
        self.by_id
            .get(id)
            .ok_or_else(|| Error::VertexNotFound(id.to_string()))
    }
}
