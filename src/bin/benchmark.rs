use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use street_routing::{EdgeWeight, Graph, RouteConfig, RouteStrategy, StreetMap};

// Function to generate a jittered lat/lon grid of intersections joined to their
// right and lower neighbours
fn generate_street_grid(rows: usize, cols: usize, rng: &mut StdRng) -> StreetMap {
    let config = RouteConfig::new()
        .with_strategy(RouteStrategy::Dijkstra)
        .with_expected_intersections(rows * cols);
    let mut map = StreetMap::with_config(config);

    for r in 0..rows {
        for c in 0..cols {
            let latitude = 43.0 + r as f64 * 0.005 + rng.gen_range(-0.001..0.001);
            let longitude = -77.0 + c as f64 * 0.005 + rng.gen_range(-0.001..0.001);
            map.add_intersection(format!("i{}_{}", r, c), latitude, longitude);
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            let here = format!("i{}_{}", r, c);
            if c + 1 < cols {
                map.add_road(format!("r{}_{}e", r, c), &here, &format!("i{}_{}", r, c + 1))
                    .expect("failed to add east road");
            }
            if r + 1 < rows {
                map.add_road(format!("r{}_{}s", r, c), &here, &format!("i{}_{}", r + 1, c))
                    .expect("failed to add south road");
            }
        }
    }

    map
}

fn main() {
    env_logger::init();

    let sizes = [(20, 20), (50, 50), (100, 100)];
    let queries = 20;
    let mut rng = StdRng::seed_from_u64(42);

    println!("{:<12} {:>14} {:>14} {:>10}", "grid", "dijkstra", "a*", "speedup");
    println!("{}", "-".repeat(54));

    for (rows, cols) in sizes {
        let map = generate_street_grid(rows, cols, &mut rng);
        let graph = map.graph();
        let vertices = graph.vertices();

        let mut dijkstra_total = Duration::ZERO;
        let mut astar_total = Duration::ZERO;

        for _ in 0..queries {
            let from = &vertices[rng.gen_range(0..vertices.len())];
            let to = &vertices[rng.gen_range(0..vertices.len())];

            let start = Instant::now();
            let dijkstra_path = graph.path(from, to).expect("dijkstra failed");
            dijkstra_total += start.elapsed();

            let start = Instant::now();
            let astar_path = graph
                .path_astar(from, to, map.coordinates())
                .expect("a* failed");
            astar_total += start.elapsed();

            let dijkstra_cost = graph.path_cost(&dijkstra_path).expect("invalid path").weight();
            let astar_cost = graph.path_cost(&astar_path).expect("invalid path").weight();
            if (dijkstra_cost - astar_cost).abs() > 1e-6 {
                println!(
                    "WARNING: cost mismatch {} -> {}: dijkstra {:.3}, a* {:.3}",
                    from.id, to.id, dijkstra_cost, astar_cost
                );
            }
        }

        let speedup = dijkstra_total.as_secs_f64() / astar_total.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<12} {:>14?} {:>14?} {:>9.2}x",
            format!("{}x{}", rows, cols),
            dijkstra_total / queries,
            astar_total / queries,
            speedup
        );
    }
}
