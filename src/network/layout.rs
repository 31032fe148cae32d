// Force-directed (Fruchterman-Reingold) layout.
//
// Every pair of nodes repels with force k²/d; every edge attracts with
// weight·d²/k. Each iteration moves nodes along their net displacement,
// capped by a temperature that cools linearly to zero. Initial positions
// come from a seeded RNG, and the final layout is centered and scaled so
// the largest coordinate magnitude is 1.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::graph::KeywordGraph;

/// Optimal node distance for the network image.
pub const SPRING_K: f64 = 0.9;
/// Layout iterations for the network image.
pub const SPRING_ITERATIONS: usize = 50;
/// Seed for reproducible layouts.
pub const LAYOUT_SEED: u64 = 42;

/// Minimum distance between nodes, so coincident nodes still repel.
const MIN_DISTANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Compute node positions, indexed like `graph.nodes()`.
pub fn spring_layout(graph: &KeywordGraph, k: f64, iterations: usize, seed: u64) -> Vec<Point> {
    let n = graph.nodes().len();
    match n {
        0 => return Vec::new(),
        1 => return vec![Point { x: 0.0, y: 0.0 }],
        _ => {}
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos: Vec<Point> = (0..n)
        .map(|_| Point {
            x: rng.random::<f64>(),
            y: rng.random::<f64>(),
        })
        .collect();

    // Symmetric weighted adjacency
    let mut adjacency = vec![vec![0.0f64; n]; n];
    for edge in graph.edges() {
        if edge.a != edge.b {
            adjacency[edge.a][edge.b] = edge.weight;
            adjacency[edge.b][edge.a] = edge.weight;
        }
    }

    let mut temperature = 0.1;
    let cooling = temperature / (iterations as f64 + 1.0);

    for _ in 0..iterations {
        let mut displacement = vec![Point { x: 0.0, y: 0.0 }; n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i].x - pos[j].x;
                let dy = pos[i].y - pos[j].y;
                let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = k * k / (distance * distance) - adjacency[i][j] * distance / k;
                displacement[i].x += dx * force;
                displacement[i].y += dy * force;
            }
        }

        for (p, d) in pos.iter_mut().zip(&displacement) {
            let mut length = (d.x * d.x + d.y * d.y).sqrt();
            if length < MIN_DISTANCE {
                length = 0.1;
            }
            p.x += d.x * temperature / length;
            p.y += d.y * temperature / length;
        }

        temperature -= cooling;
    }

    rescale(&mut pos);
    pos
}

/// Center positions on the origin and scale them into [-1, 1].
fn rescale(pos: &mut [Point]) {
    let n = pos.len() as f64;
    let mean_x = pos.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = pos.iter().map(|p| p.y).sum::<f64>() / n;

    let mut max_abs: f64 = 0.0;
    for p in pos.iter_mut() {
        p.x -= mean_x;
        p.y -= mean_y;
        max_abs = max_abs.max(p.x.abs()).max(p.y.abs());
    }

    if max_abs > 0.0 {
        for p in pos.iter_mut() {
            p.x /= max_abs;
            p.y /= max_abs;
        }
    }
}
