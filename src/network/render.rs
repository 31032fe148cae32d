// SVG rendering of the keyword network.
//
// Nodes are sky-blue circles whose area grows with degree, edges are gray
// lines whose width grows with pair count, and every node is labeled with
// its keyword. The layout's [-1, 1] square is mapped onto the canvas with
// a margin for labels.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::cooccurrence::KeywordPair;
use super::graph::KeywordGraph;
use super::layout::{spring_layout, Point, LAYOUT_SEED, SPRING_ITERATIONS, SPRING_K};

pub const GRAPH_TITLE: &str = "작업 군집 네트워크 그래프";

const WIDTH: f64 = 1600.0;
const HEIGHT: f64 = 1200.0;
const MARGIN: f64 = 120.0;
/// Marker area per unit of degree, in square pixels
const AREA_PER_DEGREE: f64 = 100.0;

/// Build the graph from the top pairs, lay it out and write the SVG.
///
/// Returns `Ok(false)` without writing anything when there are no pairs.
pub fn render_network(pairs: &[(KeywordPair, usize)], path: &Path) -> Result<bool> {
    let graph = KeywordGraph::from_pairs(pairs);
    if graph.is_empty() {
        return Ok(false);
    }

    let positions = spring_layout(&graph, SPRING_K, SPRING_ITERATIONS, LAYOUT_SEED);
    let svg = to_svg(&graph, &positions);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        path = %path.display(),
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "Rendered keyword network"
    );
    Ok(true)
}

/// Render a laid-out graph as an SVG document.
pub fn to_svg(graph: &KeywordGraph, positions: &[Point]) -> String {
    let to_canvas = |p: &Point| {
        let x = MARGIN + (p.x + 1.0) / 2.0 * (WIDTH - 2.0 * MARGIN);
        // SVG y grows downward
        let y = MARGIN + (1.0 - p.y) / 2.0 * (HEIGHT - 2.0 * MARGIN);
        (x, y)
    };

    let max_weight = graph
        .edges()
        .iter()
        .map(|e| e.weight)
        .fold(0.0f64, f64::max)
        .max(1.0);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="60" font-size="20" text-anchor="middle" font-family="sans-serif">{}</text>"#,
        WIDTH / 2.0,
        escape(GRAPH_TITLE)
    );

    let _ = writeln!(svg, r#"  <g stroke="gray" stroke-opacity="0.8">"#);
    for edge in graph.edges() {
        let (x1, y1) = to_canvas(&positions[edge.a]);
        let (x2, y2) = to_canvas(&positions[edge.b]);
        let width = 1.0 + 3.0 * edge.weight / max_weight;
        let _ = writeln!(
            svg,
            r#"    <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke-width="{width:.2}"/>"#
        );
    }
    let _ = writeln!(svg, "  </g>");

    let degrees = graph.degrees();
    let _ = writeln!(svg, r#"  <g fill="skyblue" fill-opacity="0.8">"#);
    for (id, degree) in degrees.iter().enumerate() {
        let (x, y) = to_canvas(&positions[id]);
        let radius = (*degree as f64 * AREA_PER_DEGREE / std::f64::consts::PI).sqrt();
        let _ = writeln!(
            svg,
            r#"    <circle cx="{x:.1}" cy="{y:.1}" r="{radius:.1}"/>"#
        );
    }
    let _ = writeln!(svg, "  </g>");

    let _ = writeln!(
        svg,
        r#"  <g font-size="12" font-family="sans-serif" text-anchor="middle" dominant-baseline="central">"#
    );
    for (id, name) in graph.nodes().iter().enumerate() {
        let (x, y) = to_canvas(&positions[id]);
        let _ = writeln!(svg, r#"    <text x="{x:.1}" y="{y:.1}">{}</text>"#, escape(name));
    }
    let _ = writeln!(svg, "  </g>");
    svg.push_str("</svg>\n");
    svg
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
