// Unit tests for keyword co-occurrence.
//
// Pair identity must not depend on keyword order, each record contributes
// exactly C(n, 2) pairs, and the graph built from the top pairs carries the
// expected degrees.

use jobscope::dataset::{Dataset, Record};
use jobscope::network::cooccurrence::{analyze, keyword_pairs, pair_counts, KeywordPair};
use jobscope::network::graph::KeywordGraph;
use jobscope::network::render::render_network;

fn kw(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pair(a: &str, b: &str) -> KeywordPair {
    (a.to_string(), b.to_string())
}

// ============================================================
// keyword_pairs: invariants
// ============================================================

#[test]
fn pairs_invariant_to_keyword_order() {
    let orders = [
        ["순찰", "보안", "주차"],
        ["주차", "순찰", "보안"],
        ["보안", "주차", "순찰"],
    ];
    let expected = keyword_pairs(&kw(&orders[0]));
    for order in &orders[1..] {
        assert_eq!(keyword_pairs(&kw(order)), expected);
    }
}

#[test]
fn pair_count_is_n_choose_two() {
    for n in 0..8usize {
        let keywords: Vec<String> = (0..n).map(|i| format!("k{i}")).collect();
        let pairs = keyword_pairs(&keywords);
        assert_eq!(pairs.len(), n * n.saturating_sub(1) / 2, "n = {n}");
    }
}

#[test]
fn pairs_are_stored_sorted() {
    for (a, b) in keyword_pairs(&kw(&["z", "m", "a", "q"])) {
        assert!(a <= b);
    }
}

// ============================================================
// pair_counts / analyze
// ============================================================

#[test]
fn counts_aggregate_across_records() {
    let dataset = Dataset::from_records(vec![
        Record::with_keywords("", "순찰, 보안"),
        Record::with_keywords("", "보안, 순찰, 주차"),
        Record::with_keywords("", "청소"),
    ]);
    let counts = pair_counts(&dataset);
    assert_eq!(counts.get(&pair("보안", "순찰")), 2);
    assert_eq!(counts.get(&pair("보안", "주차")), 1);
    assert_eq!(counts.total(), 4);

    let report = analyze(&dataset, 1, 30);
    assert_eq!(report.top_pairs, vec![(pair("보안", "순찰"), 2)]);
    assert_eq!(report.distinct_pairs, 3);
    assert_eq!(report.graph_pairs.len(), 3);
}

#[test]
fn single_keyword_records_produce_empty_report() {
    let dataset = Dataset::from_records(vec![
        Record::with_keywords("", "청소"),
        Record::with_keywords("", "경비"),
    ]);
    let report = analyze(&dataset, 10, 30);
    assert!(report.is_empty());
    assert!(report.top_pairs.is_empty());
}

// ============================================================
// Graph and rendering
// ============================================================

#[test]
fn graph_from_top_pairs() {
    let graph = KeywordGraph::from_pairs(&[
        (pair("보안", "순찰"), 4),
        (pair("순찰", "주차"), 2),
    ]);
    assert_eq!(graph.nodes().len(), 3);
    assert_eq!(graph.edges().len(), 2);
    assert_eq!(graph.degree("순찰"), Some(2));
    assert_eq!(graph.degrees().iter().sum::<usize>(), 4);
}

#[test]
fn render_writes_svg_file() {
    let dir = std::env::temp_dir().join("jobscope-tests/render");
    let path = dir.join("network.svg");
    let _ = std::fs::remove_file(&path);

    let written = render_network(&[(pair("보안", "순찰"), 4), (pair("순찰", "주차"), 2)], &path).unwrap();
    assert!(written);

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("순찰"));
    assert_eq!(svg.matches("<circle").count(), 3);
}
