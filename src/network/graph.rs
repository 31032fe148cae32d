// Undirected weighted keyword graph.
//
// Nodes are keywords in first-seen order, edges are co-occurring pairs
// weighted by their pair count. Adding an edge that already exists
// replaces its weight. A self-loop counts twice toward its node's degree.

use indexmap::IndexSet;

use super::cooccurrence::KeywordPair;

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, Default)]
pub struct KeywordGraph {
    nodes: IndexSet<String>,
    edges: Vec<Edge>,
}

impl KeywordGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from counted pairs.
    pub fn from_pairs(pairs: &[(KeywordPair, usize)]) -> Self {
        let mut graph = Self::new();
        for ((a, b), count) in pairs {
            graph.add_edge(a, b, *count as f64);
        }
        graph
    }

    fn node_id(&mut self, name: &str) -> usize {
        match self.nodes.get_index_of(name) {
            Some(id) => id,
            None => self.nodes.insert_full(name.to_string()).0,
        }
    }

    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) {
        let a = self.node_id(a);
        let b = self.node_id(b);
        let existing = self
            .edges
            .iter_mut()
            .find(|e| (e.a == a && e.b == b) || (e.a == b && e.b == a));
        match existing {
            Some(edge) => edge.weight = weight,
            None => self.edges.push(Edge { a, b, weight }),
        }
    }

    /// Node names, indexed by node id.
    pub fn nodes(&self) -> &IndexSet<String> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Degree of every node, indexed like `nodes()`.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.nodes.len()];
        for edge in &self.edges {
            degrees[edge.a] += 1;
            degrees[edge.b] += 1;
        }
        degrees
    }

    pub fn degree(&self, name: &str) -> Option<usize> {
        let id = self.nodes.get_index_of(name)?;
        Some(self.degrees()[id])
    }
}
