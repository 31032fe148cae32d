// Keyword co-occurrence analysis: pair counting, the weighted keyword graph
// built from the most frequent pairs, and its rendered layout.

pub mod cooccurrence;
pub mod graph;
pub mod layout;
pub mod render;
