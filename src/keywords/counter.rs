// Stable frequency counter.
//
// Ranks items by descending count. Items with equal counts keep the order in
// which they were first seen, so the ranking is fully determined by the
// input sequence (no hash-order dependence).

use std::hash::Hash;

use indexmap::IndexMap;

/// Count occurrences of each item, remembering first-seen order.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<T> {
    counts: IndexMap<T, usize>,
    total: usize,
}

impl<T> Default for FrequencyCounter<T> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
            total: 0,
        }
    }
}

impl<T: Hash + Eq + Clone> FrequencyCounter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        self.total += 1;
        *self.counts.entry(item).or_insert(0) += 1;
    }

    pub fn get(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct items seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of items added, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `n` most frequent items, highest count first.
    pub fn most_common(&self, n: usize) -> Vec<(T, usize)> {
        let mut ranked: Vec<(&T, &usize)> = self.counts.iter().collect();
        // sort_by is stable: ties stay in first-seen order
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(item, &count)| (item.clone(), count))
            .collect()
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for FrequencyCounter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = Self::new();
        for item in iter {
            counter.add(item);
        }
        counter
    }
}

/// Count `items` and return the `n` most frequent.
pub fn most_common<T, I>(items: I, n: usize) -> Vec<(T, usize)>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect::<FrequencyCounter<T>>().most_common(n)
}
