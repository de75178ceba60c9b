use indexmap::IndexMap;
use std::hash::Hash;

/// Occurrence counts that remember the order values were first seen.
///
/// Both [`Tally::mode`] and [`Tally::ranked`] break ties in favour of the value
/// encountered first.
#[derive(Debug, Clone)]
pub struct Tally<K>(IndexMap<K, usize>);

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most frequent value and its count, or `None` if nothing was counted.
    pub fn mode(&self) -> Option<(K, usize)> {
        // `max_by` keeps the last of equal maxima, so walk newest first.
        self.0
            .iter()
            .rev()
            .max_by(|a, b| a.1.cmp(b.1))
            .map(|(value, count)| (value.clone(), *count))
    }

    /// All values by descending count.
    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut ranked: Vec<(K, usize)> = self
            .0
            .iter()
            .map(|(value, count)| (value.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl<K: Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counts = IndexMap::new();
        for value in iter {
            *counts.entry(value).or_default() += 1;
        }
        Self(counts)
    }
}
