//! Insertion-ordered counter.
//!
//! Frequency rankings sort stably on top of this, so ties keep first-seen
//! order and the output never depends on hash iteration.

use ahash::AHashMap;

#[derive(Debug, Clone)]
pub struct Tally<V = usize> {
    slots: AHashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> Default for Tally<V> {
    fn default() -> Self {
        Self {
            slots: AHashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<V: Default> Tally<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, created with `V::default()` on first sight.
    pub fn entry(&mut self, key: &str) -> &mut V {
        let idx = match self.slots.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.slots.insert(key.to_string(), i);
                self.entries.push((key.to_string(), V::default()));
                i
            }
        };
        &mut self.entries[idx].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by `key` descending; ties keep insertion order.
    pub fn into_ranked_by<K: Ord>(self, key: impl Fn(&V) -> K) -> Vec<(String, V)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| key(&b.1).cmp(&key(&a.1)));
        entries
    }
}

impl Tally<usize> {
    pub fn bump(&mut self, key: &str) {
        *self.entry(key) += 1;
    }

    pub fn into_ranked(self) -> Vec<(String, usize)> {
        self.into_ranked_by(|n| *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_count_then_first_seen() {
        let mut t: Tally = Tally::new();
        for k in ["b", "a", "c", "a", "c", "d"] {
            t.bump(k);
        }
        let ranked = t.into_ranked();
        let keys: Vec<&str> = ranked.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "c", "b", "d"]);
        assert_eq!(ranked[0].1, 2);
    }

    #[test]
    fn custom_values_rank_by_projection() {
        let mut t: Tally<(usize, usize)> = Tally::new();
        t.entry("x").0 += 1;
        t.entry("y").1 += 3;
        t.entry("x").1 += 1;
        let ranked = t.into_ranked_by(|(a, b)| a + b);
        assert_eq!(ranked[0].0, "y");
        assert_eq!(ranked[1].1, (1, 1));
    }

    #[test]
    fn empty_tally() {
        let t: Tally = Tally::new();
        assert!(t.is_empty());
        assert!(t.into_ranked().is_empty());
    }
}
