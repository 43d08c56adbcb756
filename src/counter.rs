use ahash::AHashMap as HashMap;
use std::hash::Hash;

/// Occurrence counts of keys within a window.
///
/// An absent key has count zero. Entries are dropped as soon as their count
/// reaches zero, and equality compares only non-zero entries, so two counters
/// are equal exactly when they describe the same multiset.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K: Hash + Eq> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Adds one occurrence of `key` and returns its new count.
    pub fn increment(&mut self, key: K) -> usize {
        self.total += 1;
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    /// Removes one occurrence of `key` and returns its new count.
    ///
    /// Decrementing an absent key is a no-op returning 0.
    pub fn decrement(&mut self, key: &K) -> usize {
        let Some(count) = self.counts.get_mut(key) else {
            return 0;
        };
        *count -= 1;
        self.total -= 1;
        let remaining = *count;
        if remaining == 0 {
            self.counts.remove(key);
        }
        remaining
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of keys with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }

    /// Iterates over `(key, count)` pairs with non-zero counts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }
}

impl<K: Hash + Eq> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> PartialEq for FrequencyCounter<K> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.iter().all(|(key, count)| other.count(key) == count)
    }
}

impl<K: Hash + Eq> Eq for FrequencyCounter<K> {}

impl<K: Hash + Eq> Extend<K> for FrequencyCounter<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.increment(key);
        }
    }
}

impl<K: Hash + Eq> FromIterator<K> for FrequencyCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}
