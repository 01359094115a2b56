use core::fmt;
use std::collections::BTreeMap;


/// A counted multiset.
///
/// Keys are stored with a positive count; [`len`](Bag::len) is the sum of
/// all counts. Backed by an ordered map so that iteration, rendering, and
/// [`mode`](Bag::mode) tie-breaks are deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Bag<T: Ord> {
    counts: BTreeMap<T, usize>,
    size: usize,
}

impl<T: Ord> Bag<T> {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            size: 0,
        }
    }

    /// Total number of entries, summed over all keys.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the bag holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The count stored for `value`, zero if absent.
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Add a single occurrence of `value`.
    pub fn add(&mut self, value: T) {
        self.add_count(value, 1);
    }

    /// Add `count` occurrences of `value`. Adding zero occurrences is a
    /// no-op and does not insert the key.
    pub fn add_count(&mut self, value: T, count: usize) {
        if count == 0 {
            return;
        }

        *self.counts.entry(value).or_insert(0) += count;
        self.size += count;
    }

    /// Remove every occurrence of `value`, returning the count it held.
    pub fn remove(&mut self, value: &T) -> usize {
        let count = self.counts.remove(value).unwrap_or(0);
        self.size -= count;
        count
    }

    /// A key with the maximum count, and that count. `None` when empty.
    ///
    /// When several keys tie for the maximum, the smallest key is returned.
    /// Callers must not rely on which of the tied keys wins.
    pub fn mode(&self) -> Option<(&T, usize)> {
        let mut best: Option<(&T, usize)> = None;
        for (value, &count) in &self.counts {
            if best.map_or(true, |(_, freq)| count > freq) {
                best = Some((value, count));
            }
        }
        best
    }

    /// Iterate over `(key, count)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(value, &count)| (value, count))
    }
}

impl<T: Ord + fmt::Display> Bag<T> {
    /// Multi-line rendering, with `prefix` prepended to every entry line.
    pub fn prefixed_string(&self, prefix: &str) -> String {
        use fmt::Write as _;

        let mut out = format!("Bag(len = {})", self.size);
        for (value, count) in self.iter() {
            // Writing into a String cannot fail.
            let _ = write!(out, "\n{prefix}    {value}: {count}");
        }
        out
    }
}

impl<T: Ord + fmt::Display> fmt::Display for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefixed_string(""))
    }
}

impl<T: Ord> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        for value in iter {
            bag.add(value);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_count() {
        let mut bag = Bag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.count(&'a'), 0);

        bag.add('a');
        bag.add('a');
        bag.add_count('b', 3);
        bag.add_count('c', 0);

        assert_eq!(bag.len(), 5);
        assert_eq!(bag.count(&'a'), 2);
        assert_eq!(bag.count(&'b'), 3);
        assert_eq!(bag.count(&'c'), 0);
    }

    #[test]
    fn remove_drops_all_occurrences() {
        let mut bag: Bag<char> = ['a', 'a', 'b'].into_iter().collect();

        assert_eq!(bag.remove(&'a'), 2);
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.count(&'a'), 0);

        // Removing an absent key does nothing.
        assert_eq!(bag.remove(&'z'), 0);
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn mode_picks_most_frequent() {
        let mut bag = Bag::new();
        assert_eq!(bag.mode(), None);

        bag.add_count('a', 2);
        bag.add_count('b', 5);
        assert_eq!(bag.mode(), Some((&'b', 5)));
    }

    #[test]
    fn mode_tie_break_is_deterministic() {
        let bag: Bag<char> = ['b', 'a', 'b', 'a'].into_iter().collect();
        assert_eq!(bag.mode(), Some((&'a', 2)));
    }

    #[test]
    fn prefixed_string_renders_entries() {
        let bag: Bag<char> = ['a', 'b', 'a'].into_iter().collect();
        assert_eq!(
            bag.prefixed_string("  "),
            "Bag(len = 3)\n      a: 2\n      b: 1"
        );
        assert_eq!(bag.to_string(), "Bag(len = 3)\n    a: 2\n    b: 1");
    }
}
