//! Key lookup table built from the inner side of a join.

use std::collections::HashMap;
use std::hash::Hash;

/// Groups elements by key, keeping insertion order inside each group.
///
/// Groups live in a flat `Vec` and the map stores group indices, so a cursor
/// can hold a position into a group without borrowing the table.
pub struct Lookup<K, U> {
    index: HashMap<K, usize>,
    groups: Vec<Vec<U>>,
    rows: usize,
}

impl<K, U> Lookup<K, U>
where
    K: Hash + Eq,
{
    /// Drain `items` completely, grouping by `key`.
    pub fn build<I, F>(items: I, key: F, capacity: usize) -> Self
    where
        I: IntoIterator<Item = U>,
        F: Fn(&U) -> K,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<Vec<U>> = Vec::new();
        // Capacity is a hint only; an unreservable one is dropped.
        if index.try_reserve(capacity).is_ok() {
            let _ = groups.try_reserve(capacity);
        }
        let mut rows = 0;

        for elem in items {
            rows += 1;
            let k = key(&elem);
            let next_group = groups.len();
            let slot = *index.entry(k).or_insert(next_group);
            if slot == next_group {
                groups.push(Vec::new());
            }
            groups[slot].push(elem);
        }

        Self {
            index,
            groups,
            rows,
        }
    }

    /// Index of the group for `key`, if any element carried it.
    pub fn group_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn group(&self, idx: usize) -> &[U] {
        &self.groups[idx]
    }

    #[cfg(test)]
    fn get(&self, key: &K) -> Option<&[U]> {
        self.group_of(key).map(|idx| self.group(idx))
    }

    /// Number of inner elements drained into the table.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of distinct keys.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_keep_insertion_order() {
        let lut = Lookup::build(vec![(1, "a"), (2, "b"), (1, "c"), (3, "d"), (1, "e")], |e| e.0, 0);
        assert_eq!(lut.rows(), 5);
        assert_eq!(lut.num_groups(), 3);
        assert_eq!(lut.get(&1), Some(&[(1, "a"), (1, "c"), (1, "e")][..]));
        assert_eq!(lut.get(&2), Some(&[(2, "b")][..]));
        assert_eq!(lut.get(&4), None);
    }

    #[test]
    fn test_empty_build() {
        let lut: Lookup<i32, i32> = Lookup::build(Vec::new(), |e| *e, 16);
        assert_eq!(lut.rows(), 0);
        assert_eq!(lut.get(&0), None);
    }

    #[test]
    fn test_build_ignores_unreservable_capacity() {
        let lut = Lookup::build(vec![(1, 'a'), (1, 'b')], |e| e.0, usize::MAX);
        assert_eq!(lut.num_groups(), 1);
        assert_eq!(lut.get(&1), Some(&[(1, 'a'), (1, 'b')][..]));
    }
}
