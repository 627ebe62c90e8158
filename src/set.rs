//! Skip list set, a `SkipMap` with unit values.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeBounds;

use crate::compare::{Comparator, Natural};
use crate::error::Result;
use crate::iter::{IntoIter, Iter};
use crate::level::{Geometric, LevelGenerator};
use crate::map::SkipMap;
use crate::options::Options;

/// An ordered set backed by a skip list.
///
/// ```
/// use skipmap::SkipSet;
///
/// let mut set = SkipSet::new();
/// assert!(set.insert("b"));
/// assert!(set.insert("a"));
/// assert!(!set.insert("a"));
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![&"a", &"b"]);
/// ```
pub struct SkipSet<K, C = Natural, G = Geometric> {
    map: SkipMap<K, (), C, G>,
}

impl<K: Ord> SkipSet<K> {
    pub fn new() -> Self {
        SkipSet {
            map: SkipMap::new(),
        }
    }
}

impl<K, C: Comparator<K>> SkipSet<K, C> {
    pub fn with_comparator(less: C) -> Self {
        SkipSet {
            map: SkipMap::with_comparator(less),
        }
    }

    pub fn with_options(less: C, options: &Options) -> Result<Self> {
        Ok(SkipSet {
            map: SkipMap::with_options(less, options)?,
        })
    }
}

impl<K, C, G> SkipSet<K, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    pub fn with_level_generator(less: C, levels: G) -> Self {
        SkipSet {
            map: SkipMap::with_level_generator(less, levels),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Add `key`. Returns false, leaving the stored key in place, if an
    /// equivalent key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        self.map.insert_if_absent(key, ())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// The stored key equivalent to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.map.get_key_value(key).map(|(key, _)| key)
    }

    /// Remove `key`. Returns whether it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.map.remove(key).is_some()
    }

    /// Remove and return the stored key equivalent to `key`.
    pub fn take(&mut self, key: &K) -> Option<K> {
        self.map.remove_entry(key).map(|(key, _)| key)
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn first(&self) -> Option<&K> {
        self.map.first().map(|(key, _)| key)
    }

    pub fn last(&self) -> Option<&K> {
        self.map.last().map(|(key, _)| key)
    }

    pub fn iter(&self) -> SetIter<'_, K> {
        SetIter {
            inner: self.map.iter(),
        }
    }

    pub fn range<T: RangeBounds<K>>(&self, bounds: T) -> impl Iterator<Item = &K> {
        self.map.range(bounds).map(|(key, _)| key)
    }

    pub fn verify(&self) -> Result<()> {
        self.map.verify()
    }
}

impl<K: Ord> Default for SkipSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C, G> fmt::Debug for SkipSet<K, C, G>
where
    K: fmt::Debug,
    C: Comparator<K>,
    G: LevelGenerator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for SkipSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = SkipSet::new();
        set.extend(iter);
        set
    }
}

impl<K, C, G> Extend<K> for SkipSet<K, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K, C, G> IntoIterator for &'a SkipSet<K, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    type Item = &'a K;
    type IntoIter = SetIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C, G> IntoIterator for SkipSet<K, C, G> {
    type Item = K;
    type IntoIter = SetIntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIter {
            inner: self.map.into_iter(),
        }
    }
}

/// Keys of a set in ascending order.
pub struct SetIter<'a, K> {
    inner: Iter<'a, K, ()>,
}

impl<'a, K> Iterator for SetIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for SetIter<'_, K> {}

impl<K> FusedIterator for SetIter<'_, K> {}

/// Owned keys of a consumed set in ascending order.
pub struct SetIntoIter<K> {
    inner: IntoIter<K, ()>,
}

impl<K> Iterator for SetIntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for SetIntoIter<K> {}

impl<K> FusedIterator for SetIntoIter<K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_novelty() {
        let mut set = SkipSet::new();
        assert!(set.insert(3));
        assert!(set.insert(1));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 2);
        assert_eq!(set.verify(), Ok(()));
    }

    #[test]
    fn remove_reports_presence() {
        let mut set: SkipSet<i32> = (0..5).collect();
        assert!(set.remove(&2));
        assert!(!set.remove(&2));
        assert!(!set.contains(&2));
        assert_eq!(set.take(&4), Some(4));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn equivalent_keys_keep_the_first() {
        let mut set = SkipSet::with_comparator(|a: &&str, b: &&str| {
            a.to_lowercase() < b.to_lowercase()
        });
        assert!(set.insert("Apple"));
        assert!(!set.insert("APPLE"));
        assert_eq!(set.get(&"apple"), Some(&"Apple"));
    }

    #[test]
    fn first_last_and_range() {
        let set: SkipSet<u8> = [9, 3, 7, 1].into_iter().collect();
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&9));
        assert_eq!(set.range(2..8).copied().collect::<Vec<_>>(), vec![3, 7]);
    }

    #[test]
    fn owned_iteration_and_debug() {
        let set: SkipSet<i32> = [2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2}");
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }
}
