//! Cursors and iterators over level 0.

use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use crate::arena::Arena;
use crate::compare::Comparator;
use crate::node::Link;

/// A forward-only position in a list.
///
/// A cursor sits either on a real node or on the end sentinel. Each call to
/// `SkipMap::cursor` yields a fresh one; a cursor never moves backwards.
/// Cursors are `Copy`: a copy is an independent position, so saving one and
/// walking it again revisits the same nodes.
///
/// ```
/// use skipmap::SkipMap;
///
/// let map: SkipMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
/// let mut cursor = map.cursor();
/// while cursor.has_next() {
///     println!("{:?} => {:?}", cursor.key(), cursor.value());
///     cursor.advance();
/// }
/// assert!(cursor.is_end());
/// assert_eq!(cursor.key(), None);
/// ```
pub struct Cursor<'a, K, V> {
    nodes: &'a Arena<K, V>,
    at: Link,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(nodes: &'a Arena<K, V>, at: Link) -> Self {
        Cursor { nodes, at }
    }

    /// True while the cursor is on a real node.
    pub fn has_next(&self) -> bool {
        !self.at.is_end()
    }

    /// True once the cursor has reached the end sentinel.
    pub fn is_end(&self) -> bool {
        self.at.is_end()
    }

    /// Where the cursor currently sits.
    pub fn link(&self) -> Link {
        self.at
    }

    pub fn key(&self) -> Option<&'a K> {
        self.entry().map(|(key, _)| key)
    }

    pub fn value(&self) -> Option<&'a V> {
        self.entry().map(|(_, value)| value)
    }

    /// The key and value under the cursor, `None` at the end.
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        let idx = self.at.index()?;
        let node = self.nodes.get(idx);
        Some((&node.key, &node.value))
    }

    /// Step to the next node. Does nothing at the end.
    pub fn advance(&mut self) {
        if let Some(idx) = self.at.index() {
            self.at = self.nodes.get(idx).forward[0];
        }
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

/// Entries of a map in ascending key order.
pub struct Iter<'a, K, V> {
    cursor: Cursor<'a, K, V>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(cursor: Cursor<'a, K, V>, remaining: usize) -> Self {
        Iter { cursor, remaining }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.cursor.entry()?;
        self.cursor.advance();
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Entries of a map within a key range, in ascending order.
pub struct Range<'a, K, V, C, T> {
    cursor: Cursor<'a, K, V>,
    bounds: T,
    less: &'a C,
}

impl<'a, K, V, C, T> Range<'a, K, V, C, T> {
    pub(crate) fn new(cursor: Cursor<'a, K, V>, bounds: T, less: &'a C) -> Self {
        Range {
            cursor,
            bounds,
            less,
        }
    }
}

impl<'a, K, V, C, T> Iterator for Range<'a, K, V, C, T>
where
    C: Comparator<K>,
    T: RangeBounds<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.cursor.entry()?;
        let inside = match self.bounds.end_bound() {
            Bound::Included(end) => !self.less.less(end, key),
            Bound::Excluded(end) => self.less.less(key, end),
            Bound::Unbounded => true,
        };
        if !inside {
            return None;
        }
        self.cursor.advance();
        Some((key, value))
    }
}

impl<K, V, C, T> FusedIterator for Range<'_, K, V, C, T>
where
    C: Comparator<K>,
    T: RangeBounds<K>,
{
}

/// Owned entries of a consumed map, in ascending key order.
pub struct IntoIter<K, V> {
    nodes: Arena<K, V>,
    at: Link,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(nodes: Arena<K, V>, at: Link, remaining: usize) -> Self {
        IntoIter {
            nodes,
            at,
            remaining,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.at.index()?;
        let node = self.nodes.release(idx);
        self.at = node.forward[0];
        self.remaining -= 1;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

#[cfg(test)]
mod tests {
    use crate::SkipMap;

    fn sample() -> SkipMap<i32, i32> {
        [4, 1, 2, 9, 10, 7, 3].into_iter().map(|k| (k, k * 10)).collect()
    }

    #[test]
    fn cursor_walks_in_order() {
        let map = sample();
        let mut cursor = map.cursor();
        let mut keys = Vec::new();
        while cursor.has_next() {
            keys.push(*cursor.key().unwrap());
            assert_eq!(cursor.value(), Some(&(cursor.key().unwrap() * 10)));
            cursor.advance();
        }
        assert_eq!(keys, vec![1, 2, 3, 4, 7, 9, 10]);
    }

    #[test]
    fn advancing_at_end_stays_at_end() {
        let map: SkipMap<i32, i32> = SkipMap::new();
        let mut cursor = map.cursor();
        assert!(cursor.is_end());
        cursor.advance();
        assert!(cursor.is_end());
        assert_eq!(cursor.entry(), None);
    }

    #[test]
    fn cursors_are_independent() {
        let map = sample();
        let mut a = map.cursor();
        let b = a;
        a.advance();
        assert_eq!(a.key(), Some(&2));
        assert_eq!(b.key(), Some(&1));
        assert_eq!(map.cursor().key(), Some(&1));
    }

    #[test]
    fn iter_reports_exact_size() {
        let map = sample();
        let mut iter = map.iter();
        assert_eq!(iter.len(), 7);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.count(), 5);
    }

    #[test]
    fn ranges_respect_both_bounds() {
        let map = sample();
        let keys = |r: Vec<(&i32, &i32)>| r.into_iter().map(|(k, _)| *k).collect::<Vec<_>>();
        assert_eq!(keys(map.range(2..7).collect()), vec![2, 3, 4]);
        assert_eq!(keys(map.range(2..=7).collect()), vec![2, 3, 4, 7]);
        assert_eq!(keys(map.range(5..).collect()), vec![7, 9, 10]);
        assert_eq!(keys(map.range(..3).collect()), vec![1, 2]);
        assert_eq!(keys(map.range(..).collect()), vec![1, 2, 3, 4, 7, 9, 10]);
        assert_eq!(keys(map.range(11..).collect()), Vec::<i32>::new());
        assert_eq!(keys(map.range(8..5).collect()), Vec::<i32>::new());
    }

    #[test]
    fn ranges_with_excluded_start() {
        use std::ops::Bound::{Excluded, Included};
        let map = sample();
        let keys: Vec<i32> = map
            .range((Excluded(4), Included(9)))
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(keys, vec![7, 9]);
    }

    #[test]
    fn into_iter_yields_owned_entries() {
        let map: SkipMap<String, usize> = ["pear", "apple", "fig"]
            .into_iter()
            .map(|s| (s.to_string(), s.len()))
            .collect();
        let entries: Vec<(String, usize)> = map.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("apple".to_string(), 5),
                ("fig".to_string(), 3),
                ("pear".to_string(), 4)
            ]
        );
    }

    #[test]
    fn partially_consumed_into_iter_drops_the_rest() {
        let map: SkipMap<i32, String> = (0..10).map(|k| (k, k.to_string())).collect();
        let mut iter = map.into_iter();
        assert_eq!(iter.next(), Some((0, "0".to_string())));
        assert_eq!(iter.len(), 9);
    }
}
