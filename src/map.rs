//! Skip list map.
//!
//! ```text
//! Level 2: HEAD -----------------------> 7 ------------------------> END
//! Level 1: HEAD --------> 2 -----------> 7 -----------> 10 --------> END
//! Level 0: HEAD -> 1 ---> 2 -> 3 -> 4 -> 7 -> 9 -------> 10 --------> END
//! ```
//!
//! Every level is a strictly increasing subsequence of level 0, and every
//! level ends at the `End` sentinel. All lookups and mutations share one
//! descent: start at the header's top level, move right while the next key
//! sorts before the target, drop a level, repeat down to level 0.
//!
//! # Operations
//!
//! - `insert(key, value)`: O(log n) expected, replaces the value of an
//!   existing key in place
//! - `get(key)` / `get_mut(key)`: O(log n) expected
//! - `remove(key)`: O(log n) expected, no-op when absent
//! - `len()`: O(1)
//! - `iter()` / `cursor()`: ascending order along level 0
//!
//! The header height grows when a taller node arrives and is never reduced.
//! Upper levels left empty by removals point straight at `End`.

use std::fmt;
use std::mem;
use std::ops::{Bound, RangeBounds};

use rustc_hash::FxHashMap;
use smallvec::{SmallVec, smallvec};

use crate::arena::Arena;
use crate::compare::{Comparator, Natural};
use crate::error::{Error, Result};
use crate::iter::{Cursor, IntoIter, Iter, Range};
use crate::level::{Geometric, LevelGenerator};
use crate::node::{Idx, Link, Node};
use crate::options::Options;

/// Per-level predecessors of a search key; `path[i]` is the last node at
/// level `i` whose key sorts before the target.
type Path = SmallVec<[Link; 16]>;

/// An ordered map backed by a skip list.
///
/// `C` orders the keys (see [`Comparator`]); `G` picks node heights.
pub struct SkipMap<K, V, C = Natural, G = Geometric> {
    /// Storage for every real node.
    nodes: Arena<K, V>,
    /// The header's forward links, one per active level.
    head: Vec<Link>,
    /// Number of real nodes.
    len: usize,
    less: C,
    levels: G,
}

impl<K: Ord, V> SkipMap<K, V> {
    /// An empty map ordered by `K`'s `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C: Comparator<K>> SkipMap<K, V, C> {
    /// An empty map ordered by `less`, with default leveling.
    pub fn with_comparator(less: C) -> Self {
        Self::with_level_generator(less, Geometric::default())
    }

    /// An empty map ordered by `less`, with leveling tuned by `options`.
    pub fn with_options(less: C, options: &Options) -> Result<Self> {
        let levels = Geometric::new(options)?;
        log::debug!(
            "new skip list: max height {}, p = {}",
            options.max_height,
            options.probability
        );
        Ok(Self::with_level_generator(less, levels))
    }
}

impl<K, V, C, G> SkipMap<K, V, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    /// An empty map with an explicit level generator.
    pub fn with_level_generator(less: C, levels: G) -> Self {
        SkipMap {
            nodes: Arena::new(),
            head: vec![Link::End],
            len: 0,
            less,
            levels,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels in the header.
    pub fn height(&self) -> usize {
        self.head.len()
    }

    /// The tallest node the level generator may produce.
    pub fn max_height(&self) -> usize {
        self.levels.max_height()
    }

    // --- Lookup ---

    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.find(key)?;
        Some(&self.nodes.get(idx).value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(&mut self.nodes.get_mut(idx).value)
    }

    /// The stored key and its value. The stored key may differ from `key`
    /// when the comparator treats distinct keys as equivalent.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let idx = self.find(key)?;
        let node = self.nodes.get(idx);
        Some((&node.key, &node.value))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.cursor().entry()
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        let pred = self.descend(|_| true, |_, _| {});
        Cursor::new(&self.nodes, pred).entry()
    }

    // --- Mutation ---

    /// Insert `value` under `key`.
    ///
    /// If the key is already present its value is replaced in place and the
    /// old value returned; the stored key and the structure are untouched.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (path, found) = self.search(&key);
        if let Some(idx) = found {
            return Some(mem::replace(&mut self.nodes.get_mut(idx).value, value));
        }

        self.link_new(path, key, value);
        None
    }

    /// Insert `key` with `value` unless an equivalent key is present.
    /// Returns whether the key was new; an existing entry is left untouched.
    pub(crate) fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        let (path, found) = self.search(&key);
        if found.is_some() {
            return false;
        }
        self.link_new(path, key, value);
        true
    }

    /// Allocate a node for `key` and splice it in after the predecessors in
    /// `path`. The generator's height is held to `1..=max_height()`.
    fn link_new(&mut self, mut path: Path, key: K, value: V) {
        let drawn = self.levels.height();
        let height = drawn.clamp(1, self.levels.max_height().max(1));
        if height != drawn {
            log::debug!("level generator returned height {}, using {}", drawn, height);
        }
        if height > self.head.len() {
            log::trace!("header grows from {} to {} levels", self.head.len(), height);
            self.head.resize(height, Link::End);
            path.resize(height, Link::Header);
        }

        let idx = self.nodes.alloc(Node::new(key, value, height));
        for (level, &pred) in path.iter().enumerate().take(height) {
            let next = self.next(pred, level);
            self.nodes.get_mut(idx).forward[level] = next;
            self.set_next(pred, level, Link::Node(idx));
        }

        self.len += 1;
    }

    /// Remove `key`, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove `key`, returning the stored key and its value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let (path, found) = self.search(key);
        let idx = found?;

        let height = self.nodes.get(idx).height();
        for (level, &pred) in path.iter().enumerate().take(height) {
            debug_assert_eq!(self.next(pred, level), Link::Node(idx));
            let next = self.nodes.get(idx).forward[level];
            self.set_next(pred, level, next);
        }

        let node = self.nodes.release(idx);
        self.len -= 1;
        Some((node.key, node.value))
    }

    /// Remove every entry. The header keeps its height.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head.fill(Link::End);
        self.len = 0;
    }

    // --- Iteration ---

    /// A cursor at the smallest key.
    pub fn cursor(&self) -> Cursor<'_, K, V> {
        Cursor::new(&self.nodes, self.head[0])
    }

    /// A cursor at the first key not less than `key`.
    pub fn lower_bound(&self, key: &K) -> Cursor<'_, K, V> {
        let pred = self.descend(|next| self.less.less(next, key), |_, _| {});
        Cursor::new(&self.nodes, self.next(pred, 0))
    }

    /// A cursor at the first key greater than `key`.
    pub fn upper_bound(&self, key: &K) -> Cursor<'_, K, V> {
        let pred = self.descend(|next| !self.less.less(key, next), |_, _| {});
        Cursor::new(&self.nodes, self.next(pred, 0))
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.cursor(), self.len)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Entries whose keys fall within `bounds`, in ascending order. A range
    /// whose start sorts after its end is empty.
    pub fn range<T: RangeBounds<K>>(&self, bounds: T) -> Range<'_, K, V, C, T> {
        let cursor = match bounds.start_bound() {
            Bound::Included(start) => self.lower_bound(start),
            Bound::Excluded(start) => self.upper_bound(start),
            Bound::Unbounded => self.cursor(),
        };
        Range::new(cursor, bounds, &self.less)
    }

    // --- Invariant checking ---

    /// Check the structure: level 0 strictly increasing, `len` long and
    /// covering every stored node, every upper level a strictly increasing subsequence of level 0 that
    /// includes exactly the nodes tall enough for it, and the header within
    /// the generator's cap.
    pub fn verify(&self) -> Result<()> {
        let max = self.levels.max_height();
        if self.head.len() > max.max(1) {
            return Err(Error::HeightOutOfRange {
                height: self.head.len(),
                max,
            });
        }

        // Level 0 fixes each node's rank.
        let mut rank: FxHashMap<Idx, usize> = FxHashMap::default();
        let mut heights = Vec::with_capacity(self.len);
        let mut prev: Option<&K> = None;
        let mut at = self.head[0];
        while let Link::Node(idx) = at {
            if !self.nodes.is_live(idx) || rank.contains_key(&idx) {
                return Err(Error::Stray { level: 0 });
            }
            let node = self.nodes.get(idx);
            if node.height() > self.head.len() {
                return Err(Error::HeaderTooShort {
                    node: node.height(),
                    header: self.head.len(),
                });
            }
            if let Some(prev) = prev {
                if !self.less.less(prev, &node.key) {
                    return Err(Error::Unordered {
                        level: 0,
                        position: heights.len(),
                    });
                }
            }
            rank.insert(idx, heights.len());
            heights.push(node.height());
            prev = Some(&node.key);
            at = node.forward[0];
        }
        if at.is_header() {
            return Err(Error::Stray { level: 0 });
        }
        if heights.len() != self.len {
            return Err(Error::LenMismatch {
                len: self.len,
                reachable: heights.len(),
            });
        }
        if self.nodes.live() != heights.len() {
            return Err(Error::Unreachable {
                live: self.nodes.live(),
                reachable: heights.len(),
            });
        }

        for level in 1..self.head.len() {
            let mut last: Option<usize> = None;
            let mut visited = 0;
            let mut at = self.head[level];
            while let Link::Node(idx) = at {
                let Some(&position) = rank.get(&idx) else {
                    return Err(Error::Stray { level });
                };
                if heights[position] <= level {
                    return Err(Error::Stray { level });
                }
                if last.is_some_and(|last| position <= last) {
                    return Err(Error::Unordered {
                        level,
                        position: visited,
                    });
                }
                last = Some(position);
                visited += 1;
                at = self.nodes.get(idx).forward[level];
            }
            if at.is_header() {
                return Err(Error::Stray { level });
            }
            let expected = heights.iter().filter(|&&height| height > level).count();
            if visited != expected {
                return Err(Error::Skipped { level });
            }
        }

        Ok(())
    }

    // --- Traversal helpers ---

    /// The link after `at` on `level`. `End` has no successor but itself.
    #[inline]
    fn next(&self, at: Link, level: usize) -> Link {
        match at {
            Link::Header => self.head[level],
            Link::Node(idx) => self.nodes.get(idx).forward[level],
            Link::End => Link::End,
        }
    }

    fn set_next(&mut self, at: Link, level: usize, to: Link) {
        match at {
            Link::Header => self.head[level] = to,
            Link::Node(idx) => self.nodes.get_mut(idx).forward[level] = to,
            Link::End => unreachable!("the end sentinel has no forward links"),
        }
    }

    /// Descend from the header's top level to level 0, moving right while
    /// `advance` accepts the next key. `End` is never passed. `visit` sees
    /// the node each level stops at. Returns the level-0 stopping point.
    fn descend(
        &self,
        mut advance: impl FnMut(&K) -> bool,
        mut visit: impl FnMut(usize, Link),
    ) -> Link {
        let mut at = Link::Header;
        for level in (0..self.head.len()).rev() {
            loop {
                let next = self.next(at, level);
                match next.index() {
                    Some(idx) if advance(&self.nodes.get(idx).key) => at = next,
                    _ => break,
                }
            }
            visit(level, at);
        }
        at
    }

    /// The node holding `key`, if any.
    fn find(&self, key: &K) -> Option<Idx> {
        let pred = self.descend(|next| self.less.less(next, key), |_, _| {});
        self.matching(self.next(pred, 0), key)
    }

    /// Like `find`, also recording the predecessor at every level.
    fn search(&self, key: &K) -> (Path, Option<Idx>) {
        let mut path: Path = smallvec![Link::Header; self.head.len()];
        let pred = self.descend(
            |next| self.less.less(next, key),
            |level, at| path[level] = at,
        );
        let found = self.matching(self.next(pred, 0), key);
        (path, found)
    }

    fn matching(&self, candidate: Link, key: &K) -> Option<Idx> {
        let idx = candidate.index()?;
        if self.less.equivalent(&self.nodes.get(idx).key, key) {
            Some(idx)
        } else {
            None
        }
    }
}

impl<K: Ord, V> Default for SkipMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C, G> fmt::Debug for SkipMap<K, V, C, G>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Comparator<K>,
    G: LevelGenerator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SkipMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C, G> Extend<(K, V)> for SkipMap<K, V, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, C, G> IntoIterator for &'a SkipMap<K, V, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C, G> IntoIterator for SkipMap<K, V, C, G> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let first = self.head[0];
        IntoIter::new(self.nodes, first, self.len)
    }
}
