//! Nodes and the links between them.
//!
//! A node owns one forward link per level it participates in. Links are
//! tagged rather than compared by identity: the two sentinels are explicit
//! variants, and real nodes are addressed by their arena index.

use smallvec::{SmallVec, smallvec};

/// Arena index type. u32 keeps a `Link` at 8 bytes.
pub(crate) type Idx = u32;

/// Forward links stored inline for the common short nodes.
pub(crate) type Forward = SmallVec<[Link; 2]>;

/// A reference to a position in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    /// The header sentinel, preceding every real node.
    Header,
    /// The end sentinel, terminating every level.
    End,
    /// A real node, by arena index.
    Node(Idx),
}

impl Link {
    /// True only for the end sentinel.
    #[inline]
    pub fn is_end(self) -> bool {
        matches!(self, Link::End)
    }

    /// True only for the header sentinel.
    #[inline]
    pub fn is_header(self) -> bool {
        matches!(self, Link::Header)
    }

    #[inline]
    pub(crate) fn index(self) -> Option<Idx> {
        match self {
            Link::Node(idx) => Some(idx),
            Link::Header | Link::End => None,
        }
    }
}

/// A key/value slot in the arena.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    /// `forward[i]` is the next node at level `i`, or `Link::End`.
    pub forward: Forward,
}

impl<K, V> Node<K, V> {
    /// Create a node of the given height with every level pointing at `End`.
    pub fn new(key: K, value: V, height: usize) -> Self {
        debug_assert!(height >= 1, "node height must be at least 1");
        Node {
            key,
            value,
            forward: smallvec![Link::End; height],
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.forward.len()
    }
}
