//! Node storage.
//!
//! Nodes live in a growable table and refer to each other by index, so
//! splicing a node in or out only rewrites integers. Released slots go on a
//! free list and are reused by the next allocation.

use crate::node::{Idx, Node};

/// Null index marker; also the capacity limit.
const NULL: Idx = Idx::MAX;

pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    /// Released slot indices, reused LIFO.
    free: Vec<Idx>,
}

impl<K, V> Arena<K, V> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a node and return its index.
    pub fn alloc(&mut self, node: Node<K, V>) -> Idx {
        if let Some(idx) = self.free.pop() {
            debug_assert!(self.slots[idx as usize].is_none());
            self.slots[idx as usize] = Some(node);
            return idx;
        }
        assert!(
            self.slots.len() < NULL as usize,
            "arena is full ({} nodes)",
            self.slots.len()
        );
        let idx = self.slots.len() as Idx;
        self.slots.push(Some(node));
        idx
    }

    /// Take a node out of the arena, freeing its slot.
    ///
    /// # Panics
    ///
    /// If `idx` does not refer to a live node.
    pub fn release(&mut self, idx: Idx) -> Node<K, V> {
        match self.slots[idx as usize].take() {
            Some(node) => {
                self.free.push(idx);
                node
            }
            None => panic!("released a vacant slot {}", idx),
        }
    }

    /// # Panics
    ///
    /// If `idx` does not refer to a live node.
    #[inline]
    pub fn get(&self, idx: Idx) -> &Node<K, V> {
        match &self.slots[idx as usize] {
            Some(node) => node,
            None => panic!("dangling link to slot {}", idx),
        }
    }

    #[inline]
    pub fn get_mut(&mut self, idx: Idx) -> &mut Node<K, V> {
        match &mut self.slots[idx as usize] {
            Some(node) => node,
            None => panic!("dangling link to slot {}", idx),
        }
    }

    /// Whether `idx` refers to a live node.
    pub fn is_live(&self, idx: Idx) -> bool {
        matches!(self.slots.get(idx as usize), Some(Some(_)))
    }

    /// Number of live nodes.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
