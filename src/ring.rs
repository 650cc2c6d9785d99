//! Circular doubly-linked sibling rings.
//!
//! A ring represents either the heap's root forest or one node's child set.
//! The ring itself stores only a handle to an arbitrary member plus the
//! member count; the left/right links live in the nodes, so every operation
//! takes the arena explicitly. All structural operations are O(1):
//! insertion, removal of an arbitrary member, and splice-merging two rings
//! by reconnecting the four boundary links.
//!
//! In a circular ring a sole member is its own left and right neighbor, and
//! there is no head or tail — the handle is just an entry point. Iteration
//! walks `right` links starting from the handle and is not safe across
//! structural mutation of the ring; callers that mutate while traversing
//! (the consolidation pass) must snapshot the member keys first.

use crate::node::{NodeArena, NodeKey};

/// A circular doubly-linked ring of nodes.
#[derive(Debug, Default, Clone)]
pub(crate) struct SiblingRing {
    handle: Option<NodeKey>,
    len: usize,
}

impl SiblingRing {
    pub(crate) fn new() -> Self {
        Self {
            handle: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.handle.is_none()
    }

    /// An arbitrary member of the ring, or `None` if the ring is empty.
    pub(crate) fn handle(&self) -> Option<NodeKey> {
        self.handle
    }

    /// Splices `key` next to the handle, or makes it the sole member.
    pub(crate) fn insert<I, K>(&mut self, arena: &mut NodeArena<I, K>, key: NodeKey) {
        match self.handle {
            None => {
                arena[key].left = key;
                arena[key].right = key;
                self.handle = Some(key);
            }
            Some(handle) => {
                let right = arena[handle].right;
                arena[key].left = handle;
                arena[key].right = right;
                arena[handle].right = key;
                arena[right].left = key;
            }
        }
        self.len += 1;
    }

    /// Splices `other` into this ring by reconnecting the four boundary
    /// links. Which side's handle survives is unspecified. O(1).
    pub(crate) fn merge<I, K>(&mut self, arena: &mut NodeArena<I, K>, other: SiblingRing) {
        self.len += other.len;
        let Some(b) = other.handle else {
            return;
        };
        let Some(a) = self.handle else {
            self.handle = Some(b);
            return;
        };
        let a_right = arena[a].right;
        let b_right = arena[b].right;
        arena[a].right = b_right;
        arena[b_right].left = a;
        arena[b].right = a_right;
        arena[a_right].left = b;
    }

    /// Unlinks `key` from its neighbors. If `key` was the handle, the
    /// handle moves to its former right neighbor. Returns whether the ring
    /// became empty.
    pub(crate) fn remove<I, K>(&mut self, arena: &mut NodeArena<I, K>, key: NodeKey) -> bool {
        debug_assert!(self.handle.is_some());
        self.len -= 1;

        let right = arena[key].right;
        if right == key {
            // Sole member.
            debug_assert_eq!(self.len, 0);
            self.handle = None;
            return true;
        }

        let left = arena[key].left;
        arena[left].right = right;
        arena[right].left = left;
        arena[key].left = key;
        arena[key].right = key;
        if self.handle == Some(key) {
            self.handle = Some(right);
        }
        false
    }

    /// Lazy traversal of the ring members in ring order, starting from the
    /// handle. The ring must not be structurally mutated while iterating.
    pub(crate) fn iter<'a, I, K>(&self, arena: &'a NodeArena<I, K>) -> RingIter<'a, I, K> {
        RingIter {
            arena,
            next: self.handle,
            remaining: self.len,
        }
    }
}

pub(crate) struct RingIter<'a, I, K> {
    arena: &'a NodeArena<I, K>,
    next: Option<NodeKey>,
    remaining: usize,
}

impl<I, K> Iterator for RingIter<'_, I, K> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = Some(self.arena[current].right);
        Some(current)
    }
}

impl<I, K> ExactSizeIterator for RingIter<'_, I, K> {
    fn len(&self) -> usize {
        self.remaining
    }
}
