//! Heap nodes and the arena that owns them.
//!
//! All nodes live in an index-stable arena (`slotmap::SlotMap`); every
//! structural link — ring neighbors, parent, the heap's minimum — is a
//! plain [`NodeKey`] rather than an owning reference. The arena is the sole
//! owner of every node, so the cyclic left/right/parent graph carries no
//! lifetime ambiguity, and generational keys detect stale handles after a
//! node has been extracted.

use slotmap::{new_key_type, SlotMap};

use crate::ring::SiblingRing;

new_key_type! {
    /// Handle to a node in a [`FibonacciHeap`](crate::FibonacciHeap).
    ///
    /// Keys are generational: once the node is extracted by delete-minimum,
    /// the key stops resolving and `decrease_key` rejects it.
    pub struct NodeKey;
}

pub(crate) type NodeArena<I, K> = SlotMap<NodeKey, Node<I, K>>;

/// A single heap node.
///
/// `left`/`right` are the neighbors within whichever ring currently holds
/// the node (the root ring, or some parent's child ring). The rank (order)
/// of a node is not stored; it is the length of its child ring.
#[derive(Debug)]
pub(crate) struct Node<I, K> {
    pub(crate) id: I,
    pub(crate) key: K,
    pub(crate) left: NodeKey,
    pub(crate) right: NodeKey,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: SiblingRing,
    /// Set when this node has lost a child since it last became a root.
    pub(crate) lost_child: bool,
}

impl<I, K> Node<I, K> {
    /// Rank (a.k.a. order) of the node: the number of children.
    pub(crate) fn rank(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Clears the parent link and the lost-child flag. Moving the node into
    /// the root ring is the caller's job.
    pub(crate) fn become_root(&mut self) {
        self.parent = None;
        self.lost_child = false;
    }
}

/// Allocates a fresh node that is its own left and right neighbor, ready to
/// be spliced into a ring.
pub(crate) fn alloc<I, K>(arena: &mut NodeArena<I, K>, id: I, key: K) -> NodeKey {
    arena.insert_with_key(|this| Node {
        id,
        key,
        left: this,
        right: this,
        parent: None,
        children: SiblingRing::new(),
        lost_child: false,
    })
}

/// Makes `child` a child of `parent`: sets the back link and splices it
/// into the parent's child ring. O(1).
pub(crate) fn adopt_child<I, K>(arena: &mut NodeArena<I, K>, parent: NodeKey, child: NodeKey) {
    debug_assert_ne!(parent, child);
    arena[child].parent = Some(parent);
    // The child ring is taken out of the parent while splicing so the ring
    // can mutate other nodes through the arena.
    let mut children = std::mem::take(&mut arena[parent].children);
    children.insert(arena, child);
    arena[parent].children = children;
}

/// Turns every child of `key` into a root candidate: parent link and
/// lost-child flag cleared. The children stay linked to each other; merging
/// their ring into the root ring is delete-minimum's responsibility.
pub(crate) fn release_children<I, K>(arena: &mut NodeArena<I, K>, key: NodeKey) {
    let Some(first) = arena[key].children.handle() else {
        return;
    };
    let count = arena[key].children.len();
    let mut current = first;
    for _ in 0..count {
        let next = arena[current].right;
        arena[current].become_root();
        current = next;
    }
    debug_assert_eq!(current, first);
}
