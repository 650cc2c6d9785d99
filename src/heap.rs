//! Fibonacci heap.
//!
//! A forest of heap-ordered multi-way trees whose roots live in a circular
//! ring. Consolidation is lazy (delete-minimum only) and decrease-key cuts
//! nodes eagerly, which yields:
//! - O(1) amortized insert and decrease-key
//! - O(log n) amortized delete-minimum (O(n) worst case)
//!
//! Two variants share the implementation: the **standard** variant performs
//! cascading cuts at decrease-key time to bound rank growth, the **naive**
//! variant cuts only the decreased node itself. The variant is fixed at
//! construction.
//!
//! Every mutating operation records an observable step count
//! ([`last_operation_steps`](FibonacciHeap::last_operation_steps)) consumed
//! by the benchmark harness; it plays no role in correctness.

use crate::consolidate::ConsolidationPass;
use crate::error::HeapError;
use crate::node::{self, NodeArena, NodeKey};
use crate::ring::SiblingRing;
use slotmap::SlotMap;

/// Fibonacci heap over identifiers `I` and totally ordered keys `K`.
///
/// The heap owns all nodes through an index-stable arena; callers hold
/// [`NodeKey`] handles. Keys only ever decrease via
/// [`decrease_key`](Self::decrease_key); nodes leave the heap only through
/// [`delete_min`](Self::delete_min), after which their handle goes stale.
///
/// # Example
///
/// ```rust
/// use fibheap::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::standard();
/// let a = heap.insert(0usize, 10);
/// heap.insert(1, 5);
/// assert_eq!(heap.minimum(), Some((&1, &5)));
///
/// heap.decrease_key(a, 1).unwrap();
/// assert_eq!(heap.delete_min(), Some((0, 1)));
/// ```
#[derive(Debug)]
pub struct FibonacciHeap<I, K: Ord> {
    nodes: NodeArena<I, K>,
    roots: SiblingRing,
    minimum: Option<NodeKey>,
    len: usize,
    naive: bool,
    last_op_steps: usize,
}

impl<I, K: Ord> Default for FibonacciHeap<I, K> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<I, K: Ord> FibonacciHeap<I, K> {
    /// Creates an empty heap with cascading cuts enabled.
    pub fn standard() -> Self {
        Self::with_naive_cuts(false)
    }

    /// Creates an empty heap without cascading cuts. Simpler cut logic,
    /// weaker amortized bound.
    pub fn naive() -> Self {
        Self::with_naive_cuts(true)
    }

    fn with_naive_cuts(naive: bool) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: SiblingRing::new(),
            minimum: None,
            len: 0,
            naive,
            last_op_steps: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this heap skips cascading cuts.
    pub fn is_naive(&self) -> bool {
        self.naive
    }

    /// Identifier and key of the current minimum, without removing it.
    pub fn minimum(&self) -> Option<(&I, &K)> {
        self.minimum.map(|m| {
            let node = &self.nodes[m];
            (&node.id, &node.key)
        })
    }

    /// Step count of the last mutating operation: ring insertions for
    /// insert, pairwise merges for delete-minimum, cut/promote operations
    /// for decrease-key. Pure instrumentation; rejected operations leave it
    /// untouched.
    pub fn last_operation_steps(&self) -> usize {
        self.last_op_steps
    }

    /// Inserts a new node and returns its handle. O(1).
    pub fn insert(&mut self, id: I, key: K) -> NodeKey {
        let handle = node::alloc(&mut self.nodes, id, key);
        self.roots.insert(&mut self.nodes, handle);
        self.check_minimum(handle);
        self.len += 1;
        self.last_op_steps = 1;
        handle
    }

    /// Extracts the minimum node, returning its identifier and key.
    /// Amortized O(log n). Returns `None` on an empty heap, mutating
    /// nothing.
    pub fn delete_min(&mut self) -> Option<(I, K)> {
        let min = self.minimum?;
        self.last_op_steps = 0;

        node::release_children(&mut self.nodes, min);
        let kids = std::mem::take(&mut self.nodes[min].children);
        self.roots.remove(&mut self.nodes, min);
        self.roots.merge(&mut self.nodes, kids);

        if self.roots.len() > 1 {
            let mut pass = ConsolidationPass::new(self.len - 1);
            // Merges relink ring neighbors, so the traversal order is
            // captured before any of them run.
            let survivors: Vec<NodeKey> = self.roots.iter(&self.nodes).collect();
            for key in survivors {
                pass.absorb(&mut self.nodes, key);
            }
            let (roots, minimum, steps) = pass.into_roots(&mut self.nodes);
            self.roots = roots;
            self.minimum = minimum;
            self.last_op_steps = steps;
        } else {
            self.minimum = self.roots.handle();
        }

        self.len -= 1;
        let extracted = self
            .nodes
            .remove(min)
            .expect("minimum handle resolves to a live node");
        Some((extracted.id, extracted.key))
    }

    /// Decreases the key of the node behind `handle` to `new_key`.
    /// Amortized O(1).
    ///
    /// Fails without mutating anything if the handle is stale or the key
    /// would not strictly decrease. A non-root is always cut and promoted,
    /// even when heap order would still hold; in the standard variant the
    /// cascading walk then promotes every marked ancestor up to the first
    /// unmarked one.
    pub fn decrease_key(&mut self, handle: NodeKey, new_key: K) -> Result<(), HeapError> {
        let node = self.nodes.get(handle).ok_or(HeapError::InvalidHandle)?;
        if new_key >= node.key {
            return Err(HeapError::KeyNotDecreased);
        }

        self.last_op_steps = 0;
        self.nodes[handle].key = new_key;
        self.check_minimum(handle);

        let Some(parent) = self.nodes[handle].parent else {
            return Ok(());
        };
        self.move_to_roots(handle);
        if !self.naive {
            self.cascade(parent);
        }
        Ok(())
    }

    /// Updates `minimum` if `handle`'s key undercuts the current one.
    fn check_minimum(&mut self, handle: NodeKey) {
        match self.minimum {
            Some(m) if self.nodes[handle].key >= self.nodes[m].key => {}
            _ => self.minimum = Some(handle),
        }
    }

    /// Cuts a non-root out of its parent's child ring and promotes it into
    /// the root ring. Counts one step.
    fn move_to_roots(&mut self, key: NodeKey) {
        let parent = self.nodes[key].parent.expect("only non-roots are promoted");
        let mut children = std::mem::take(&mut self.nodes[parent].children);
        children.remove(&mut self.nodes, key);
        self.nodes[parent].children = children;

        self.nodes[key].become_root();
        self.last_op_steps += 1;
        self.roots.insert(&mut self.nodes, key);
        self.check_minimum(key);
    }

    /// Cascading cut: promote ancestors that already lost a child, then
    /// mark the first surviving non-root ancestor.
    fn cascade(&mut self, start: NodeKey) {
        let mut current = start;
        while self.nodes[current].lost_child && !self.nodes[current].is_root() {
            let parent = self.nodes[current]
                .parent
                .expect("non-root node has a parent");
            self.move_to_roots(current);
            current = parent;
        }
        if !self.nodes[current].is_root() {
            self.nodes[current].lost_child = true;
        }
    }

    /// Checks every structural invariant, panicking on the first violation:
    /// ring integrity (mutually inverse left/right links closing after
    /// exactly `len` steps), parent back-links, min-heap order on every
    /// edge, reachability of all nodes from the root ring, and minimum
    /// correctness. Intended for tests and debug harnesses.
    pub fn validate(&self) {
        match self.minimum {
            Some(min) => {
                assert!(self.nodes[min].is_root(), "minimum must be a root");
                for node in self.nodes.values() {
                    assert!(
                        self.nodes[min].key <= node.key,
                        "minimum must hold the least key in the heap"
                    );
                }
            }
            None => {
                assert!(self.roots.is_empty(), "empty heap must have no roots");
                assert_eq!(self.len, 0);
            }
        }

        let reachable = self.validate_ring(&self.roots, None);
        assert_eq!(reachable, self.len, "every node reachable from the roots");
        assert_eq!(self.nodes.len(), self.len, "arena holds exactly the heap");
    }

    fn validate_ring(&self, ring: &SiblingRing, parent: Option<NodeKey>) -> usize {
        let Some(handle) = ring.handle() else {
            assert_eq!(ring.len(), 0, "empty ring must have zero length");
            return 0;
        };

        let mut visited = 0;
        let mut current = handle;
        for _ in 0..ring.len() {
            let node = &self.nodes[current];
            assert_eq!(self.nodes[node.left].right, current, "left/right inverse");
            assert_eq!(self.nodes[node.right].left, current, "right/left inverse");
            assert_eq!(node.parent, parent, "parent back-link");
            if let Some(p) = parent {
                assert!(self.nodes[p].key <= node.key, "heap order on every edge");
            }
            visited += 1 + self.validate_ring(&node.children, Some(current));
            current = node.right;
        }
        assert_eq!(current, handle, "ring closes after len steps");
        visited
    }
}
