//! Rank-indexed consolidation pass for delete-minimum.
//!
//! After the minimum's children join the root ring, the forest may hold
//! several trees of the same rank. The pass feeds every root into a table
//! indexed by rank, pairwise-linking colliding trees (the root with the
//! smaller key wins, the loser becomes its child) until every surviving
//! tree occupies a distinct slot. The retry after a link is an explicit
//! loop rather than recursion, so a long chain of rank collisions costs no
//! stack. The surviving slots become the new root ring.

use crate::node::{self, NodeArena, NodeKey};
use crate::ring::SiblingRing;

/// One consolidation pass. Create, [`absorb`](Self::absorb) every root,
/// then [`into_roots`](Self::into_roots).
pub(crate) struct ConsolidationPass {
    slots: Vec<Option<NodeKey>>,
    steps: usize,
}

impl ConsolidationPass {
    /// `node_count` is the number of nodes that remain in the heap; the
    /// table is sized to a safe upper bound on the maximum rank.
    pub(crate) fn new(node_count: usize) -> Self {
        let capacity = 3 * (node_count.max(2) as f64).log2().ceil() as usize + 2;
        Self {
            slots: vec![None; capacity],
            steps: 0,
        }
    }

    /// Places `key` into the table, linking it with same-rank occupants
    /// until it lands in an empty slot. A link bumps the winner's rank by
    /// one, so the combined tree retries at the next slot up.
    pub(crate) fn absorb<I, K: Ord>(&mut self, arena: &mut NodeArena<I, K>, key: NodeKey) {
        let mut current = key;
        loop {
            let rank = arena[current].rank();
            if rank >= self.slots.len() {
                // The naive variant's rank bound is weaker than the
                // standard one, so the logarithmic sizing is not a hard
                // invariant there.
                self.slots.resize(rank + 1, None);
            }
            match self.slots[rank].take() {
                None => {
                    self.slots[rank] = Some(current);
                    return;
                }
                Some(occupant) => {
                    current = link(arena, current, occupant);
                    self.steps += 1;
                }
            }
        }
    }

    /// Builds the post-consolidation root ring out of the occupied slots
    /// and returns it together with the new minimum and the number of
    /// pairwise links performed.
    pub(crate) fn into_roots<I, K: Ord>(
        self,
        arena: &mut NodeArena<I, K>,
    ) -> (SiblingRing, Option<NodeKey>, usize) {
        let ConsolidationPass { slots, steps } = self;
        let mut roots = SiblingRing::new();
        let mut minimum: Option<NodeKey> = None;
        for key in slots.into_iter().flatten() {
            roots.insert(arena, key);
            minimum = match minimum {
                Some(m) if arena[m].key <= arena[key].key => Some(m),
                _ => Some(key),
            };
        }
        (roots, minimum, steps)
    }
}

/// Links two equal-rank roots: the strictly smaller key wins and adopts the
/// other as a child. On equal keys the slot occupant wins and the incoming
/// root becomes the child — the tie-break is fixed, not incidental.
fn link<I, K: Ord>(arena: &mut NodeArena<I, K>, incoming: NodeKey, occupant: NodeKey) -> NodeKey {
    if arena[incoming].key < arena[occupant].key {
        node::adopt_child(arena, incoming, occupant);
        incoming
    } else {
        node::adopt_child(arena, occupant, incoming);
        occupant
    }
}
