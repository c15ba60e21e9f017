//! Fully materialized Merkle tree construction.

use crate::{
    Result,
    events::{EventLevel, EventSink, NoopSink},
    hash::{Digest, combine},
    height::{height_for_leaf_count, node_count, padded_leaf_count},
    offset::NodeOffset,
};

/// A fully materialized Merkle tree over a sequence of leaf digests.
///
/// Nodes are stored as a 0-indexed level-order array of size `2^(H+1) - 1`
/// where `H` is the tree height; offset 0 is the root and the last `2^H`
/// slots are the leaves, left to right. Every internal slot `j` holds
/// `combine(tree[2j+1], tree[2j+2])`.
///
/// When the real leaf count is not a power of two the remaining leaf slots
/// hold a copy of the last real leaf's digest. Padding with a repeated
/// leaf (rather than a distinguishable marker) lets two sequences that
/// share a padded suffix collide on the root; kept as-is for compatibility
/// with roots already in circulation.
///
/// A built tree is immutable and safe to share read-only across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    height: u32,
    leaf_count: usize,
    nodes: Vec<Digest>,
}

impl MerkleTree {
    /// Build a tree from an ordered, non-empty sequence of leaf digests.
    ///
    /// Deterministic: identical leaves always yield an identical array and
    /// root.
    pub fn build(leaves: &[Digest]) -> Result<Self> {
        Self::build_with_events(leaves, &NoopSink)
    }

    /// Build a tree, reporting lifecycle events to the given sink.
    pub fn build_with_events<E: EventSink>(leaves: &[Digest], events: &E) -> Result<Self> {
        let height = height_for_leaf_count(leaves.len())?;
        let padded = padded_leaf_count(height);
        let first_leaf = padded - 1;

        let mut nodes = vec![Digest::ZERO; node_count(height)];
        nodes[first_leaf..first_leaf + leaves.len()].copy_from_slice(leaves);
        let last = leaves[leaves.len() - 1];
        for slot in nodes[first_leaf + leaves.len()..].iter_mut() {
            *slot = last;
        }

        // Children always sit at higher offsets than their parent, so a
        // reverse sweep over the internal slots fills each level before
        // the one above it.
        for j in (0..first_leaf).rev() {
            nodes[j] = combine(&nodes[2 * j + 1], &nodes[2 * j + 2]);
        }

        let tree = MerkleTree {
            height,
            leaf_count: leaves.len(),
            nodes,
        };
        events.on_event(
            EventLevel::Info,
            &format!(
                "merkle tree created: height {}, {} leaves ({} padded), root {}",
                height,
                tree.leaf_count,
                padded,
                tree.root()
            ),
        );
        Ok(tree)
    }

    /// Reassemble a tree from an already populated node array.
    ///
    /// Used by the partial-tree cache once every slot is known; `nodes`
    /// must already satisfy the parent-combination invariant.
    pub(crate) fn from_nodes(height: u32, leaf_count: usize, nodes: Vec<Digest>) -> Self {
        debug_assert_eq!(nodes.len(), node_count(height));
        MerkleTree {
            height,
            leaf_count,
            nodes,
        }
    }

    /// The tree height `H`. A single-leaf tree has height 0.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of real (non-padding) leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// The number of leaf slots after padding, `2^H`.
    pub fn padded_leaf_count(&self) -> usize {
        padded_leaf_count(self.height)
    }

    /// The root digest.
    pub fn root(&self) -> Digest {
        self.nodes[0]
    }

    /// Compare the root against a candidate digest.
    pub fn compare_root(&self, candidate: &Digest) -> bool {
        &self.root() == candidate
    }

    /// The digest stored at `offset`. Callers guarantee bounds.
    pub(crate) fn node(&self, offset: NodeOffset) -> Digest {
        self.nodes[offset.value()]
    }
}
