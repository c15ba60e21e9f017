//! Incremental assembly of a tree from independently received paths.
//!
//! A downloader that only ever receives individual authentication paths
//! can still reconstruct the whole tree: each verified path populates the
//! slots it touches, and once every slot is known the cache converts back
//! into a full [`MerkleTree`] that can answer proof requests itself.

use std::collections::BTreeMap;

use crate::{
    AuthTreeError, Result,
    hash::Digest,
    height::{height_for_leaf_count, node_count},
    offset::NodeOffset,
    proof::AuthPath,
    tree::MerkleTree,
};

/// A sparsely populated Merkle tree fed by verified authentication paths.
///
/// The cache is seeded with the trusted root (paths never carry the root
/// themselves) and never verifies paths on its own; callers check a path
/// against the trusted root first and merge only paths that passed, or use
/// [`PartialTree::verify_and_merge`]. Confirmed digests of real
/// (non-padding) leaves are additionally tracked in a registry keyed by
/// leaf index.
///
/// There is no internal synchronization; concurrent merges require
/// caller-supplied mutual exclusion.
#[derive(Debug, Clone)]
pub struct PartialTree {
    height: u32,
    leaf_count: usize,
    slots: Vec<Option<Digest>>,
    confirmed: BTreeMap<usize, Digest>,
}

impl PartialTree {
    /// Create a cache for a tree over `leaf_count` real leaves, seeded
    /// with the trusted root digest.
    pub fn new(leaf_count: usize, trusted_root: Digest) -> Result<Self> {
        let height = height_for_leaf_count(leaf_count)?;
        let mut slots = vec![None; node_count(height)];
        slots[0] = Some(trusted_root);
        Ok(PartialTree {
            height,
            leaf_count,
            slots,
            confirmed: BTreeMap::new(),
        })
    }

    /// The tree height this cache was sized for.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of real (non-padding) leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// The trusted root this cache was seeded with.
    pub fn root(&self) -> Digest {
        self.slots[0].expect("seeded at construction")
    }

    /// Merge an already verified path into the cache.
    ///
    /// Re-merging a merged path is a no-op. A path that disagrees with an
    /// already populated slot is rejected with
    /// [`AuthTreeError::ConflictingMerge`]; conflicts are detected before
    /// anything is written, so a failed merge leaves the cache exactly as
    /// it was.
    pub fn merge_path(&mut self, path: &AuthPath) -> Result<()> {
        let entries = path.entries();
        for entry in entries {
            if !entry.offset.in_tree(self.height) {
                return Err(AuthTreeError::MalformedProof(format!(
                    "offset {} is outside a tree of height {}",
                    entry.offset, self.height
                )));
            }
        }
        for entry in entries {
            if let Some(existing) = &self.slots[entry.offset.value()] {
                if existing != &entry.digest {
                    return Err(AuthTreeError::ConflictingMerge {
                        offset: entry.offset.value(),
                    });
                }
            }
        }
        for entry in entries {
            self.slots[entry.offset.value()] = Some(entry.digest);
        }
        // The first two entries are the leaf and its sibling; remember
        // them as confirmed chunk digests unless they are padding slots.
        for entry in entries.iter().take(2) {
            if let Some(index) = entry.offset.leaf_index(self.height) {
                if index < self.leaf_count {
                    self.confirmed.insert(index, entry.digest);
                }
            }
        }
        Ok(())
    }

    /// Verify `path` against the trusted root, then merge it.
    pub fn verify_and_merge(&mut self, path: &AuthPath) -> Result<()> {
        path.verify(&self.root(), self.height)?;
        self.merge_path(path)
    }

    /// The digest cached at `offset`, if any path has supplied it.
    pub fn node(&self, offset: NodeOffset) -> Option<&Digest> {
        self.slots.get(offset.value()).and_then(Option::as_ref)
    }

    /// The confirmed digest of the real leaf at `index`, if any merged
    /// path carried it.
    pub fn confirmed_leaf(&self, index: usize) -> Option<&Digest> {
        self.confirmed.get(&index)
    }

    /// Number of confirmed real-leaf digests.
    pub fn confirmed_leaf_count(&self) -> usize {
        self.confirmed.len()
    }

    /// Number of populated node slots.
    pub fn known_node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// `true` once every node slot is populated.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Convert into a full tree once every slot is known.
    ///
    /// Returns `None` while any slot is still missing. The resulting tree
    /// can serve [`AuthPath::generate`] requests for other peers.
    pub fn to_tree(&self) -> Option<MerkleTree> {
        let nodes: Option<Vec<Digest>> = self.slots.iter().copied().collect();
        nodes.map(|nodes| MerkleTree::from_nodes(self.height, self.leaf_count, nodes))
    }
}
