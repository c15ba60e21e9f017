//! Authentication path generation and the proof wire format.
//!
//! A path is a value type with no ties to the tree it came from: once
//! generated it can be shipped to any verifier, which needs only the
//! claimed root and the tree height (see
//! [`AuthPath::verify`]).

use bincode::{Decode, Encode};

use crate::{AuthTreeError, Result, hash::Digest, offset::NodeOffset, tree::MerkleTree};

/// One `(offset, digest)` entry of an authentication path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct PathEntry {
    /// Level-order offset the digest claims to occupy.
    pub offset: NodeOffset,
    /// The claimed digest at that offset.
    pub digest: Digest,
}

/// An authentication path for a single leaf.
///
/// Entry 0 is the leaf's own `(offset, digest)`, entry 1 its sibling, and
/// entries `2..=H` the successive uncles up toward (but not including) the
/// root. A path for a tree of height `H` has exactly `H + 1` entries.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct AuthPath {
    pub(crate) entries: Vec<PathEntry>,
}

impl AuthPath {
    /// Generate the authentication path for `leaf_index`.
    ///
    /// `leaf_index` addresses the padded leaf range, so indices in
    /// `[leaf_count, padded_leaf_count)` prove padding slots. Indices at or
    /// beyond the padded leaf count are rejected with
    /// [`AuthTreeError::IndexOutOfRange`].
    pub fn generate(tree: &MerkleTree, leaf_index: usize) -> Result<Self> {
        let height = tree.height();
        let padded = tree.padded_leaf_count();
        if leaf_index >= padded {
            return Err(AuthTreeError::IndexOutOfRange {
                index: leaf_index,
                padded,
            });
        }

        let own = NodeOffset::for_leaf(height, leaf_index);
        let mut entries = Vec::with_capacity(height as usize + 1);
        entries.push(PathEntry {
            offset: own,
            digest: tree.node(own),
        });

        // Climb one level per iteration, recording the sibling of the
        // current ancestor. The root itself is never part of the path.
        let mut current = own;
        while !current.is_root() {
            let sibling = current.sibling().expect("non-root has a sibling");
            entries.push(PathEntry {
                offset: sibling,
                digest: tree.node(sibling),
            });
            current = current.parent().expect("non-root has a parent");
        }

        Ok(AuthPath { entries })
    }

    /// The path entries, leaf first.
    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    /// Number of entries, `height + 1` for the originating tree.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the path has no entries (only possible for paths built
    /// by hand or decoded from hostile bytes).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The leaf's own entry, if present.
    pub fn leaf_entry(&self) -> Option<&PathEntry> {
        self.entries.first()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| AuthTreeError::InvalidData(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// The decode limit caps hostile length prefixes; structural and
    /// cryptographic validation still happens in [`AuthPath::verify`].
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 64 * 1024 }>();
        let (path, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| AuthTreeError::MalformedProof(format!("decode error: {}", e)))?;
        if path.entries.is_empty() {
            return Err(AuthTreeError::MalformedProof("path has no entries".into()));
        }
        Ok(path)
    }
}
