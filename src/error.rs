use thiserror::Error;

use crate::hash::Digest;

/// Errors from tree construction, proof handling, and cache merges.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthTreeError {
    /// Tried to build a tree from zero leaves.
    #[error("cannot build a Merkle tree from an empty leaf sequence")]
    EmptyLeaves,
    /// The leaf count exceeds what the maximum tree height can hold.
    #[error("leaf count {count} exceeds the maximum of {max}")]
    TooManyLeaves {
        /// Requested leaf count.
        count: usize,
        /// Largest supported leaf count, `2^MAX_TREE_HEIGHT`.
        max: usize,
    },
    /// A proof was requested for a leaf index outside the padded range.
    #[error("leaf index {index} is out of range (padded leaf count {padded})")]
    IndexOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// The padded leaf count of the tree.
        padded: usize,
    },
    /// A supplied authentication path is structurally invalid.
    ///
    /// This is a protocol violation by whoever produced the path, distinct
    /// from a cryptographic mismatch.
    #[error("malformed proof: {0}")]
    MalformedProof(String),
    /// A well-formed path whose recomputed root differs from the claimed
    /// root. Signals tampered or stale data.
    #[error("root hash mismatch: expected {expected}, computed {computed}")]
    VerificationFailed {
        /// The claimed root the path was checked against.
        expected: Digest,
        /// The root recomputed from the path entries.
        computed: Digest,
    },
    /// A merge found a cache slot already holding a different digest,
    /// which means two accepted proofs disagree about the same node.
    #[error("conflicting digest at offset {offset} during merge")]
    ConflictingMerge {
        /// Level-order offset of the disputed slot.
        offset: usize,
    },
    /// Invalid data at a decoding boundary (hex or proof bytes).
    #[error("invalid data: {0}")]
    InvalidData(String),
}
