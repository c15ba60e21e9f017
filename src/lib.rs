//! Merkle hash trees with authentication paths for chunked data transfer.
//!
//! Given an ordered sequence of chunk digests this crate derives a single
//! root digest and produces compact, independently verifiable proofs that a
//! specific chunk belongs to that root, so a downloader can validate each
//! chunk against one trusted hash before accepting it from a peer.
//!
//! # Core types
//!
//! - [`MerkleTree`] — fully materialized level-order tree (build, root,
//!   path generation).
//! - [`streaming_root`] — O(log n)-memory equivalent of
//!   [`MerkleTree::build`], producing a bit-identical root.
//! - [`AuthPath`] — authentication path for a single leaf (generate,
//!   verify, encode/decode).
//! - [`PartialTree`] — sparse tree cache assembled incrementally from
//!   paths received piecewise.
//!
//! # Observability
//!
//! Construction and verification report lifecycle events through an
//! injected [`EventSink`]; [`NoopSink`] discards them and [`TracingSink`]
//! forwards them to the `tracing` facade. Correctness never depends on a
//! sink.

#![warn(missing_docs)]

mod cache;
mod error;
mod events;
mod hash;
/// Integer-exact height and padded-size arithmetic.
pub(crate) mod height;
mod offset;
mod proof;
mod stream;
mod tree;
mod verify;

#[cfg(test)]
mod tests;

pub use cache::PartialTree;
pub use error::AuthTreeError;
pub use events::{EventLevel, EventSink, NoopSink, TracingSink};
pub use hash::{DIGEST_LEN, Digest, combine};
pub use height::{MAX_TREE_HEIGHT, height_for_leaf_count, node_count, padded_leaf_count};
pub use offset::NodeOffset;
pub use proof::{AuthPath, PathEntry};
pub use stream::{streaming_root, streaming_root_with_events};
pub use tree::MerkleTree;

/// Alias for `core::result::Result<T, AuthTreeError>`.
pub type Result<T> = core::result::Result<T, AuthTreeError>;
