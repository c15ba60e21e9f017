//! Level-order node offsets and the parity arithmetic between them.
//!
//! The tree is stored as a 0-indexed level-order array: the root is offset
//! 0 and the children of offset `j` sit at `2j + 1` and `2j + 2`. Left
//! children therefore occupy odd offsets and right children even offsets,
//! which is what [`NodeOffset::sibling`] and [`NodeOffset::parent`] rely
//! on.

use core::fmt;

use bincode::{Decode, Encode};

use crate::height::{node_count, padded_leaf_count};

/// A position in the level-order node array.
///
/// The offset itself carries no height, so it is validated against a tree
/// height wherever it crosses a trust boundary (proof verification, cache
/// merges); see [`NodeOffset::in_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode)]
pub struct NodeOffset(usize);

impl NodeOffset {
    /// The root of any tree.
    pub const ROOT: NodeOffset = NodeOffset(0);

    /// Wrap a raw array position.
    pub const fn new(value: usize) -> Self {
        NodeOffset(value)
    }

    /// The raw array position.
    pub const fn value(self) -> usize {
        self.0
    }

    /// `true` for the root offset.
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }

    /// The sibling offset, or `None` for the root.
    ///
    /// Left children are odd, so an even non-root offset looks one to the
    /// left and an odd offset one to the right.
    pub fn sibling(self) -> Option<NodeOffset> {
        if self.0 == 0 {
            None
        } else if self.0 % 2 == 0 {
            Some(NodeOffset(self.0 - 1))
        } else {
            Some(NodeOffset(self.0 + 1))
        }
    }

    /// The parent offset, or `None` for the root.
    pub fn parent(self) -> Option<NodeOffset> {
        if self.0 == 0 {
            None
        } else {
            Some(NodeOffset((self.0 - 1) / 2))
        }
    }

    /// The uncle offset (the parent's sibling), or `None` at the top two
    /// levels where no uncle exists.
    pub fn uncle(self) -> Option<NodeOffset> {
        self.parent().and_then(NodeOffset::sibling)
    }

    /// `true` when the two offsets share a parent.
    pub fn is_sibling_of(self, other: NodeOffset) -> bool {
        let (lo, hi) = if self.0 < other.0 {
            (self.0, other.0)
        } else {
            (other.0, self.0)
        };
        lo % 2 == 1 && hi == lo + 1
    }

    /// `true` when this offset lies within a tree of the given height.
    pub fn in_tree(self, height: u32) -> bool {
        self.0 < node_count(height)
    }

    /// `true` when this offset is a leaf slot in a tree of the given
    /// height.
    pub fn is_leaf(self, height: u32) -> bool {
        self.0 >= padded_leaf_count(height) - 1 && self.in_tree(height)
    }

    /// The leaf index of a leaf offset, or `None` for internal offsets.
    pub fn leaf_index(self, height: u32) -> Option<usize> {
        if self.is_leaf(height) {
            Some(self.0 - (padded_leaf_count(height) - 1))
        } else {
            None
        }
    }

    /// Offset of the leaf slot `index` in a tree of the given height.
    pub fn for_leaf(height: u32, index: usize) -> NodeOffset {
        NodeOffset(padded_leaf_count(height) - 1 + index)
    }
}

impl fmt::Display for NodeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
