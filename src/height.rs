use crate::{AuthTreeError, Result};

/// Maximum supported tree height.
///
/// Bounds every shift in the crate so offset arithmetic cannot overflow.
/// `2^32` leaves is far beyond any realistic chunked transfer.
pub const MAX_TREE_HEIGHT: u32 = 32;

/// Smallest height `H` such that `2^H >= n`.
///
/// Computed with bit arithmetic rather than a floating-point logarithm so
/// counts near large powers of two stay exact.
pub fn height_for_leaf_count(n: usize) -> Result<u32> {
    if n == 0 {
        return Err(AuthTreeError::EmptyLeaves);
    }
    let height = usize::BITS - (n - 1).leading_zeros();
    if height > MAX_TREE_HEIGHT {
        return Err(AuthTreeError::TooManyLeaves {
            count: n,
            max: 1usize << MAX_TREE_HEIGHT,
        });
    }
    Ok(height)
}

/// Number of leaf slots after padding to a full tree of `height`, `2^H`.
pub fn padded_leaf_count(height: u32) -> usize {
    1usize << height
}

/// Total number of node slots in a full tree of `height`, `2^(H+1) - 1`.
pub fn node_count(height: u32) -> usize {
    (1usize << (height + 1)) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_for_leaf_count() {
        assert_eq!(height_for_leaf_count(1).unwrap(), 0);
        assert_eq!(height_for_leaf_count(2).unwrap(), 1);
        assert_eq!(height_for_leaf_count(3).unwrap(), 2);
        assert_eq!(height_for_leaf_count(4).unwrap(), 2);
        assert_eq!(height_for_leaf_count(5).unwrap(), 3);
        assert_eq!(height_for_leaf_count(13).unwrap(), 4);
        assert_eq!(height_for_leaf_count(16).unwrap(), 4);
        assert_eq!(height_for_leaf_count(17).unwrap(), 5);
    }

    #[test]
    fn test_height_is_exact_near_powers_of_two() {
        // The floating-point log2 this replaces loses precision exactly here.
        // From height 2 up, 2^h - 1 still needs height h.
        for h in 2..=20u32 {
            let n = 1usize << h;
            assert_eq!(height_for_leaf_count(n).unwrap(), h);
            assert_eq!(height_for_leaf_count(n - 1).unwrap(), h);
            assert_eq!(height_for_leaf_count(n + 1).unwrap(), h + 1);
        }
    }

    #[test]
    fn test_zero_leaves_rejected() {
        assert_eq!(height_for_leaf_count(0), Err(AuthTreeError::EmptyLeaves));
    }

    #[test]
    fn test_leaf_count_beyond_max_height_rejected() {
        let too_many = (1usize << MAX_TREE_HEIGHT) + 1;
        assert!(matches!(
            height_for_leaf_count(too_many),
            Err(AuthTreeError::TooManyLeaves { .. })
        ));
    }

    #[test]
    fn test_padded_and_node_counts() {
        assert_eq!(padded_leaf_count(0), 1);
        assert_eq!(padded_leaf_count(4), 16);
        assert_eq!(node_count(0), 1);
        assert_eq!(node_count(1), 3);
        assert_eq!(node_count(4), 31);
    }
}
