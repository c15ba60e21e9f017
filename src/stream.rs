//! Streaming root computation with O(log n) memory.
//!
//! Equivalent to [`MerkleTree::build`](crate::MerkleTree::build) but never
//! materializes the node array: leaves are pushed as height-0 frames onto
//! a stack, and whenever the two top frames have equal height they
//! collapse into a frame one level higher, exactly like carry propagation
//! in binary addition. Over the padded (power-of-two) sequence the stack
//! holds frames of strictly decreasing height except transiently before a
//! collapse, so its depth never exceeds the tree height.

use crate::{
    Result,
    events::{EventLevel, EventSink, NoopSink},
    hash::{Digest, combine},
    height::{height_for_leaf_count, padded_leaf_count},
};

/// A stack frame: the root of a completed subtree awaiting its
/// right-hand sibling.
#[derive(Debug, Clone, Copy)]
struct Frame {
    height: u32,
    digest: Digest,
}

/// Compute the Merkle root of `leaves` without materializing the tree.
///
/// Produces exactly the same root as
/// [`MerkleTree::build`](crate::MerkleTree::build) for the same input,
/// including the duplicate-last-leaf padding.
pub fn streaming_root(leaves: &[Digest]) -> Result<Digest> {
    streaming_root_with_events(leaves, &NoopSink)
}

/// Streaming root computation, reporting lifecycle events to the sink.
pub fn streaming_root_with_events<E: EventSink>(leaves: &[Digest], events: &E) -> Result<Digest> {
    let height = height_for_leaf_count(leaves.len())?;
    if height == 0 {
        let root = leaves[0];
        events.on_event(
            EventLevel::Info,
            &format!("streaming root computed: height 0, root {}", root),
        );
        return Ok(root);
    }

    let padded = padded_leaf_count(height);
    let last = leaves[leaves.len() - 1];
    let mut feed = leaves
        .iter()
        .copied()
        .chain(core::iter::repeat(last))
        .take(padded);

    let mut stack: Vec<Frame> = Vec::with_capacity(height as usize + 1);
    loop {
        let collapsible = match stack.as_slice() {
            [.., below, top] => below.height == top.height,
            _ => false,
        };
        if !collapsible {
            // At most 2^H pushes happen before the root collapse fires.
            let digest = feed.next().expect("padded feed holds 2^H leaves");
            stack.push(Frame { height: 0, digest });
            continue;
        }
        let top = stack.pop().expect("two frames checked");
        let below = stack.pop().expect("two frames checked");
        // `below` entered the stack first, so it is the left sibling.
        let digest = combine(&below.digest, &top.digest);
        let merged_height = top.height + 1;
        if merged_height == height {
            events.on_event(
                EventLevel::Info,
                &format!("streaming root computed: height {}, root {}", height, digest),
            );
            return Ok(digest);
        }
        stack.push(Frame {
            height: merged_height,
            digest,
        });
    }
}
