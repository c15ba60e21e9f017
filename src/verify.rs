//! Self-contained authentication path verification.
//!
//! Verification replays a path bottom-up with no access to the full tree:
//! only the claimed root and the tree height are needed. Structural
//! defects (wrong length, out-of-range offsets, entries that are not
//! siblings at some level) are [`AuthTreeError::MalformedProof`] — a
//! protocol violation by whoever supplied the path — while a clean replay
//! that lands on a different root is
//! [`AuthTreeError::VerificationFailed`], meaning tampered or stale data.

use crate::{
    AuthTreeError, Result,
    events::{EventLevel, EventSink, NoopSink},
    hash::{Digest, combine},
    height::MAX_TREE_HEIGHT,
    proof::{AuthPath, PathEntry},
};

impl AuthPath {
    /// Verify this path against a claimed root for a tree of `height`.
    pub fn verify(&self, claimed_root: &Digest, height: u32) -> Result<()> {
        self.verify_with_events(claimed_root, height, &NoopSink)
    }

    /// Verify, reporting the outcome to the given event sink.
    pub fn verify_with_events<E: EventSink>(
        &self,
        claimed_root: &Digest,
        height: u32,
        events: &E,
    ) -> Result<()> {
        let result = self.replay(claimed_root, height);
        match &result {
            Ok(()) => events.on_event(
                EventLevel::Debug,
                &format!("path verified against root {}", claimed_root),
            ),
            Err(err) => events.on_event(
                EventLevel::Warn,
                &format!("path verification failed: {}", err),
            ),
        }
        result
    }

    fn replay(&self, claimed_root: &Digest, height: u32) -> Result<()> {
        if height > MAX_TREE_HEIGHT {
            return Err(AuthTreeError::MalformedProof(format!(
                "height {} exceeds the maximum of {}",
                height, MAX_TREE_HEIGHT
            )));
        }
        let expected_len = height as usize + 1;
        if self.entries.len() != expected_len {
            return Err(AuthTreeError::MalformedProof(format!(
                "path has {} entries, expected {} for height {}",
                self.entries.len(),
                expected_len,
                height
            )));
        }
        for entry in &self.entries {
            if !entry.offset.in_tree(height) {
                return Err(AuthTreeError::MalformedProof(format!(
                    "offset {} is outside a tree of height {}",
                    entry.offset, height
                )));
            }
        }
        let own = self.entries[0];
        if !own.offset.is_leaf(height) {
            return Err(AuthTreeError::MalformedProof(format!(
                "entry 0 at offset {} is not a leaf slot",
                own.offset
            )));
        }

        // Entry 0 sits at the leaf level, and every combine moves up one
        // level, so after `height` combines the accumulator is the root.
        let mut acc = own;
        for next in &self.entries[1..] {
            if !acc.offset.is_sibling_of(next.offset) {
                return Err(AuthTreeError::MalformedProof(format!(
                    "offset {} is not the sibling of {}",
                    next.offset, acc.offset
                )));
            }
            let (left, right) = if acc.offset < next.offset {
                (acc, *next)
            } else {
                (*next, acc)
            };
            let parent = acc.offset.parent().expect("sibling pairs sit below the root");
            acc = PathEntry {
                offset: parent,
                digest: combine(&left.digest, &right.digest),
            };
        }

        if &acc.digest == claimed_root {
            Ok(())
        } else {
            Err(AuthTreeError::VerificationFailed {
                expected: *claimed_root,
                computed: acc.digest,
            })
        }
    }
}
