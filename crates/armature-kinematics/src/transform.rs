//! Per-segment transformation table.
//!
//! One 4×4 homogeneous matrix per chain segment, in chain order, built
//! once at initialization. `table[i]` is the fixed transform across
//! segment `i`; forward-kinematics consumers compose these matrices.

use nalgebra::Matrix4;
use tracing::debug;

use crate::chain::KinematicChain;
use crate::frame::pose_to_matrix;

/// Ordered, index-aligned table of per-segment homogeneous transforms.
///
/// Invariant: `len() == chain.num_segments()` for the chain it was built
/// from. The table is never resized after construction; rebuilding
/// requires a full re-initialization with a new chain.
#[derive(Debug, Clone)]
pub struct TransformationTable {
    matrices: Vec<Matrix4<f64>>,
}

impl TransformationTable {
    /// Build the table for `chain`, one matrix per segment in chain order.
    ///
    /// Always succeeds for a well-formed chain (post-condition of chain
    /// construction).
    pub fn from_chain(chain: &KinematicChain) -> Self {
        let matrices: Vec<Matrix4<f64>> = chain
            .segments()
            .iter()
            .map(|segment| pose_to_matrix(&segment.frame_to_tip))
            .collect();

        debug!(segments = matrices.len(), "built transformation table");
        Self { matrices }
    }

    /// Number of entries; equals the segment count of the source chain.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Whether the table is empty. Never true after a successful build.
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Transform for segment `i`, or `None` when out of range.
    pub fn get(&self, i: usize) -> Option<&Matrix4<f64>> {
        self.matrices.get(i)
    }

    /// All matrices, in chain order.
    pub fn matrices(&self) -> &[Matrix4<f64>] {
        &self.matrices
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
