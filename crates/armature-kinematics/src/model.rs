//! Kinematic model initialization.
//!
//! Single synchronous entry point tying the pipeline together:
//! chain extraction, transformation table build, and joint limit
//! derivation. The sequence either completes or fails fatally; no
//! partial model is ever returned.

use tracing::info;

use armature_core::{JointLimitSet, ModelConfig};
use armature_urdf::RobotModel;

use crate::chain::KinematicChain;
use crate::error::KinematicsError;
use crate::limits::derive_limits;
use crate::transform::TransformationTable;

/// An initialized kinematic model: the chain between the configured root
/// and tip links plus its per-segment transformation table.
///
/// Built once and read-only for its lifetime. Re-initializing rebuilds
/// the chain and table deterministically; limit categories already
/// committed in the shared [`JointLimitSet`] are left untouched.
#[derive(Debug, Clone)]
pub struct KinematicModel {
    chain: KinematicChain,
    transforms: TransformationTable,
}

impl KinematicModel {
    /// Initialize the model from a robot description.
    ///
    /// Runs chain build → table build → limit derivation in one
    /// synchronous call with no suspension points.
    ///
    /// # Errors
    ///
    /// - [`KinematicsError::Config`] when the configuration is invalid.
    /// - [`KinematicsError::ChainConstruction`] when the chain between
    ///   the configured root and tip links is degenerate.
    /// - [`KinematicsError::JointLookup`] when a configured joint name
    ///   has no limit metadata; the affected limit category is rolled
    ///   back, not partially committed.
    pub fn initialize(
        model: &RobotModel,
        config: &ModelConfig,
        limits: &mut JointLimitSet,
    ) -> Result<Self, KinematicsError> {
        config.validate()?;

        let chain =
            KinematicChain::from_model(model, &config.chain_root_link, &config.chain_tip_link)?;
        let transforms = TransformationTable::from_chain(&chain);
        derive_limits(model, config, limits)?;

        info!(
            robot = %model.name,
            segments = chain.num_segments(),
            joints = chain.num_joints(),
            "kinematic model initialized"
        );

        Ok(Self { chain, transforms })
    }

    /// The extracted kinematic chain.
    pub fn chain(&self) -> &KinematicChain {
        &self.chain
    }

    /// The per-segment transformation table, index-aligned with the chain.
    pub fn transforms(&self) -> &TransformationTable {
        &self.transforms
    }

    /// Number of actuated joints in the chain.
    pub fn dof(&self) -> usize {
        self.chain.num_joints()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
