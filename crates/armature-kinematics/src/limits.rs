//! Joint limit derivation from the robot description.
//!
//! Reads raw per-joint limit metadata and writes margin-adjusted bounds
//! into the shared [`JointLimitSet`], once per category. Position bounds
//! come from hard mechanical stops and are copied verbatim; velocity and
//! effort are nominal single-value ratings widened into an operating band
//! to leave headroom for controller overshoot.

use tracing::{debug, info};

use armature_core::{EFFORT_MARGIN, JointLimitSet, LimitCategory, ModelConfig, VELOCITY_MARGIN};
use armature_urdf::{JointLimits, RobotModel};

use crate::error::KinematicsError;

/// Derive and commit bounds for every category not yet committed.
///
/// Each category is an all-or-nothing pass over the first
/// `config.degree_of_freedom` configured joint names. A joint name with
/// no limit metadata in the description aborts the pass with
/// [`KinematicsError::JointLookup`] and rolls the category back to
/// unset — an unresolved limit must never silently corrupt downstream
/// motion bounds, and a retry with a corrected description stays
/// possible. Already-committed categories are skipped without writes.
pub fn derive_limits(
    model: &RobotModel,
    config: &ModelConfig,
    set: &mut JointLimitSet,
) -> Result<(), KinematicsError> {
    for category in LimitCategory::ALL {
        if !set.begin(category) {
            debug!(category = %category, "limit bounds already committed, skipping");
            continue;
        }

        match compute_bounds(model, config, category) {
            Ok((min, max)) => {
                set.commit(category, min, max);
                info!(
                    category = %category,
                    joints = config.degree_of_freedom,
                    "committed joint limit bounds"
                );
            }
            Err(e) => {
                set.rollback(category);
                return Err(e);
            }
        }
    }
    Ok(())
}

/// One full derivation pass for `category` over the configured joints.
fn compute_bounds(
    model: &RobotModel,
    config: &ModelConfig,
    category: LimitCategory,
) -> Result<(Vec<f64>, Vec<f64>), KinematicsError> {
    let dof = config.degree_of_freedom;
    let mut min = Vec::with_capacity(dof);
    let mut max = Vec::with_capacity(dof);

    for name in config.joint_names.iter().take(dof) {
        let limits = model
            .joint_limits(name)
            .map_err(|_| KinematicsError::JointLookup(name.clone()))?;
        let (lo, hi) = bounds_for(category, limits);
        min.push(lo);
        max.push(hi);
    }

    Ok((min, max))
}

/// Margin-adjusted `(min, max)` for one joint.
const fn bounds_for(category: LimitCategory, limits: &JointLimits) -> (f64, f64) {
    match category {
        // Hard mechanical stops: no slack.
        LimitCategory::Position => (limits.lower, limits.upper),
        // Nominal magnitudes symmetrized into an operating band.
        LimitCategory::Velocity => (
            limits.velocity - VELOCITY_MARGIN,
            limits.velocity + VELOCITY_MARGIN,
        ),
        LimitCategory::Effort => (limits.effort - EFFORT_MARGIN, limits.effort + EFFORT_MARGIN),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
