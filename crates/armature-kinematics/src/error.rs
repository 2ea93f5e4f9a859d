//! Error types for kinematic-model preparation.

use armature_core::ConfigError;
use armature_urdf::UrdfError;
use thiserror::Error;

/// Errors raised while building the kinematic model.
///
/// All variants are fatal to initialization: no partial chain, table, or
/// limit set is usable downstream, and nothing is retried internally.
#[derive(Debug, Error)]
pub enum KinematicsError {
    /// The robot description could not be loaded or its tree is malformed.
    #[error("robot description error: {0}")]
    Description(#[from] UrdfError),

    /// The model configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The extracted chain has zero joints or zero segments.
    #[error(
        "kinematic chain from '{root}' to '{tip}' is degenerate: \
         {joints} joints, {segments} segments"
    )]
    ChainConstruction {
        root: String,
        tip: String,
        joints: usize,
        segments: usize,
    },

    /// A configured joint name has no limit metadata in the description.
    ///
    /// The failing category's bounds are rolled back rather than committed,
    /// so a retry with a corrected description remains possible.
    #[error("joint '{0}' has no limit metadata in the robot description")]
    JointLookup(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
