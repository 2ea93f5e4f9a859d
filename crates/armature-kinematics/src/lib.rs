//! Kinematic chain model and joint limit derivation for Armature.
//!
//! Builds an in-memory kinematic model of a serial-link manipulator from
//! a robot description and derives two reusable artifacts: the ordered
//! per-segment transformation table consumed by forward-kinematics code,
//! and the margin-adjusted joint limit bounds committed into the shared
//! [`JointLimitSet`](armature_core::JointLimitSet).
//!
//! # Architecture
//!
//! ```text
//! RobotModel ──► KinematicChain ──► TransformationTable
//!          └────────────────────────► JointLimitSet (via derive_limits)
//! ```
//!
//! [`KinematicModel::initialize`] runs the whole pipeline in one
//! synchronous call: chain build, table build, limit derivation. It
//! either completes or fails fatally with a [`KinematicsError`].

pub mod chain;
pub mod error;
pub mod frame;
pub mod limits;
pub mod model;
pub mod transform;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use chain::{ChainSource, KinematicChain, Segment};
pub use error::KinematicsError;
pub use frame::{matrix_to_pose, pose_to_matrix};
pub use limits::derive_limits;
pub use model::KinematicModel;
pub use transform::TransformationTable;
