//! URDF parsing and robot description model for Armature.
//!
//! Provides an in-memory representation of a robot's kinematic tree
//! (links, joints, per-joint motion limits) and parsing from URDF XML.
//! Downstream crates query this model to extract kinematic chains and
//! to look up joint limit metadata by name.

pub mod error;
pub mod parser;
pub mod types;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use error::UrdfError;
pub use parser::{parse_file, parse_string};
pub use types::{JointData, JointLimits, JointType, LinkData, Origin, RobotModel};
