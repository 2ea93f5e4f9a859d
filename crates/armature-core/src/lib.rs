//! Configuration, joint-limit store, and errors for Armature.
//!
//! Holds the model configuration loaded from TOML and the shared
//! [`JointLimitSet`] that the kinematics crate fills with margin-adjusted
//! motion bounds, one set-once band per limit category.

pub mod config;
pub mod error;
pub mod limits;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use config::ModelConfig;
pub use error::ConfigError;
pub use limits::{
    EFFORT_MARGIN, JointLimitSet, LimitBand, LimitCategory, LimitStatus, VELOCITY_MARGIN,
};
