//! Model configuration: degree of freedom, joint names, chain endpoints.
//!
//! Loaded once from TOML and validated before any kinematic-model
//! initialization. The configuration is an explicitly passed, owned
//! object; nothing here is process-global.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// ModelConfig
// ---------------------------------------------------------------------------

/// Configuration for kinematic-model preparation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Number of independently actuated joints considered by limit
    /// derivation.
    pub degree_of_freedom: usize,

    /// Ordered joint names; must have exactly `degree_of_freedom` entries.
    pub joint_names: Vec<String>,

    /// Link the kinematic chain starts from.
    pub chain_root_link: String,

    /// Link the kinematic chain ends at.
    pub chain_tip_link: String,
}

impl ModelConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.degree_of_freedom == 0 {
            return Err(ConfigError::InvalidDof(0));
        }
        if self.joint_names.len() != self.degree_of_freedom {
            return Err(ConfigError::JointNameCountMismatch {
                expected: self.degree_of_freedom,
                got: self.joint_names.len(),
            });
        }
        if self.chain_root_link.is_empty() {
            return Err(ConfigError::MissingField("chain_root_link".into()));
        }
        if self.chain_tip_link.is_empty() {
            return Err(ConfigError::MissingField("chain_tip_link".into()));
        }
        if self.chain_root_link == self.chain_tip_link {
            return Err(ConfigError::RootEqualsTip(self.chain_root_link.clone()));
        }
        Ok(())
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
