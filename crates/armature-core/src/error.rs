use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid degree_of_freedom: {0} (must be >= 1)")]
    InvalidDof(usize),

    #[error("joint_names has {got} entries, expected degree_of_freedom = {expected}")]
    JointNameCountMismatch { expected: usize, got: usize },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("chain_root_link and chain_tip_link must differ: {0}")]
    RootEqualsTip(String),
}
