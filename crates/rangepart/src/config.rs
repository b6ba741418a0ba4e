//! Engine configuration.
//!
//! Loaded from TOML or built in code. Global bounds are not part of the
//! configuration; they are supplied per call.

use crate::{DEFAULT_CEILING, bound::FieldKind};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid partition config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("partition field name must not be empty")]
    EmptyField,

    #[error("partition ceiling must be at least 1")]
    ZeroCeiling,

    #[error("partition max_depth must be at least 1")]
    ZeroMaxDepth,
}

///
/// PartitionConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PartitionConfig {
    /// Name of the sortable, filterable field to partition on.
    pub field: String,

    pub kind: FieldKind,

    /// Maximum records per partition.
    #[serde(default = "default_ceiling")]
    pub ceiling: u64,

    /// Bisection depth after which a range is kept as-is.
    /// Defaults to the kind's resolution depth.
    #[serde(default)]
    pub max_depth: Option<u32>,
}

impl PartitionConfig {
    #[must_use]
    pub fn new(field: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            field: field.into(),
            kind,
            ceiling: DEFAULT_CEILING,
            max_depth: None,
        }
    }

    #[must_use]
    pub const fn with_ceiling(mut self, ceiling: u64) -> Self {
        self.ceiling = ceiling;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Configured depth cap, or the kind's resolution depth when unset.
    #[must_use]
    pub fn effective_max_depth(&self) -> u32 {
        self.max_depth.unwrap_or_else(|| self.kind.max_depth())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field.trim().is_empty() {
            return Err(ConfigError::EmptyField);
        }
        if self.ceiling == 0 {
            return Err(ConfigError::ZeroCeiling);
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::ZeroMaxDepth);
        }

        Ok(())
    }
}

const fn default_ceiling() -> u64 {
    DEFAULT_CEILING
}

///
/// TESTS
///
