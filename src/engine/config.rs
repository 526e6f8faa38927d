//! Configuration for the reference engine

use std::path::Path;

use kasuari::Strength;
use serde::Deserialize;
use thiserror::Error;

use super::types::{Insets, Size};

/// Errors that can occur when loading an engine configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read engine config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse engine config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Solver strength given to constraints created through the DSL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Required,
    Strong,
    Medium,
    Weak,
}

impl Priority {
    pub(crate) fn strength(self) -> Strength {
        match self {
            Priority::Required => Strength::REQUIRED,
            Priority::Strong => Strength::STRONG,
            Priority::Medium => Strength::MEDIUM,
            Priority::Weak => Strength::WEAK,
        }
    }
}

/// Configuration options for a [`super::LayoutEngine`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed size of the root view
    pub root_size: Size,

    /// Safe-area insets of the root view
    pub safe_area_insets: Insets,

    /// Strength of constraints created through anchors
    pub priority: Priority,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root_size: Size::new(375.0, 812.0),
            safe_area_insets: Insets::new(44.0, 0.0, 34.0, 0.0),
            priority: Priority::Required,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the root view size
    pub fn with_root_size(mut self, width: f64, height: f64) -> Self {
        self.root_size = Size::new(width, height);
        self
    }

    /// Set the root view's safe-area insets
    pub fn with_safe_area_insets(mut self, insets: Insets) -> Self {
        self.safe_area_insets = insets;
        self
    }

    /// Set the strength of DSL-created constraints
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
