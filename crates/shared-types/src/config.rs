//! Tooltip configuration
//!
//! Host-owned display settings (font, padding) arrive with every tooltip
//! context and are not stored here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{TooltipError, TooltipResult};

/// Configuration for the overlay renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Prepended to every value row
    pub value_prefix: String,

    /// Console log level: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            value_prefix: "$".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl TooltipConfig {
    /// Parse and validate a configuration from JSON. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> TooltipResult<Self> {
        let config: TooltipConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> TooltipResult<()> {
        self.level().map(|_| ())
    }

    pub fn level(&self) -> TooltipResult<log::Level> {
        log::Level::from_str(&self.log_level).map_err(|_| TooltipError::InvalidConfig {
            message: format!("unknown log level '{}'", self.log_level),
            field: Some("log_level".to_string()),
        })
    }
}
