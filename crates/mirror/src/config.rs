// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-name rendering configuration.
//!
//! Defaults reproduce the canonical shorthand exactly; a YAML document can
//! override individual settings.
//!
//! # Example YAML
//!
//! ```yaml
//! # render.yaml
//! strip_qualifiers: true
//! expand_collections: false
//! max_depth: 64
//! ```

#[cfg(feature = "config-loaders")]
use serde::Deserialize;
#[cfg(feature = "config-loaders")]
use std::path::Path;
use thiserror::Error;

/// Default maximum nesting depth accepted by the canonicalizer.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Upper bound for [`RenderConfig::max_depth`]; keeps recursion off the stack limit.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config-loaders")]
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Controls how type names are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-loaders", derive(Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(default, deny_unknown_fields))]
pub struct RenderConfig {
    /// Drop module qualifiers from rendered names.
    pub strip_qualifiers: bool,

    /// Also rewrite `Dictionary<K,V>` as `[K: V]` and canonicalize `Set<T>`
    /// arguments. Off by default: only `Optional` and `Array` are unwrapped.
    pub expand_collections: bool,

    /// Deepest generic nesting parsed before a name is treated as malformed.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            strip_qualifiers: true,
            expand_collections: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a YAML document.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        log::debug!("[config] loaded render config: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a YAML file.
    #[cfg(feature = "config-loaders")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_depth must be within 1..={}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            )));
        }
        Ok(())
    }
}
