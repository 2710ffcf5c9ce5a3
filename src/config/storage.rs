// ABOUTME: Storage and AI collaborator configuration
// ABOUTME: Data directory for the file-backed store and the optional AI meal endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where persisted state lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .map_or_else(|| PathBuf::from(".macroplan"), |dir| dir.join("macroplan"));
        Self { data_dir }
    }
}

/// AI meal generation collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiMealConfig {
    /// Endpoint URL; the client is not built when unset
    pub endpoint: Option<String>,
    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for AiMealConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 30,
        }
    }
}

impl AiMealConfig {
    /// Validate AI client settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a zero timeout or a non-HTTP endpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "AI request timeout must be at least 1 second",
            ));
        }
        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigError::Parse(format!(
                    "AI endpoint must be an http(s) URL, got '{endpoint}'"
                )));
            }
        }
        Ok(())
    }
}
