// ABOUTME: Configuration error type shared by every config section
// ABOUTME: Raised by env override parsing and validation during config load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two bounds are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Environment variable could not be parsed into the target type
    #[error("Parse error: {0}")]
    Parse(String),

    /// Scoring weights are invalid
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// A single value is outside its allowed range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
