// ABOUTME: Integration tests for logging configuration and subscriber setup
// ABOUTME: Covers environment handling, defaults, and initializing the pretty formatter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macroplan::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "planner-test");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "planner-test");
    assert!(config.include_location);
}

#[test]
#[serial]
fn test_default_logging_config() {
    clear_env();
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "macroplan");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_pretty_subscriber_initializes_with_directive_list() {
    clear_env();
    // A directive list must not break the crate-level directive
    env::set_var("RUST_LOG", "macroplan=trace,reqwest=debug");
    let config = LoggingConfig {
        format: LogFormat::Pretty,
        ..LoggingConfig::from_env()
    };

    let result = config.init();
    clear_env();
    assert!(result.is_ok());
}
