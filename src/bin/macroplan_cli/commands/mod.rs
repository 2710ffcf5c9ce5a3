// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for macroplan-cli
// ABOUTME: Provides profile, recipe, plan, saved plan, tracking, and AI meal commands

pub mod ai;
pub mod plan;
pub mod profile;
pub mod recipes;
pub mod saved;
pub mod track;
