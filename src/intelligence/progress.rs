// ABOUTME: Visible generation stages and the single-generation lock
// ABOUTME: Stages move pending -> active -> complete with a delay and are broadcast to subscribers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macroplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::sleep;
use tracing::debug;

/// Stages shown while a plan is generated, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStage {
    /// Reading targets and preferences
    Analyzing,
    /// Searching recipe combinations
    Optimizing,
    /// Spreading recipes across the week
    BuildingVariety,
    /// Summing plan totals
    CalculatingTotals,
}

impl GenerationStage {
    /// All stages in execution order
    pub const ALL: [Self; 4] = [
        Self::Analyzing,
        Self::Optimizing,
        Self::BuildingVariety,
        Self::CalculatingTotals,
    ];

    /// Label shown to the user
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Analyzing => "Analyzing your macros",
            Self::Optimizing => "Optimizing meal combinations",
            Self::BuildingVariety => "Building weekly variety",
            Self::CalculatingTotals => "Calculating nutrition totals",
        }
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of a single stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Not started
    #[default]
    Pending,
    /// Running
    Active,
    /// Finished
    Complete,
}

/// Snapshot of every stage
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationProgress {
    statuses: [StageStatus; 4],
}

impl GenerationProgress {
    /// Status of one stage
    #[must_use]
    pub const fn status(&self, stage: GenerationStage) -> StageStatus {
        self.statuses[stage as usize]
    }

    /// Stages paired with their status
    pub fn stages(&self) -> impl Iterator<Item = (GenerationStage, StageStatus)> + '_ {
        GenerationStage::ALL
            .into_iter()
            .map(|stage| (stage, self.status(stage)))
    }

    /// Whether every stage is complete
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.statuses
            .iter()
            .all(|status| *status == StageStatus::Complete)
    }

    fn set(&mut self, stage: GenerationStage, status: StageStatus) {
        self.statuses[stage as usize] = status;
    }
}

/// Lock allowing one generation at a time
#[derive(Debug, Clone, Default)]
pub struct GenerationLock {
    in_progress: Arc<AtomicBool>,
}

impl GenerationLock {
    /// Create an unlocked lock
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock for the lifetime of the returned guard
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` if a generation is already running.
    pub fn try_acquire(&self) -> AppResult<GenerationGuard> {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::resource_locked("A meal plan generation is already in progress"))?;
        Ok(GenerationGuard {
            in_progress: Arc::clone(&self.in_progress),
        })
    }

    /// Whether a generation is running
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }
}

/// Releases the generation lock on drop
#[derive(Debug)]
pub struct GenerationGuard {
    in_progress: Arc<AtomicBool>,
}

impl Drop for GenerationGuard {
    fn drop(&mut self) {
        self.in_progress.store(false, Ordering::Release);
    }
}

/// Runs work through the visible stages and broadcasts each transition
#[derive(Debug, Clone)]
pub struct StagedProgress {
    sender: broadcast::Sender<GenerationProgress>,
    stage_delay: Duration,
}

impl StagedProgress {
    /// Create a runner with the given per-stage delay
    #[must_use]
    pub fn new(stage_delay: Duration) -> Self {
        let (sender, _) = broadcast::channel(16);
        Self {
            sender,
            stage_delay,
        }
    }

    /// Receive a snapshot after every stage transition
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<GenerationProgress> {
        self.sender.subscribe()
    }

    /// Delay of each stage
    #[must_use]
    pub const fn stage_delay(&self) -> Duration {
        self.stage_delay
    }

    /// Walk through every stage, running `work` while the optimizing stage is active
    pub async fn run<T, F>(&self, work: F) -> T
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        let mut progress = GenerationProgress::default();

        self.step(&mut progress, GenerationStage::Analyzing).await;

        self.transition(&mut progress, GenerationStage::Optimizing, StageStatus::Active);
        let output = work();
        self.pause().await;
        self.transition(&mut progress, GenerationStage::Optimizing, StageStatus::Complete);

        self.step(&mut progress, GenerationStage::BuildingVariety).await;
        self.step(&mut progress, GenerationStage::CalculatingTotals).await;

        output
    }

    async fn step(&self, progress: &mut GenerationProgress, stage: GenerationStage) {
        self.transition(progress, stage, StageStatus::Active);
        self.pause().await;
        self.transition(progress, stage, StageStatus::Complete);
    }

    async fn pause(&self) {
        if !self.stage_delay.is_zero() {
            sleep(self.stage_delay).await;
        }
    }

    fn transition(
        &self,
        progress: &mut GenerationProgress,
        stage: GenerationStage,
        status: StageStatus,
    ) {
        progress.set(stage, status);
        debug!(stage = ?stage, status = ?status, "Generation stage transition");
        // No subscribers is fine
        let _ = self.sender.send(progress.clone());
    }
}
