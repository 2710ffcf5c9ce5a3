// ABOUTME: HTTP client for the AI meal generation endpoint
// ABOUTME: Turns a free-text meal description into a named meal with estimated macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! AI Meal Client
//!
//! Posts a meal description to a configured endpoint and returns the generated
//! meal. One request per call and no retry; failures come back as `AppError`
//! values carrying the server's message when one is present.
//!
//! # Wire format
//! - Request: `POST {endpoint}` with `{ "description": "..." }`
//! - 200: `{ "meal": { "name", "calories", "protein", "carbs", "fat", "mealType", "instructions"? } }`
//! - Non-200: `{ "error": "..." }`; 429 is a rate limit, 402 an exhausted quota
//!
//! # Example
//! ```rust,no_run
//! use macroplan::external::ai_meal_client::{AiMealClient, MealGenerator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AiMealClient::new("https://example.invalid/generate-ai-meal", 30)?;
//! let meal = client.generate_meal("grilled salmon with rice").await?;
//! println!("{}: {} kcal", meal.name, meal.calories);
//! # Ok(())
//! # }
//! ```

use crate::config::AiMealConfig;
use async_trait::async_trait;
use macroplan_core::constants::service_names::AI_MEAL_SERVICE;
use macroplan_core::errors::{AppError, AppResult};
use macroplan_core::models::{Macros, MealType};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Meal produced from a description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMeal {
    /// Descriptive meal name
    pub name: String,
    /// Estimated calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Meal type
    pub meal_type: MealType,
    /// Preparation notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl GeneratedMeal {
    /// Macro profile of the meal
    #[must_use]
    pub const fn macros(&self) -> Macros {
        Macros::new(self.protein, self.carbs, self.fat, self.calories)
    }
}

/// Anything that can turn a meal description into a meal
#[async_trait]
pub trait MealGenerator: Send + Sync {
    /// Generate a meal from free text
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank description, `RateLimitExceeded`,
    /// `QuotaExceeded`, or `ExternalServiceError` from the collaborator.
    async fn generate_meal(&self, description: &str) -> AppResult<GeneratedMeal>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    meal: GeneratedMeal,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the AI meal endpoint
#[derive(Debug, Clone)]
pub struct AiMealClient {
    endpoint: String,
    http_client: Client,
}

impl AiMealClient {
    /// Create a client for `endpoint` with a request timeout
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            http_client,
        })
    }

    /// Build a client from configuration; `None` when no endpoint is configured
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be built.
    pub fn from_config(config: &AiMealConfig) -> AppResult<Option<Self>> {
        config
            .endpoint
            .as_deref()
            .map(|endpoint| Self::new(endpoint, config.timeout_secs))
            .transpose()
    }

    /// Configured endpoint
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn error_for(status: StatusCode, response: Response) -> AppError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.error)
            .unwrap_or_else(|| format!("HTTP {status}"));

        warn!(status = status.as_u16(), error = %message, "AI meal request failed");

        match status {
            StatusCode::TOO_MANY_REQUESTS => AppError::rate_limit_exceeded(message),
            StatusCode::PAYMENT_REQUIRED => AppError::quota_exceeded(message),
            _ => AppError::external_service(AI_MEAL_SERVICE, message),
        }
    }
}

#[async_trait]
impl MealGenerator for AiMealClient {
    async fn generate_meal(&self, description: &str) -> AppResult<GeneratedMeal> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::invalid_input("Meal description is required"));
        }

        debug!(endpoint = %self.endpoint, "Requesting AI meal");
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&GenerateRequest { description })
            .send()
            .await
            .map_err(|e| AppError::external_service(AI_MEAL_SERVICE, e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Self::error_for(status, response).await);
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            AppError::external_service(AI_MEAL_SERVICE, format!("JSON parse error: {e}"))
        })?;

        info!(
            name = %parsed.meal.name,
            meal_type = %parsed.meal.meal_type,
            calories = parsed.meal.calories,
            "Generated AI meal"
        );
        Ok(parsed.meal)
    }
}
