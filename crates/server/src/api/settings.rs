// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings endpoints.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use ob_core::AppConfig;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_config(State(state): State<AppState>) -> Result<Json<AppConfig>, ApiError> {
    Ok(Json(state.run(|s| s.settings.read()).await?))
}

pub async fn save_config(
    State(state): State<AppState>,
    Json(config): Json<AppConfig>,
) -> Result<Json<Value>, ApiError> {
    state.run(move |s| s.settings.write(&config)).await?;
    Ok(Json(json!({ "ok": true })))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
