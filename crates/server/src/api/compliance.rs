// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compliance endpoints.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use ob_core::{ComplianceData, ComplianceStatus, ComponentReport};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ComplianceOverview {
    pub data: ComplianceData,
    pub statuses: BTreeMap<String, ComplianceStatus>,
}

#[derive(Debug, Deserialize)]
pub struct SetMetricRequest {
    pub compliant: Option<bool>,
    pub notes: Option<String>,
}

pub async fn overview(State(state): State<AppState>) -> Result<Json<ComplianceOverview>, ApiError> {
    let data = state.run(|s| s.compliance.data()).await?;
    let statuses = data.statuses();
    Ok(Json(ComplianceOverview { data, statuses }))
}

pub async fn component(
    State(state): State<AppState>,
    Path(component): Path<String>,
) -> Result<Json<ComponentReport>, ApiError> {
    let component = state
        .run(move |s| s.compliance.component(&component))
        .await?;
    Ok(Json(component.report()))
}

pub async fn set_metric(
    State(state): State<AppState>,
    Path((component, metric)): Path<(String, String)>,
    Json(req): Json<SetMetricRequest>,
) -> Result<Json<ComponentReport>, ApiError> {
    let compliant = req
        .compliant
        .ok_or_else(|| ApiError::bad_request("compliant is required"))?;
    let updated = state
        .run(move |s| {
            s.compliance
                .set_metric(&component, &metric, compliant, req.notes.as_deref())
        })
        .await?;
    Ok(Json(updated.report()))
}

#[cfg(test)]
#[path = "compliance_tests.rs"]
mod tests;
