// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Infrastructure compliance records backed by `compliance.json`.
//!
//! Each component carries a list of pass/fail metrics. A component's health
//! is derived from the share of passing metrics:
//!
//! | compliant share | status   |
//! |-----------------|----------|
//! | no metrics      | green    |
//! | 100%            | green    |
//! | 50% or more     | yellow   |
//! | below 50%       | red      |

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::jsonfile::JsonFile;

pub const COMPLIANCE_FILE: &str = "compliance.json";

const SEED: &str = include_str!("compliance_seed.json");

/// A named pass/fail check against a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceMetric {
    pub id: String,
    pub name: String,
    pub description: String,
    pub compliant: bool,
    pub last_checked: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentCompliance {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<ComplianceMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceData {
    pub components: BTreeMap<String, ComponentCompliance>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Green,
    Yellow,
    Red,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Green => "green",
            ComplianceStatus::Yellow => "yellow",
            ComplianceStatus::Red => "red",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn compliant_count(metrics: &[ComplianceMetric]) -> usize {
    metrics.iter().filter(|m| m.compliant).count()
}

pub fn calculate_status(metrics: &[ComplianceMetric]) -> ComplianceStatus {
    let total = metrics.len();
    let passing = compliant_count(metrics);
    if passing == total {
        ComplianceStatus::Green
    } else if passing * 2 >= total {
        ComplianceStatus::Yellow
    } else {
        ComplianceStatus::Red
    }
}

/// Percentage of passing metrics, rounded half up. No metrics counts as 100.
pub fn calculate_percentage(metrics: &[ComplianceMetric]) -> u8 {
    let total = metrics.len();
    if total == 0 {
        return 100;
    }
    let passing = compliant_count(metrics);
    ((passing * 200 + total) / (total * 2)) as u8
}

/// A component together with its derived health.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentReport {
    #[serde(flatten)]
    pub component: ComponentCompliance,
    pub status: ComplianceStatus,
    pub percentage: u8,
}

impl ComponentCompliance {
    pub fn status(&self) -> ComplianceStatus {
        calculate_status(&self.metrics)
    }

    pub fn report(self) -> ComponentReport {
        let status = calculate_status(&self.metrics);
        let percentage = calculate_percentage(&self.metrics);
        ComponentReport {
            component: self,
            status,
            percentage,
        }
    }
}

impl ComplianceData {
    /// Component id to derived status.
    pub fn statuses(&self) -> BTreeMap<String, ComplianceStatus> {
        self.components
            .iter()
            .map(|(id, component)| (id.clone(), component.status()))
            .collect()
    }
}

#[derive(Deserialize)]
struct SeedDocument {
    components: BTreeMap<String, ComponentCompliance>,
}

/// The default component catalogue written on first run.
pub fn default_compliance() -> Result<ComplianceData> {
    let seed: SeedDocument = serde_json::from_str(SEED)?;
    Ok(ComplianceData {
        components: seed.components,
        last_updated: Utc::now(),
    })
}

#[derive(Debug)]
pub struct ComplianceStore {
    file: JsonFile<ComplianceData>,
}

impl ComplianceStore {
    pub fn open(data_dir: &Path) -> Self {
        ComplianceStore {
            file: JsonFile::new(data_dir.join(COMPLIANCE_FILE), default_compliance),
        }
    }

    pub fn data(&self) -> Result<ComplianceData> {
        self.file.load()
    }

    pub fn component(&self, id: &str) -> Result<ComponentCompliance> {
        self.file
            .load()?
            .components
            .remove(id)
            .ok_or_else(|| Error::ComponentNotFound(id.to_string()))
    }

    /// Records the outcome of a check, stamping it with the current time.
    /// `notes` replaces the metric's notes when given.
    pub fn set_metric(
        &self,
        component_id: &str,
        metric_id: &str,
        compliant: bool,
        notes: Option<&str>,
    ) -> Result<ComponentCompliance> {
        let component = self.file.update(|data| {
            let now = Utc::now();
            let component = data
                .components
                .get_mut(component_id)
                .ok_or_else(|| Error::ComponentNotFound(component_id.to_string()))?;
            let metric = component
                .metrics
                .iter_mut()
                .find(|m| m.id == metric_id)
                .ok_or_else(|| Error::MetricNotFound {
                    component: component_id.to_string(),
                    metric: metric_id.to_string(),
                })?;
            metric.compliant = compliant;
            metric.last_checked = now;
            if let Some(notes) = notes {
                metric.notes = notes.to_string();
            }
            let component = component.clone();
            data.last_updated = now;
            Ok(component)
        })?;
        info!(
            component = %component_id,
            metric = %metric_id,
            compliant,
            status = %component.status(),
            "compliance metric recorded"
        );
        Ok(component)
    }
}

#[cfg(test)]
#[path = "compliance_tests.rs"]
mod tests;
