// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use ob_core::{Category, NewTicket, Priority, Status, Ticket, TicketChange, CATEGORIES};

use crate::error::{required, ApiError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub category: Option<String>,
    pub user_id: Option<String>,
    pub brief_description: Option<String>,
    pub details: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketRequest {
    pub user_id: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNoteRequest {
    pub user_id: Option<String>,
    pub description: Option<String>,
}

pub async fn list_tickets(
    State(state): State<AppState>,
    Query(query): Query<TicketQuery>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = match required(query.user_id) {
        Some(user_id) => state.run(move |s| s.tickets.list_by_user(&user_id)).await?,
        None => state.run(|s| s.tickets.list_all()).await?,
    };
    Ok(Json(tickets))
}

pub async fn create_ticket(
    State(state): State<AppState>,
    Json(req): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<Ticket>), ApiError> {
    let (Some(category), Some(user_id), Some(brief_description), Some(details)) = (
        required(req.category),
        required(req.user_id),
        required(req.brief_description),
        required(req.details),
    ) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };
    let priority = match required(req.priority) {
        Some(p) => p.parse::<Priority>()?,
        None => Priority::default(),
    };

    let new = NewTicket {
        category,
        user_id,
        brief_description,
        details,
        priority,
    };
    let ticket = state.run(move |s| s.tickets.create(new)).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, ApiError> {
    debug!("get ticket {}", id);
    Ok(Json(state.run(move |s| s.tickets.get(&id)).await?))
}

/// Applies `status` and then `assignedTo`, each when present.
pub async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTicketRequest>,
) -> Result<Json<Ticket>, ApiError> {
    let user_id =
        required(req.user_id).ok_or_else(|| ApiError::bad_request("userId is required"))?;
    let status = required(req.status)
        .map(|s| s.parse::<Status>())
        .transpose()?;
    let change = TicketChange {
        status,
        assigned_to: required(req.assigned_to),
    };

    let ticket = state
        .run(move |s| s.tickets.apply(&id, &change, &user_id))
        .await?;
    Ok(Json(ticket))
}

pub async fn add_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddNoteRequest>,
) -> Result<Json<Ticket>, ApiError> {
    let (Some(user_id), Some(description)) = (required(req.user_id), required(req.description))
    else {
        return Err(ApiError::bad_request("userId and description are required"));
    };
    let ticket = state
        .run(move |s| s.tickets.add_note(&id, &user_id, &description))
        .await?;
    Ok(Json(ticket))
}

pub async fn list_categories() -> Json<&'static [Category]> {
    Json(CATEGORIES)
}

#[cfg(test)]
#[path = "tickets_tests.rs"]
mod tests;
