// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use ob_core::{User, UserUpdate};

use crate::error::{required, ApiError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    /// `true` restricts the listing to admins.
    pub admins: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub is_admin: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub is_admin: Option<bool>,
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<User>>, ApiError> {
    let admins_only = query.admins.as_deref() == Some("true");
    let users = if admins_only {
        state.run(|s| s.users.list_admins()).await?
    } else {
        state.run(|s| s.users.list_all()).await?
    };
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let (Some(id), Some(name)) = (required(req.id), required(req.name)) else {
        return Err(ApiError::bad_request("id and name are required"));
    };
    let is_admin = req.is_admin.unwrap_or(false);
    let user = state
        .run(move |s| s.users.create(&id, &name, is_admin))
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.run(move |s| s.users.get(&id)).await?))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let update = UserUpdate {
        name: required(req.name),
        is_admin: req.is_admin,
    };
    Ok(Json(state.run(move |s| s.users.update(&id, &update)).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.run(move |s| s.users.delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
