// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST API routes.
//!
//! Request and response bodies are JSON with camelCase keys, matching the
//! layout of the data files.

mod compliance;
mod settings;
mod tickets;
mod users;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/api/tickets",
            get(tickets::list_tickets).post(tickets::create_ticket),
        )
        .route(
            "/api/tickets/{id}",
            get(tickets::get_ticket).patch(tickets::update_ticket),
        )
        .route("/api/tickets/{id}/notes", post(tickets::add_note))
        .route("/api/categories", get(tickets::list_categories))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/api/config",
            get(settings::get_config).post(settings::save_config),
        )
        .route("/api/compliance", get(compliance::overview))
        .route("/api/compliance/{component}", get(compliance::component))
        .route(
            "/api/compliance/{component}/metrics/{metric}",
            put(compliance::set_metric),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
mod test_helpers;
