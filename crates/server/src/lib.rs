// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! opsboard: REST backend for the IT operations dashboard.
//!
//! Serves tickets, users, compliance records and dashboard settings, each
//! stored as a JSON document in the data directory.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use api::router;
pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use state::AppState;
