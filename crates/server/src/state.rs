// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server state management.
//!
//! Wraps the JSON-file stores for shared access from request handlers.

use std::path::Path;
use std::sync::Arc;

use ob_core::{ComplianceStore, ConfigStore, TicketStore, UserStore};

use crate::error::ApiError;

/// Shared server state containing every store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Stores>,
}

pub struct Stores {
    pub tickets: TicketStore,
    pub users: UserStore,
    pub compliance: ComplianceStore,
    pub settings: ConfigStore,
}

impl AppState {
    /// Creates state with all data files under `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        AppState {
            inner: Arc::new(Stores {
                tickets: TicketStore::open(data_dir),
                users: UserStore::open(data_dir),
                compliance: ComplianceStore::open(data_dir),
                settings: ConfigStore::open(data_dir),
            }),
        }
    }

    /// Runs a store operation on the blocking pool.
    ///
    /// Store calls do synchronous file I/O and may wait on the file lock.
    pub async fn run<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&Stores) -> ob_core::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        Ok(tokio::task::spawn_blocking(move || f(&inner)).await??)
    }
}
