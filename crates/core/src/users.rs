// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User directory backed by `users.json`.
//!
//! `is_admin` only controls which views the dashboard offers; it is not an
//! access-control boundary.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::jsonfile::JsonFile;

pub const USERS_FILE: &str = "users.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Short uppercase handle, e.g. `RABARR`.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersData {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub is_admin: Option<bool>,
}

fn default_users() -> Result<UsersData> {
    Ok(UsersData {
        users: vec![
            User {
                id: "RABARR".into(),
                name: "R. Abarr".into(),
                is_admin: true,
            },
            User {
                id: "JNGEASH".into(),
                name: "J. Ngeash".into(),
                is_admin: true,
            },
        ],
    })
}

#[derive(Debug)]
pub struct UserStore {
    file: JsonFile<UsersData>,
}

impl UserStore {
    pub fn open(data_dir: &Path) -> Self {
        UserStore {
            file: JsonFile::new(data_dir.join(USERS_FILE), default_users),
        }
    }

    pub fn list_all(&self) -> Result<Vec<User>> {
        Ok(self.file.load()?.users)
    }

    pub fn list_admins(&self) -> Result<Vec<User>> {
        let mut users = self.file.load()?.users;
        users.retain(|u| u.is_admin);
        Ok(users)
    }

    pub fn get(&self, id: &str) -> Result<User> {
        self.file
            .load()?
            .users
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| Error::UserNotFound(id.to_string()))
    }

    pub fn create(&self, id: &str, name: &str, is_admin: bool) -> Result<User> {
        let user = self.file.update(|data| {
            if data.users.iter().any(|u| u.id == id) {
                return Err(Error::UserExists(id.to_string()));
            }
            let user = User {
                id: id.to_string(),
                name: name.to_string(),
                is_admin,
            };
            data.users.push(user.clone());
            Ok(user)
        })?;
        info!(user = %user.id, admin = user.is_admin, "user created");
        Ok(user)
    }

    pub fn update(&self, id: &str, update: &UserUpdate) -> Result<User> {
        self.file.update(|data| {
            let user = data
                .users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(|| Error::UserNotFound(id.to_string()))?;
            if let Some(name) = &update.name {
                user.name = name.clone();
            }
            if let Some(is_admin) = update.is_admin {
                user.is_admin = is_admin;
            }
            Ok(user.clone())
        })
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        self.file.update(|data| {
            let index = data
                .users
                .iter()
                .position(|u| u.id == id)
                .ok_or_else(|| Error::UserNotFound(id.to_string()))?;
            data.users.remove(index);
            Ok(())
        })?;
        info!(user = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
