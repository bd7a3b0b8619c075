// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-document JSON file storage.
//!
//! Each collection lives in one pretty-printed JSON file. Mutations take an
//! exclusive advisory lock on a sibling `.lock` file, read the document,
//! apply the change, and atomically rename a freshly written copy over the
//! original. Concurrent writers in the same or different processes are
//! serialized instead of overwriting each other.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Produces the initial document for a file that does not exist yet.
pub type Seed<T> = fn() -> Result<T>;

/// A typed handle to a single JSON document on disk.
#[derive(Debug)]
pub struct JsonFile<T> {
    path: PathBuf,
    seed: Seed<T>,
    _marker: PhantomData<fn() -> T>,
}

/// Holds the advisory lock until dropped.
struct LockGuard(File);

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = self.0.unlock();
    }
}

impl<T: Serialize + DeserializeOwned> JsonFile<T> {
    /// Creates a handle; nothing touches the disk until the first access.
    pub fn new(path: impl Into<PathBuf>, seed: Seed<T>) -> Self {
        JsonFile {
            path: path.into(),
            seed,
            _marker: PhantomData,
        }
    }

    /// Reads the document, seeding and persisting it if the file is missing.
    pub fn load(&self) -> Result<T> {
        let _lock = self.lock()?;
        self.read_or_seed()
    }

    /// Runs a read-modify-write cycle under the file lock.
    ///
    /// The document is written back only if `f` succeeds.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> Result<R>) -> Result<R> {
        let _lock = self.lock()?;
        let mut data = self.read_or_seed()?;
        let out = f(&mut data)?;
        self.write(&data)?;
        Ok(out)
    }

    /// Overwrites the document wholesale.
    pub fn replace(&self, data: &T) -> Result<()> {
        let _lock = self.lock()?;
        self.write(data)
    }

    fn lock(&self) -> Result<LockGuard> {
        self.ensure_parent()?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(sibling(&self.path, ".lock"))?;
        file.lock_exclusive()?;
        Ok(LockGuard(file))
    }

    fn read_or_seed(&self) -> Result<T> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| Error::CorruptedData(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let data = (self.seed)()?;
                self.write(&data)?;
                info!("seeded {}", self.path.display());
                Ok(data)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, data: &T) -> Result<()> {
        self.ensure_parent()?;
        let json = serde_json::to_string_pretty(data)?;
        let tmp = sibling(&self.path, ".tmp");
        {
            let mut file = File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        debug!("wrote {} ({} bytes)", self.path.display(), json.len());
        Ok(())
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// `tickets.json` + `.lock` -> `tickets.json.lock`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "jsonfile_tests.rs"]
mod tests;
