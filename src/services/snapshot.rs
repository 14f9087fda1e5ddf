// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot file holding the sanitized activity list.

use crate::models::SanitizedActivity;
use std::fs;
use std::path::{Path, PathBuf};

/// The JSON snapshot bundled into the site.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Replace the snapshot with `activities` as a pretty-printed JSON array.
    pub fn write(&self, activities: &[SanitizedActivity]) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::IoError(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(activities)
            .map_err(|e| SnapshotError::SerializeError(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| SnapshotError::IoError(e.to_string()))
    }

    /// Make sure a readable snapshot exists: keep an existing file, otherwise
    /// write an empty array. Returns `true` if an existing file was kept.
    pub fn ensure_exists(&self) -> Result<bool, SnapshotError> {
        if self.exists() {
            return Ok(true);
        }
        self.write(&[])?;
        Ok(false)
    }

    /// Load the snapshot.
    pub fn load(&self) -> Result<Vec<SanitizedActivity>, SnapshotError> {
        let json =
            fs::read_to_string(&self.path).map_err(|e| SnapshotError::IoError(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| SnapshotError::ParseError(e.to_string()))
    }
}

/// Errors from snapshot operations.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to access snapshot file: {0}")]
    IoError(String),

    #[error("Failed to parse snapshot: {0}")]
    ParseError(String),

    #[error("Failed to serialize snapshot: {0}")]
    SerializeError(String),
}

impl From<SnapshotError> for crate::error::AppError {
    fn from(err: SnapshotError) -> Self {
        crate::error::AppError::Snapshot(err.to_string())
    }
}
