/*
 *  Copyright 2025-2026 Adjutant Contributors
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! High-water-mark persistence for the change detector.
//!
//! The cursor file is owned by a single monitor process; loading tolerates a
//! missing or corrupt file by falling back to zeros (which re-emits at most
//! the rows created since the file was lost - at-least-once delivery).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::WatcherError;

/// Last-seen maximum primary key per watched table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cursors {
    pub last_project_id: i64,
    pub last_task_id: i64,
    pub last_idea_id: i64,
}

/// Loads and saves [`Cursors`] as a JSON state file.
#[derive(Debug, Clone)]
pub struct CursorStore {
    path: PathBuf,
}

impl CursorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted cursors, defaulting to zeros when the file is
    /// missing or unreadable.
    pub fn load(&self) -> Cursors {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Cursors::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read cursor state; starting from zero");
                return Cursors::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cursors) => cursors,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt cursor state; starting from zero");
                Cursors::default()
            }
        }
    }

    /// Persists the cursors, creating parent directories as needed.
    pub fn save(&self, cursors: &Cursors) -> Result<(), WatcherError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| WatcherError::StateWrite {
                    path: self.path.display().to_string(),
                    source,
                })?;
            }
        }

        let encoded = serde_json::to_string(cursors)?;
        std::fs::write(&self.path, encoded).map_err(|source| WatcherError::StateWrite {
            path: self.path.display().to_string(),
            source,
        })
    }
}
