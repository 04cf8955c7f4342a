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

//! Upload storage.
//!
//! Files land under a UUID name carrying the original extension, after an
//! explicit extension allow-list check. Download resolution rejects anything
//! that is not a plain file name inside the store.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

/// Extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "pdf", "png", "jpg", "jpeg", "gif", "txt", "md", "json", "csv", "zip", "py", "js", "html",
    "css", "mp3", "wav", "ogg", "m4a",
];

/// True when the file name carries an allow-listed extension.
pub fn allowed_file(filename: &str) -> bool {
    extension_of(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// One stored upload.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub original_name: String,
    pub stored_name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// One entry in a listing of the store.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
    pub path: PathBuf,
    pub modified: NaiveDateTime,
}

/// Filesystem-backed upload store.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes the bytes under a fresh UUID name, keeping the original
    /// extension. The caller has already validated the extension.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<StoredFile> {
        let ext = extension_of(original_name).unwrap_or_else(|| "bin".to_string());
        let stored_name = format!("{}.{}", Uuid::new_v4(), ext);
        let path = self.root.join(&stored_name);

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(&path, bytes).await?;

        Ok(StoredFile {
            original_name: original_name.to_string(),
            stored_name,
            path,
            size: bytes.len() as u64,
        })
    }

    /// Lists stored files, most recently modified first.
    pub async fn list(&self) -> std::io::Result<Vec<FileEntry>> {
        let mut entries = Vec::new();
        let mut dir = match tokio::fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            // An empty store is not an error.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(entries),
            Err(e) => return Err(e),
        };

        while let Some(entry) = dir.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            entries.push(FileEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
                path: entry.path(),
                modified: DateTime::<Utc>::from(modified).naive_utc(),
            });
        }

        entries.sort_by(|a, b| b.modified.cmp(&a.modified));
        Ok(entries)
    }

    /// Resolves a stored file name to its path, rejecting anything that
    /// could escape the store (separators, parent references).
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty()
            || name.contains('/')
            || name.contains('\\')
            || name.contains("..")
            || name.starts_with('.')
        {
            return None;
        }
        Some(self.root.join(name))
    }
}
