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

//! File transfer endpoints: allow-listed multipart upload, listings and
//! attachment download.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use adjutant::models::NewNotification;
use adjutant::util::format_size;

use super::projects::{enqueue, log_activity};
use crate::error::ApiError;
use crate::state::AppState;
use crate::uploads::allowed_file;

/// Entries served by `/api/uploads/recent`.
const RECENT_LIMIT: usize = 10;

/// `POST /api/upload`
///
/// Accepts one multipart `file` field, checks the extension allow-list,
/// stores the bytes under a UUID name and enqueues a `file_uploaded` record.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            return Err(ApiError::bad_request("No file selected"));
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;
        file = Some((filename, bytes.to_vec()));
        break;
    }

    let Some((filename, bytes)) = file else {
        return Err(ApiError::bad_request("No file provided"));
    };
    if filename.is_empty() {
        return Err(ApiError::bad_request("No file selected"));
    }
    if !allowed_file(&filename) {
        return Err(ApiError::bad_request("File type not allowed"));
    }

    let stored = state
        .uploads
        .save(&filename, &bytes)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to store upload: {}", e)))?;

    enqueue(
        &state,
        NewNotification::file_uploaded(
            &stored.original_name,
            &stored.stored_name,
            &stored.path.display().to_string(),
            stored.size,
        ),
    )
    .await;
    log_activity(
        &state,
        "info",
        format!(
            "File \"{}\" uploaded ({})",
            stored.original_name,
            format_size(stored.size)
        ),
    )
    .await;

    Ok(Json(json!({
        "success": true,
        "filename": stored.original_name,
        "stored_name": stored.stored_name,
        "path": stored.path.display().to_string(),
        "size": format_size(stored.size),
        "message": "File uploaded successfully",
    })))
}

/// `GET /api/uploads/recent`
pub async fn recent(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let entries = state
        .uploads
        .list()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to list uploads: {}", e)))?;

    let listing: Vec<Value> = entries
        .iter()
        .take(RECENT_LIMIT)
        .map(|entry| {
            json!({
                "name": entry.name,
                "size": format_size(entry.size),
                "path": entry.path.display().to_string(),
                "time": entry.modified,
            })
        })
        .collect();

    Ok(Json(json!(listing)))
}

/// `GET /api/files`
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let entries = state
        .uploads
        .list()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to list uploads: {}", e)))?;

    let files: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "name": entry.name,
                "original_name": entry.name,
                "size": entry.size,
                "size_formatted": format_size(entry.size),
                "uploaded_at": entry.modified,
                "download_url": format!("/api/download/{}", entry.name),
            })
        })
        .collect();

    Ok(Json(json!({ "files": files })))
}

/// `GET /api/download/{filename}`
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let Some(path) = state.uploads.resolve(&filename) else {
        return Err(ApiError::bad_request("Invalid file name"));
    };

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApiError::not_found("File not found"));
        }
        Err(e) => return Err(ApiError::internal(format!("Failed to read file: {}", e))),
    };

    let response = (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "application/octet-stream".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response();

    Ok(response)
}
