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

//! Route table.

pub mod files;
pub mod ideas;
pub mod logs;
pub mod notifications;
pub mod projects;
pub mod system;
pub mod tasks;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/projects",
            get(projects::list).post(projects::create),
        )
        .route("/api/projects/{id}", put(projects::update))
        .route("/api/ideas", get(ideas::list).post(ideas::create))
        .route("/api/ideas/{id}/approve", post(ideas::approve))
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route("/api/tasks/{id}/toggle", post(tasks::toggle))
        .route("/api/logs", get(logs::list))
        .route("/api/notifications", get(notifications::list))
        .route("/api/system", get(system::status))
        .route("/api/upload", post(files::upload))
        .route("/api/uploads/recent", get(files::recent))
        .route("/api/files", get(files::list))
        .route("/api/download/{filename}", get(files::download))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
