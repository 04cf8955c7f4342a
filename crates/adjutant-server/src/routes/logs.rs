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

//! Activity feed endpoint.

use axum::extract::State;
use axum::Json;

use adjutant::models::ActivityEntry;

use crate::error::ApiError;
use crate::state::AppState;

/// Entries served per request.
const LOG_LIMIT: i64 = 100;

/// `GET /api/logs`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ActivityEntry>>, ApiError> {
    Ok(Json(state.dal.activity_log().latest(LOG_LIMIT).await?))
}
