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

//! Adjutant HTTP API server.
//!
//! CRUD endpoints over the dashboard store, file upload/download, system
//! statistics, and read access to the notification queue. Every create and
//! approve mutation enqueues a notification record with the same dedup-key
//! derivation the change detector uses, so downstream consumers see each
//! logical event once.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod sysmon;
pub mod uploads;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
