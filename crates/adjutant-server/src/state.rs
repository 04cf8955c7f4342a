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

//! Shared request-handler state. All configuration flows through here; no
//! module-level globals.

use std::sync::Arc;

use adjutant::dal::DAL;

use crate::config::ServerConfig;
use crate::sysmon::SystemStats;
use crate::uploads::UploadStore;

#[derive(Clone)]
pub struct AppState {
    pub dal: DAL,
    pub uploads: UploadStore,
    pub stats: SystemStats,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(dal: DAL, uploads: UploadStore, stats: SystemStats, config: ServerConfig) -> Self {
        Self {
            dal,
            uploads,
            stats,
            config: Arc::new(config),
        }
    }
}
