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

//! System statistics snapshot.
//!
//! A background ticker owns the `sysinfo` handles and refreshes a shared
//! snapshot; request handlers only read the snapshot, keeping `/api/system`
//! cheap. CPU usage needs two refreshes over time to produce a delta, which
//! the ticker provides naturally.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use sysinfo::{Disks, System};
use tokio::sync::RwLock;
use tracing::debug;

/// CPU, memory and disk usage, as percentages 0-100.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SystemSnapshot {
    pub cpu: f32,
    pub memory: f32,
    pub disk: f32,
}

/// Shared handle to the latest snapshot.
#[derive(Clone, Default)]
pub struct SystemStats {
    snapshot: Arc<RwLock<SystemSnapshot>>,
}

impl SystemStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently collected snapshot.
    pub async fn snapshot(&self) -> SystemSnapshot {
        *self.snapshot.read().await
    }

    /// Spawns the refresher ticker. The task runs for the life of the
    /// process.
    pub fn spawn_refresher(&self, interval: Duration) -> tokio::task::JoinHandle<()> {
        let shared = self.snapshot.clone();
        tokio::spawn(async move {
            let mut system = System::new();
            let mut disks = Disks::new_with_refreshed_list();
            // Baseline refresh so the first interval yields a CPU delta.
            system.refresh_cpu_usage();
            system.refresh_memory();

            loop {
                tokio::time::sleep(interval).await;

                system.refresh_cpu_usage();
                system.refresh_memory();
                disks.refresh();

                let snapshot = SystemSnapshot {
                    cpu: system.global_cpu_usage(),
                    memory: memory_percent(&system),
                    disk: disk_percent(&disks),
                };
                debug!(?snapshot, "Refreshed system stats");
                *shared.write().await = snapshot;
            }
        })
    }
}

fn memory_percent(system: &System) -> f32 {
    let total = system.total_memory();
    if total == 0 {
        return 0.0;
    }
    (system.used_memory() as f64 / total as f64 * 100.0) as f32
}

fn disk_percent(disks: &Disks) -> f32 {
    let mut total: u64 = 0;
    let mut available: u64 = 0;
    for disk in disks.list() {
        total += disk.total_space();
        available += disk.available_space();
    }
    if total == 0 {
        return 0.0;
    }
    ((total - available) as f64 / total as f64 * 100.0) as f32
}
