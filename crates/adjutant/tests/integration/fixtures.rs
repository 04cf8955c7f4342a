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

//! Shared test fixtures: a migrated scratch database per test.

use adjutant::dal::DAL;
use adjutant::database::connection::Database;
use adjutant::models::{NewIdea, NewProject, NewTask};
use tempfile::TempDir;

/// A file-backed scratch database; the directory lives as long as the
/// fixture.
pub struct TestStore {
    _dir: TempDir,
    pub database: Database,
}

impl TestStore {
    /// Creates and migrates a fresh database.
    pub async fn init() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create scratch dir");
        let path = dir.path().join("dashboard.db");
        let database = Database::new(&path.display().to_string());
        database
            .run_migrations()
            .await
            .expect("Failed to run migrations");
        Self {
            _dir: dir,
            database,
        }
    }

    pub fn dal(&self) -> DAL {
        DAL::new(self.database.clone())
    }

    /// The scratch directory, for state files living next to the database.
    pub fn dir(&self) -> &std::path::Path {
        self._dir.path()
    }
}

pub fn project(id: i64, name: &str, description: &str) -> NewProject {
    NewProject::new(Some(id), name.to_string(), description.to_string(), None)
}

pub fn idea(id: i64, title: &str, description: &str) -> NewIdea {
    NewIdea::new(
        Some(id),
        title.to_string(),
        description.to_string(),
        None,
        None,
        None,
    )
}

pub fn task(id: i64, title: &str) -> NewTask {
    NewTask::new(Some(id), title.to_string(), None, None, false)
}
