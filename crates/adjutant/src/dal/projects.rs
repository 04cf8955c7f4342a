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

//! Project DAL

use diesel::prelude::*;

use super::DAL;
use crate::database::schema::projects;
use crate::error::StoreError;
use crate::models::{NewProject, Project};

/// Data access layer for project operations.
#[derive(Clone)]
pub struct ProjectDAL<'a> {
    dal: &'a DAL,
}

impl<'a> ProjectDAL<'a> {
    pub fn new(dal: &'a DAL) -> Self {
        Self { dal }
    }

    /// Inserts a project and returns the stored row.
    pub async fn create(&self, new_project: NewProject) -> Result<Project, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let row: Project = conn
            .interact(move |conn| {
                diesel::insert_into(projects::table)
                    .values(&new_project)
                    .get_result(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(row)
    }

    /// Fetches a project by id.
    pub async fn get(&self, id: i64) -> Result<Project, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let row: Project = conn
            .interact(move |conn| projects::table.find(id).first(conn))
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(row)
    }

    /// Lists all projects, newest id first.
    pub async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let rows: Vec<Project> = conn
            .interact(|conn| projects::table.order(projects::id.desc()).load(conn))
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(rows)
    }

    /// Updates name, description and status; stamps `updated_at`.
    pub async fn update(
        &self,
        id: i64,
        name: String,
        description: String,
        status: String,
    ) -> Result<Project, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let now = chrono::Utc::now().naive_utc();
        let row: Project = conn
            .interact(move |conn| {
                diesel::update(projects::table.find(id))
                    .set((
                        projects::name.eq(name),
                        projects::description.eq(description),
                        projects::status.eq(status),
                        projects::updated_at.eq(now),
                    ))
                    .get_result(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(row)
    }

    /// Rows with id above the given high-water mark, newest first.
    ///
    /// Used by the change detector.
    pub async fn created_after(&self, id: i64) -> Result<Vec<Project>, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let rows: Vec<Project> = conn
            .interact(move |conn| {
                projects::table
                    .filter(projects::id.gt(id))
                    .order(projects::id.desc())
                    .load(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(rows)
    }
}
