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

//! Task DAL

use diesel::prelude::*;

use super::DAL;
use crate::database::schema::tasks;
use crate::error::StoreError;
use crate::models::{NewTask, Task};

/// Data access layer for task operations.
#[derive(Clone)]
pub struct TaskDAL<'a> {
    dal: &'a DAL,
}

impl<'a> TaskDAL<'a> {
    pub fn new(dal: &'a DAL) -> Self {
        Self { dal }
    }

    /// Inserts a task and returns the stored row.
    pub async fn create(&self, new_task: NewTask) -> Result<Task, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let row: Task = conn
            .interact(move |conn| {
                diesel::insert_into(tasks::table)
                    .values(&new_task)
                    .get_result(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(row)
    }

    /// Fetches a task by id.
    pub async fn get(&self, id: i64) -> Result<Task, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let row: Task = conn
            .interact(move |conn| tasks::table.find(id).first(conn))
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(row)
    }

    /// Lists all tasks, newest id first.
    pub async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let rows: Vec<Task> = conn
            .interact(|conn| tasks::table.order(tasks::id.desc()).load(conn))
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(rows)
    }

    /// Flips the `done` flag and returns the updated row.
    ///
    /// Read and write happen in one transaction so concurrent toggles cannot
    /// lose a flip.
    pub async fn toggle(&self, id: i64) -> Result<Task, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let row: Task = conn
            .interact(move |conn| {
                conn.transaction(|conn| {
                    let done: bool = tasks::table.find(id).select(tasks::done).first(conn)?;
                    diesel::update(tasks::table.find(id))
                        .set(tasks::done.eq(!done))
                        .get_result(conn)
                })
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(row)
    }

    /// Rows with id above the given high-water mark, newest first.
    pub async fn created_after(&self, id: i64) -> Result<Vec<Task>, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let rows: Vec<Task> = conn
            .interact(move |conn| {
                tasks::table
                    .filter(tasks::id.gt(id))
                    .order(tasks::id.desc())
                    .load(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(rows)
    }
}
