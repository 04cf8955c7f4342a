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

//! Idea DAL

use diesel::prelude::*;

use super::DAL;
use crate::database::schema::ideas;
use crate::error::StoreError;
use crate::models::idea::IDEA_STATUS_APPROVED;
use crate::models::{Idea, NewIdea};

/// Data access layer for idea operations.
#[derive(Clone)]
pub struct IdeaDAL<'a> {
    dal: &'a DAL,
}

impl<'a> IdeaDAL<'a> {
    pub fn new(dal: &'a DAL) -> Self {
        Self { dal }
    }

    /// Inserts an idea and returns the stored row.
    pub async fn create(&self, new_idea: NewIdea) -> Result<Idea, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let row: Idea = conn
            .interact(move |conn| {
                diesel::insert_into(ideas::table)
                    .values(&new_idea)
                    .get_result(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(row)
    }

    /// Fetches an idea by id.
    pub async fn get(&self, id: i64) -> Result<Idea, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let row: Idea = conn
            .interact(move |conn| ideas::table.find(id).first(conn))
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(row)
    }

    /// Lists all ideas, newest id first.
    pub async fn list(&self) -> Result<Vec<Idea>, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let rows: Vec<Idea> = conn
            .interact(|conn| ideas::table.order(ideas::id.desc()).load(conn))
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(rows)
    }

    /// Marks an idea approved and returns the updated row.
    pub async fn approve(&self, id: i64) -> Result<Idea, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let row: Idea = conn
            .interact(move |conn| {
                diesel::update(ideas::table.find(id))
                    .set(ideas::status.eq(IDEA_STATUS_APPROVED))
                    .get_result(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(row)
    }

    /// Rows with id above the given high-water mark, newest first.
    pub async fn created_after(&self, id: i64) -> Result<Vec<Idea>, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let rows: Vec<Idea> = conn
            .interact(move |conn| {
                ideas::table
                    .filter(ideas::id.gt(id))
                    .order(ideas::id.desc())
                    .load(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(rows)
    }
}
