// ABOUTME: User record database operations
// ABOUTME: Schema setup and CRUD for the users table
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    let id: String = row.try_get("id").map_err(AppError::from)?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| AppError::database(format!("Corrupt user id in database: {e}")))?;

    Ok(User {
        id,
        username: row.try_get("username").map_err(AppError::from)?,
        email: row.try_get("email").map_err(AppError::from)?,
        weight_kg: row.try_get("weight_kg").map_err(AppError::from)?,
        height_cm: row.try_get("height_cm").map_err(AppError::from)?,
        bmi: row.try_get("bmi").map_err(AppError::from)?,
        calorie_target: row.try_get("calorie_target").map_err(AppError::from)?,
        protein_target_g: row.try_get("protein_target_g").map_err(AppError::from)?,
        carb_target_g: row.try_get("carb_target_g").map_err(AppError::from)?,
        fat_target_g: row.try_get("fat_target_g").map_err(AppError::from)?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(AppError::from)?,
    })
}

impl Database {
    /// Create the users table and its indexes
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                email TEXT UNIQUE,
                weight_kg REAL,
                height_cm REAL,
                bmi REAL,
                calorie_target REAL,
                protein_target_g REAL,
                carb_target_g REAL,
                fat_target_g REAL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_created_at ON users(created_at)")
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Insert a new user record
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when the username or email is taken,
    /// `DatabaseError` on other failures.
    pub async fn create_user(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, username, email, weight_kg, height_cm, bmi,
                               calorie_target, protein_target_g, carb_target_g,
                               fat_target_g, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.weight_kg)
        .bind(user.height_cm)
        .bind(user.bmi)
        .bind(user.calorie_target)
        .bind(user.protein_target_g)
        .bind(user.carb_target_g)
        .bind(user.fat_target_g)
        .bind(user.created_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Fetch a user by id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Update a user record in place, preserving its creation timestamp
    ///
    /// Returns `false` when no row matched the id.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` on a uniqueness conflict,
    /// `DatabaseError` on other failures.
    pub async fn update_user(&self, user: &User) -> AppResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET username = ?, email = ?, weight_kg = ?, height_cm = ?, bmi = ?,
                calorie_target = ?, protein_target_g = ?, carb_target_g = ?,
                fat_target_g = ?
            WHERE id = ?
            ",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.weight_kg)
        .bind(user.height_cm)
        .bind(user.bmi)
        .bind(user.calorie_target)
        .bind(user.protein_target_g)
        .bind(user.carb_target_g)
        .bind(user.fat_target_g)
        .bind(user.id.to_string())
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a user by id, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn delete_user(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List users newest-first with the total count
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn list_users(&self, limit: u32, offset: u32) -> AppResult<(Vec<User>, i64)> {
        let rows = sqlx::query(
            "SELECT * FROM users ORDER BY created_at DESC, id LIMIT ? OFFSET ?",
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(self.pool())
        .await?;

        let users = rows.iter().map(row_to_user).collect::<AppResult<Vec<_>>>()?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool())
            .await?;

        Ok((users, total))
    }
}
