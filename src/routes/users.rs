// ABOUTME: User profile CRUD route handlers backed by the SQLite store
// ABOUTME: Provides create, read, update, delete, and paginated list endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User profile routes
//!
//! Handlers validate the incoming profile payload, derive the body mass
//! index when measurements are present, and delegate persistence to the
//! database layer.

use crate::errors::AppError;
use crate::models::{User, UserProfile};
use crate::routes::ApiResponse;
use crate::server::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

const DEFAULT_PAGE_SIZE: u32 = 50;
const MAX_PAGE_SIZE: u32 = 500;

/// Query parameters for the user list endpoint
#[derive(Deserialize, Default)]
struct ListQuery {
    limit: Option<u32>,
    offset: Option<u32>,
}

impl ListQuery {
    fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }
}

/// User profile routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users", post(Self::handle_create))
            .route("/api/users", get(Self::handle_list))
            .route("/api/users/:id", get(Self::handle_get))
            .route("/api/users/:id", put(Self::handle_update))
            .route("/api/users/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(profile): Json<UserProfile>,
    ) -> Result<Response, AppError> {
        profile.validate()?;

        let user = User::from_profile(&profile);
        resources.database.create_user(&user).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "created user");
        Ok((
            StatusCode::CREATED,
            Json(ApiResponse::with_message(user, "User created successfully")),
        )
            .into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = resources
            .database
            .get_user(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id}")))?;

        Ok((StatusCode::OK, Json(ApiResponse::new(user))).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        Json(profile): Json<UserProfile>,
    ) -> Result<Response, AppError> {
        profile.validate()?;

        let user = User::with_id(id, &profile);
        let updated = resources.database.update_user(&user).await?;
        if !updated {
            return Err(AppError::not_found(format!("User {id}")));
        }

        // Re-read so the response carries the stored creation timestamp
        let user = resources
            .database
            .get_user(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id}")))?;

        tracing::info!(user_id = %id, "updated user");
        Ok((
            StatusCode::OK,
            Json(ApiResponse::with_message(user, "User updated successfully")),
        )
            .into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let deleted = resources.database.delete_user(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("User {id}")));
        }

        tracing::info!(user_id = %id, "deleted user");
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let limit = params.limit();
        let offset = params.offset();
        let (users, total) = resources.database.list_users(limit, offset).await?;

        Ok((
            StatusCode::OK,
            Json(ApiResponse::new(serde_json::json!({
                "users": users,
                "total": total,
                "limit": limit,
                "offset": offset,
            }))),
        )
            .into_response())
    }
}
