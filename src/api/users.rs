//! User CRUD endpoints (`/api/users`)

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::User;
use crate::infrastructure::user::CreateUserRequest;

/// Request body for creating or fully replacing a user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserApiRequest {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
}

impl From<CreateUserApiRequest> for CreateUserRequest {
    fn from(request: CreateUserApiRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            date_of_birth: request.date_of_birth,
            phone_number: request.phone_number,
        }
    }
}

/// User response body, including the derived age
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub age: i32,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        let today = Utc::now().date_naive();

        Self {
            id: user.id(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().map(String::from),
            email: user.email().to_string(),
            date_of_birth: user.date_of_birth(),
            phone_number: user.phone_number().to_string(),
            age: user.age(today),
        }
    }
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(email = %request.email, "creating user");

    let user = state.user_service.create(request.into()).await?;

    info!(user_id = %user.id(), "user created");

    let location = format!("/api/users/{}", user.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(&user)),
    ))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list().await?;

    debug!(count = users.len(), "retrieved users");

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %id, "getting user");

    let user = state.user_service.get(id).await?.ok_or_else(|| {
        warn!(user_id = %id, "user not found");
        ApiError::not_found(format!("User '{}' not found", id))
    })?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = %id, "updating user");

    state.user_service.update(id, request.into()).await?;

    info!(user_id = %id, "user updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = %id, "deleting user");

    state.user_service.delete(id).await?;

    info!(user_id = %id, "user deleted");

    Ok(StatusCode::NO_CONTENT)
}
