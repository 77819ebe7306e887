//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::post,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::not_found;
use crate::api::AppState;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// Stored as given; format and uniqueness are not checked
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    /// Stored as given, without hashing
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "secret")]
    pub password: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        CreateUser {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

/// Create user routes
///
/// `/users/` is served like `/users`.
pub fn user_routes() -> Router<AppState> {
    let users = post(create_user).get(list_users).fallback(not_found);

    Router::new()
        .route("/users", users.clone())
        .route("/users/", users)
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body or missing field", body = MessageResponse),
        (status = 500, description = "Database error", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state.user_service.create_user(payload.into()).await?;

    Ok(Created(UserResponse::from(user)))
}

/// List every user
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All stored users", body = Vec<UserResponse>),
        (status = 500, description = "Database error", body = MessageResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
