//! Shared helpers for integration tests.
//!
//! Drives the real router against an in-memory repository so no MongoDB
//! server is needed.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use mongo_user_api::api::{create_router, AppState};
use mongo_user_api::domain::{CreateUser, User};
use mongo_user_api::errors::{AppError, AppResult};
use mongo_user_api::infra::UserRepository;
use mongo_user_api::services::{UserManager, UserService};

/// In-memory stand-in for the MongoDB repository
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let user = User::new(input);
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }
}

/// Service whose every call fails as if the database were gone
pub struct UnavailableUserService;

#[async_trait]
impl UserService for UnavailableUserService {
    async fn create_user(&self, _input: CreateUser) -> AppResult<User> {
        Err(AppError::internal("connection pool closed"))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Err(AppError::internal("connection pool closed"))
    }
}

/// Repository whose every call fails with a MongoDB driver error
pub struct BrokenUserRepository;

async fn driver_error() -> AppError {
    let err = mongodb::options::ClientOptions::parse("not-a-mongo-uri")
        .await
        .unwrap_err();
    AppError::from(err)
}

#[async_trait]
impl UserRepository for BrokenUserRepository {
    async fn create(&self, _input: CreateUser) -> AppResult<User> {
        Err(driver_error().await)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Err(driver_error().await)
    }
}

/// Router backed by a repository that cannot reach the database
pub fn broken_store_app() -> Router {
    create_router(AppState::new(Arc::new(UserManager::new(Arc::new(
        BrokenUserRepository,
    )))))
}

/// Router wired to the given repository
pub fn app_with(repo: Arc<InMemoryUserRepository>) -> Router {
    create_router(AppState::new(Arc::new(UserManager::new(repo))))
}

/// Router whose service always fails
pub fn failing_app() -> Router {
    create_router(AppState::new(Arc::new(UnavailableUserService)))
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send a request and decode the JSON reply (`Null` when the body is empty)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

pub fn user_payload(username: &str, email: &str, password: &str) -> String {
    serde_json::json!({
        "username": username,
        "email": email,
        "password": password,
    })
    .to_string()
}
