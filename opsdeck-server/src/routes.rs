//! HTTP surface: shared state, route handlers, and server startup.
//!
//! Each handler is stateless per request: read all records, validate,
//! mutate, write all back, respond. Business rules live here rather than in
//! the store — email uniqueness and the last-admin guard apply to users
//! only. Failures split into two kinds: validation rejections (400 with a
//! descriptive message) and storage failures (500 with a generic message
//! that names only the entity and verb, never the root cause).

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use opsdeck_model::{NewTask, NewUser, Task, User, UserRole};

use crate::store::{JsonStore, StoreError};

/// Shared server state: one store per entity type.
///
/// Stores hold only file paths, so no locking wraps the read-modify-write
/// sequence; the single-writer assumption is documented on [`JsonStore`].
pub struct AppState {
    /// Task store, backed by `tasks.json`.
    pub tasks: JsonStore<Task>,
    /// User store, backed by `users.json`.
    pub users: JsonStore<User>,
}

impl AppState {
    /// Creates stores for both entity types under the given data directory.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            tasks: JsonStore::new(data_dir.join("tasks.json")),
            users: JsonStore::new(data_dir.join("users.json")),
        }
    }
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A known business rule was violated; maps to 400 with the message.
    #[error("{0}")]
    Validation(String),

    /// A storage operation failed; maps to 500 with a generic message.
    /// The real cause is logged server-side only.
    #[error("{0}")]
    Storage(&'static str),
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string()),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Logs the storage failure and replaces it with a generic client message.
fn storage(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
    move |err| {
        tracing::error!(error = %err, "storage operation failed");
        ApiError::Storage(message)
    }
}

/// Body of a DELETE request: the id of the record to remove.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteRequest {
    /// Id of the record to remove.
    pub id: String,
}

/// Body of a successful DELETE response.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `true` on success.
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Task handlers
// ---------------------------------------------------------------------------

async fn list_tasks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state
        .tasks
        .read_all()
        .await
        .map_err(storage("Failed to fetch tasks"))?;
    Ok(Json(tasks))
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let stored = state
        .tasks
        .insert(new.into_task(String::new()))
        .await
        .map_err(storage("Failed to create task"))?;
    tracing::info!(id = %stored.id, title = %stored.title, "task created");
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn update_task(
    State(state): State<Arc<AppState>>,
    Json(task): Json<Task>,
) -> Result<Json<Task>, ApiError> {
    state
        .tasks
        .replace_by_id(task.clone())
        .await
        .map_err(storage("Failed to update task"))?;
    // The input record is echoed back as confirmation, whether or not an
    // id matched (an unknown id is a silent no-op).
    Ok(Json(task))
}

async fn delete_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state
        .tasks
        .remove_by_id(&req.id)
        .await
        .map_err(storage("Failed to delete task"))?;
    tracing::info!(id = %req.id, "task deleted");
    Ok(Json(DeleteResponse { success: true }))
}

// ---------------------------------------------------------------------------
// User handlers
// ---------------------------------------------------------------------------

async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .users
        .read_all()
        .await
        .map_err(storage("Failed to fetch users"))?;
    Ok(Json(users))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let users = state
        .users
        .read_all()
        .await
        .map_err(storage("Failed to create user"))?;

    // Email uniqueness is case-sensitive.
    if users.iter().any(|u| u.email == new.email) {
        return Err(ApiError::Validation(
            "User with this email already exists".to_string(),
        ));
    }

    let now = Utc::now();
    let user = User {
        id: String::new(),
        name: new.name,
        email: new.email,
        role: new.role,
        status: new.status,
        avatar: String::new(),
        last_active: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        join_date: now.format("%Y-%m-%d").to_string(),
        phone: new.phone,
        department: new.department,
    };

    let stored = state
        .users
        .insert(user)
        .await
        .map_err(storage("Failed to create user"))?;
    tracing::info!(id = %stored.id, email = %stored.email, "user created");
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    Json(user): Json<User>,
) -> Result<Json<User>, ApiError> {
    let users = state
        .users
        .read_all()
        .await
        .map_err(storage("Failed to update user"))?;

    if users
        .iter()
        .any(|u| u.email == user.email && u.id != user.id)
    {
        return Err(ApiError::Validation(
            "Another user with this email already exists".to_string(),
        ));
    }

    state
        .users
        .replace_by_id(user.clone())
        .await
        .map_err(storage("Failed to update user"))?;
    Ok(Json(user))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let users = state
        .users
        .read_all()
        .await
        .map_err(storage("Failed to delete user"))?;

    // The guard only applies when the target exists and is an admin;
    // deleting an unknown id falls through to the idempotent remove.
    if let Some(target) = users.iter().find(|u| u.id == req.id)
        && target.role == UserRole::Admin
    {
        let admins = users.iter().filter(|u| u.role == UserRole::Admin).count();
        if admins <= 1 {
            return Err(ApiError::Validation(
                "Cannot delete the last admin user".to_string(),
            ));
        }
    }

    state
        .users
        .remove_by_id(&req.id)
        .await
        .map_err(storage("Failed to delete user"))?;
    tracing::info!(id = %req.id, "user deleted");
    Ok(Json(DeleteResponse { success: true }))
}

// ---------------------------------------------------------------------------
// Router and server startup
// ---------------------------------------------------------------------------

/// Builds the API router over the given state.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/tasks",
            get(list_tasks)
                .post(create_task)
                .put(update_task)
                .delete(delete_task),
        )
        .route(
            "/api/users",
            get(list_users)
                .post(create_user)
                .put(update_user)
                .delete(delete_user),
        )
        .with_state(state)
}

/// Starts the API server with a pre-configured [`AppState`].
///
/// Returns the bound address and a join handle. This is the primary entry
/// point used by both `main.rs` and test code; binding to port 0 yields an
/// OS-assigned port.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server_with_state(
    addr: &str,
    state: Arc<AppState>,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "api server error");
        }
    });

    Ok((bound_addr, handle))
}
