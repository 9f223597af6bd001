//! Contacts HTTP API.
//!
//! Exposes CRUD operations over a [`ContactStore`] as plain JSON-over-HTTP.
//!
//! # Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | `GET`    | `/api/contacts` | 200, array of contacts | 500 |
//! | `POST`   | `/api/contacts` | 201, created contact | 400, 500 |
//! | `PUT`    | `/api/contacts/{id}` | 200, updated contact | 400, 404, 500 |
//! | `DELETE` | `/api/contacts/{id}` | 200, `{"id": ...}` | 404, 500 |
//! | `GET`    | `/health` | 200, `{"status","version"}` | — |
//!
//! All error responses carry a `{"message": "..."}` body. Storage failures
//! are logged server-side and reported to the client only as a generic
//! message.
//!
//! # Concurrency
//!
//! Every request re-reads the collection from the store; nothing is cached
//! between requests. Mutating requests take a single in-process lock across
//! their whole read-modify-write cycle, so interleaved writers cannot lose
//! each other's updates. The external contract is the same as without the
//! lock.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so a browser UI served
//! from another port can call the API. There is no server-side
//! authentication of any kind.

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::contacts::{self, ContactError};
use crate::models::{Contact, ContactInput};
use crate::store::{ContactStore, FileStore};

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    store: Arc<dyn ContactStore>,
    /// Serializes mutating read-modify-write cycles against the store.
    write_lock: Arc<Mutex<()>>,
}

/// Starts the contacts HTTP server.
///
/// Binds to `[server].bind` from the config and serves requests against a
/// [`FileStore`] at `[store].path` until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let store = Arc::new(FileStore::new(config.store.path.clone()));
    run_server_with_store(&config.server.bind, store).await
}

/// Like [`run_server`], but accepts any [`ContactStore`] implementation.
pub async fn run_server_with_store(
    bind_addr: &str,
    store: Arc<dyn ContactStore>,
) -> anyhow::Result<()> {
    let app = router(store);

    println!("Contacts API listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the API router around the given store.
pub fn router(store: Arc<dyn ContactStore>) -> Router {
    let state = AppState {
        store,
        write_lock: Arc::new(Mutex::new(())),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/contacts", get(handle_list).post(handle_create))
        .route(
            "/api/contacts/{id}",
            axum::routing::put(handle_update).delete(handle_delete),
        )
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

// ============ Error response ============

/// JSON error response body: `{"message": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Maps a [`ContactError`] to an HTTP response by variant.
///
/// `storage_message` is the generic client-facing text for storage failures;
/// the underlying error goes to the server log only.
fn map_error(err: ContactError, storage_message: &str) -> AppError {
    match err {
        ContactError::Validation(message) => AppError {
            status: StatusCode::BAD_REQUEST,
            message,
        },
        ContactError::NotFound(_) => AppError {
            status: StatusCode::NOT_FOUND,
            message: "Contact not found.".to_string(),
        },
        ContactError::Storage(e) => {
            tracing::error!(error = ?e, "contact storage failure");
            AppError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: storage_message.to_string(),
            }
        }
    }
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Handler for `GET /health`.
///
/// Used by monitoring and by the integration tests' readiness poll.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ /api/contacts ============

/// Handler for `GET /api/contacts`.
async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, AppError> {
    let all = contacts::list_contacts(state.store.as_ref())
        .await
        .map_err(|e| map_error(e, "Failed to read contacts."))?;
    Ok(Json(all))
}

/// Handler for `POST /api/contacts`.
///
/// A missing or non-JSON body is treated as an empty one, so it fails
/// validation with a 400 rather than a framework-level rejection.
async fn handle_create(
    State(state): State<AppState>,
    body: Result<Json<ContactInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let input = body.map(|Json(i)| i).unwrap_or_default();

    let _guard = state.write_lock.lock().await;
    let created = contacts::create_contact(state.store.as_ref(), &input)
        .await
        .map_err(|e| map_error(e, "Failed to save contact."))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for `PUT /api/contacts/{id}`.
async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<Contact>, AppError> {
    let input = body.map(|Json(i)| i).unwrap_or_default();

    let _guard = state.write_lock.lock().await;
    let updated = contacts::update_contact(state.store.as_ref(), &id, &input)
        .await
        .map_err(|e| map_error(e, "Failed to update contact."))?;

    Ok(Json(updated))
}

/// JSON response body for `DELETE /api/contacts/{id}`.
#[derive(Serialize)]
struct DeletedResponse {
    id: String,
}

/// Handler for `DELETE /api/contacts/{id}`.
async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let _guard = state.write_lock.lock().await;
    let removed = contacts::delete_contact(state.store.as_ref(), &id)
        .await
        .map_err(|e| map_error(e, "Failed to delete contact."))?;

    Ok(Json(DeletedResponse { id: removed }))
}
