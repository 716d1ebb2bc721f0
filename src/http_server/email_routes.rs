//! Email Capture Routes
//!
//! Endpoints for adding, listing, and deleting signups, plus aggregate
//! statistics. Each handler is a thin adapter from HTTP to the record store.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::notifier::Notifier;
use crate::store::{EmailStore, SignupStats, StoreError};

// ==================
// Shared State
// ==================

/// State shared across the email handlers
pub struct EmailState {
    pub store: EmailStore,
    pub notifier: Option<Arc<dyn Notifier>>,
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddedResponse {
    pub message: String,
    pub email: String,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct EmailEntry {
    pub email: String,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ==================
// Email Routes
// ==================

/// Create email capture routes
pub fn email_routes(state: Arc<EmailState>) -> Router {
    Router::new()
        .route("/emails", post(add_email_handler))
        .route("/emails", get(list_emails_handler))
        .route("/emails", delete(delete_email_handler))
        .route("/emails/stats", get(stats_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: &str) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Store failures collapse to an opaque 500 with the underlying message,
/// duplicates included.
fn store_error(e: StoreError) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// Fire the signup alert without awaiting it. The send runs on the blocking
/// pool and its outcome is only logged.
fn dispatch_notification(notifier: Arc<dyn Notifier>, email_added: String) {
    tokio::task::spawn_blocking(move || match notifier.notify(&email_added) {
        Ok(()) => tracing::info!(email = %email_added, "signup notification sent"),
        Err(e) => tracing::warn!(email = %email_added, error = %e, "signup notification failed"),
    });
}

// ==================
// Handlers
// ==================

async fn add_email_handler(
    State(state): State<Arc<EmailState>>,
    Json(request): Json<EmailRequest>,
) -> Result<(StatusCode, Json<AddedResponse>), HandlerError> {
    let email = match request.email.as_deref() {
        Some(e) if !e.is_empty() => e,
        _ => return Err(bad_request("Email is required")),
    };

    let record = state.store.add(email).await.map_err(store_error)?;

    if let Some(notifier) = state.notifier.clone() {
        dispatch_notification(notifier, record.email.clone());
    }

    Ok((
        StatusCode::CREATED,
        Json(AddedResponse {
            message: "Email added successfully".to_string(),
            time: record.formatted_time(),
            email: record.email,
        }),
    ))
}

async fn list_emails_handler(
    State(state): State<Arc<EmailState>>,
) -> Result<Json<Vec<EmailEntry>>, HandlerError> {
    let records = state.store.list().await.map_err(store_error)?;

    let entries = records
        .into_iter()
        .map(|r| EmailEntry {
            time: r.formatted_time(),
            email: r.email,
        })
        .collect();

    Ok(Json(entries))
}

async fn delete_email_handler(
    State(state): State<Arc<EmailState>>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let email = match request.email.as_deref() {
        Some(e) if !e.is_empty() => e,
        _ => return Err(bad_request("Email is required")),
    };

    let deleted = state.store.remove(email).await.map_err(store_error)?;

    if deleted {
        Ok(Json(MessageResponse {
            message: "Email deleted successfully".to_string(),
        }))
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Email not found".to_string(),
            }),
        ))
    }
}

async fn stats_handler(
    State(state): State<Arc<EmailState>>,
) -> Result<Json<SignupStats>, HandlerError> {
    let stats = state.store.stats().await.map_err(store_error)?;
    Ok(Json(stats))
}
