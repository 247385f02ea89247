//! Waitlist API endpoint
//!
//! - POST /api/waitlist - Join the waitlist with `{ "email": "..." }`
//!
//! Every response carries `{ "message": "..." }`.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};

use super::service::{WaitlistError, WaitlistService, WaitlistStore};

pub const WAITLIST_PATH: &str = "/api/waitlist";

/// Request body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WaitlistRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Response body for every outcome
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct WaitlistMessage {
    pub message: String,
}

impl WaitlistMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Convert WaitlistError to API response
impl IntoResponse for WaitlistError {
    fn into_response(self) -> Response {
        let status = match &self {
            WaitlistError::InvalidEmail | WaitlistError::AlreadyRegistered => {
                StatusCode::BAD_REQUEST
            }
            WaitlistError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            WaitlistError::Internal(details) => {
                tracing::error!("Waitlist error: {}", details);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(WaitlistMessage::new(self.to_string()))).into_response()
    }
}

/// Create the waitlist API router
pub fn waitlist_router<S: WaitlistStore>(service: WaitlistService<S>) -> Router {
    Router::new()
        .route(
            WAITLIST_PATH,
            post(join_handler::<S>).fallback(method_not_allowed),
        )
        .with_state(service)
}

/// POST /api/waitlist
async fn join_handler<S: WaitlistStore>(
    State(service): State<WaitlistService<S>>,
    payload: Result<Json<WaitlistRequest>, JsonRejection>,
) -> Result<Json<WaitlistMessage>, WaitlistError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected waitlist body: {}", rejection);
        WaitlistError::InvalidEmail
    })?;

    service.join(request.email.as_deref()).await?;

    Ok(Json(WaitlistMessage::new("Successfully joined the waitlist")))
}

async fn method_not_allowed() -> WaitlistError {
    WaitlistError::MethodNotAllowed
}
