//! Response projection
//!
//! Converts failures into the [`ErrorResponse`] payload returned to clients.
//! The status is the failure's own hint when it is a valid HTTP status,
//! otherwise 500. The payload and the wire status always carry the same code.

use std::error::Error as StdError;

use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::catch;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use vsp_domain::constants::STATUS_INTERNAL_SERVER_ERROR;
use vsp_domain::error::{Error, Fault};

use crate::constants::{DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_SOURCE};

/// Error payload returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable failure description, never empty
    pub message: String,
    /// Identifier of the component that reported the failure, never empty
    pub source: String,
    /// Resolved HTTP status
    pub status_code: u16,
}

impl ErrorResponse {
    /// Build a payload, substituting defaults for empty message or source
    pub fn new(message: impl Into<String>, source: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: non_empty(message.into(), DEFAULT_ERROR_MESSAGE),
            source: non_empty(source.into(), DEFAULT_ERROR_SOURCE),
            status_code,
        }
    }
}

fn non_empty(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Project a taxonomy failure into an error response
pub fn project_error(failure: &Error, source: &str) -> ErrorResponse {
    ErrorResponse::new(failure.to_string(), source, resolve_status(failure.status_hint()))
}

/// Project a failure outside the taxonomy; always a server error
pub fn project_unclassified(failure: &(dyn StdError + 'static), source: &str) -> ErrorResponse {
    ErrorResponse::new(failure.to_string(), source, STATUS_INTERNAL_SERVER_ERROR)
}

/// Handler failure rendered through [`project_error`]
#[derive(Debug)]
pub struct ApiError {
    error: Error,
    source: String,
}

impl ApiError {
    /// Attach the reporting component to a failure
    pub fn new(error: Error, source: impl Into<String>) -> Self {
        Self {
            error,
            source: source.into(),
        }
    }

    /// Underlying failure
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Payload this failure renders as
    pub fn to_response(&self) -> ErrorResponse {
        project_error(&self.error, &self.source)
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self::new(error, DEFAULT_ERROR_SOURCE)
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let body = self.to_response();
        match self.error.fault() {
            Some(Fault::Client) => {
                warn!(source = %body.source, status = body.status_code, error = %self.error, "Request failed")
            }
            _ => {
                error!(source = %body.source, status = body.status_code, error = %self.error, "Request failed")
            }
        }
        (http_status(body.status_code), Json(body)).respond_to(request)
    }
}

/// Resolve a status hint, falling back to 500 when absent or outside 100..=599
pub fn resolve_status(hint: Option<u16>) -> u16 {
    hint.filter(|code| (100..=599).contains(code))
        .unwrap_or(STATUS_INTERNAL_SERVER_ERROR)
}

/// Map a numeric status to Rocket's through [`resolve_status`]
pub fn http_status(code: u16) -> Status {
    Status::new(resolve_status(Some(code)))
}

/// Render unmatched routes and guard failures as [`ErrorResponse`]
#[catch(default)]
pub fn default_catcher(status: Status, request: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    let message = status.reason().unwrap_or(DEFAULT_ERROR_MESSAGE);
    (
        status,
        Json(ErrorResponse::new(
            message,
            request.uri().path().to_string(),
            status.code,
        )),
    )
}
