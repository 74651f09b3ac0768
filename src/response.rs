// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Response envelope shared by every endpoint.
//!
//! Success and failure bodies have the same shape:
//!
//! ```json
//! {"ok": true, "message": {"username": "alice"}}
//! {"ok": false, "message": null}
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope wrapping every JSON body.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub ok: bool,
    pub message: Option<T>,
}

/// Error body as documented in the OpenAPI schema.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub ok: bool,
    /// Human readable detail, `null` for authentication failures.
    pub message: Option<String>,
}

/// Send a successful response carrying `message`.
pub fn send<T: Serialize>(status: StatusCode, message: T) -> Response {
    let body = Envelope {
        ok: status.is_success(),
        message: Some(message),
    };
    (status, Json(body)).into_response()
}

/// Send the canonical error body with no message.
///
/// The response is terminal: callers return it instead of running the
/// rest of the pipeline.
pub fn send_error(status: StatusCode) -> Response {
    send_error_message(status, None)
}

/// Send an error body with an optional human readable message.
pub fn send_error_message(status: StatusCode, message: Option<String>) -> Response {
    let body = Envelope {
        ok: false,
        message,
    };
    (status, Json(body)).into_response()
}
