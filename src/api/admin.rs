// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admin-only API endpoints.

use axum::{extract::State, http::StatusCode, response::Response};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    auth::AdminOnly,
    response::{self, ErrorEnvelope},
    state::AppState,
};

/// Service status response.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStatusResponse {
    /// When the service started (RFC 3339).
    pub started_at: String,
    /// Seconds since start.
    pub uptime_seconds: i64,
    /// Issuer the token authority signs and expects.
    pub issuer: String,
    /// Username of the admin who asked.
    pub requested_by: String,
}

/// Report service status.
#[utoipa::path(
    get,
    path = "/v1/admin/status",
    tag = "Admin",
    security(("bearer" = []), ("cookie" = [])),
    responses(
        (status = 200, description = "Service status", body = AdminStatusResponse),
        (status = 403, description = "Forbidden - not signed in or not an owner", body = ErrorEnvelope),
    )
)]
pub async fn status(State(state): State<AppState>, AdminOnly(account): AdminOnly) -> Response {
    let uptime = Utc::now().signed_duration_since(state.started_at);

    tracing::info!(username = %account.username, "admin status requested");

    response::send(
        StatusCode::OK,
        AdminStatusResponse {
            started_at: state.started_at.to_rfc3339(),
            uptime_seconds: uptime.num_seconds(),
            issuer: state.tokens.issuer().to_string(),
            requested_by: account.username,
        },
    )
}
