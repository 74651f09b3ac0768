// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account endpoints.

use axum::{
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    response::Response,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{Auth, AuthenticatedAccount, OptionalAuth};
use crate::response::{self, ErrorEnvelope};

/// Clears the `token` cookie. Only the transport copy is dropped; the token
/// itself stays valid until its `exp`.
const CLEAR_TOKEN_COOKIE: &str = "token=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

/// Response for GET /v1/greeting
#[derive(Debug, Serialize, ToSchema)]
pub struct GreetingResponse {
    pub greeting: String,
    pub authenticated: bool,
}

/// Greet the caller, personalised when an account is bound.
#[utoipa::path(
    get,
    path = "/v1/greeting",
    tag = "Account",
    responses(
        (status = 200, description = "Greeting", body = GreetingResponse),
    )
)]
pub async fn greeting(OptionalAuth(account): OptionalAuth) -> Response {
    let body = match account {
        Some(account) => GreetingResponse {
            greeting: format!("Hello, {}!", account.username),
            authenticated: true,
        },
        None => GreetingResponse {
            greeting: "Hello, guest!".to_string(),
            authenticated: false,
        },
    };
    response::send(StatusCode::OK, body)
}

/// Get the currently authenticated account.
#[utoipa::path(
    get,
    path = "/v1/auth/me",
    tag = "Account",
    security(("bearer" = []), ("cookie" = [])),
    responses(
        (status = 200, description = "Account information", body = AuthenticatedAccount),
        (status = 401, description = "Unauthorized - invalid or missing token", body = ErrorEnvelope),
    )
)]
pub async fn me(Auth(account): Auth) -> Response {
    response::send(StatusCode::OK, account)
}

/// Drop the token cookie from the browser.
#[utoipa::path(
    post,
    path = "/v1/auth/logout",
    tag = "Account",
    responses(
        (status = 200, description = "Cookie cleared"),
    )
)]
pub async fn logout() -> Response {
    let mut response = response::send(StatusCode::OK, "logged out");
    response
        .headers_mut()
        .insert(SET_COOKIE, HeaderValue::from_static(CLEAR_TOKEN_COOKIE));
    response
}
