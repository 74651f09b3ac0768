// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential extraction from request headers.
//!
//! A token may arrive as `Authorization: Bearer <token>` or as a cookie
//! named `token`. A well-formed header always wins; the cookie is only
//! consulted when the header is missing or does not use the bearer scheme.

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap,
};

/// Scheme expected in the `Authorization` header.
pub const AUTHORIZATION_SCHEME: &str = "Bearer";

/// Name of the cookie carrying the raw token.
pub const TOKEN_COOKIE: &str = "token";

/// Return the presented token, if any.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    bearer_token(headers).or_else(|| cookie_value(headers, TOKEN_COOKIE))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix(AUTHORIZATION_SCHEME)?
        .strip_prefix(' ')?;

    (!token.is_empty()).then_some(token)
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
        .filter(|value| !value.is_empty())
}
