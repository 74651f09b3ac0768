// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response;

/// Authentication error type.
///
/// Validation variants are produced by the token authority. The identity
/// resolver swallows them, so clients only ever observe the gate variants
/// (`Unauthenticated`, `Forbidden`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Token could not be decoded or is missing required claims
    #[error("Token is malformed")]
    MalformedToken,
    /// Token signature is invalid
    #[error("Token signature is invalid")]
    InvalidSignature,
    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,
    /// Token is not yet valid
    #[error("Token is not yet valid")]
    TokenNotYetValid,
    /// Token issuer is invalid
    #[error("Token issuer is invalid")]
    InvalidIssuer,
    /// Token could not be signed
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
    /// No identity is bound to the request
    #[error("Authentication is required")]
    Unauthenticated,
    /// Identity is missing or lacks the elevated privilege
    #[error("Insufficient permissions for this operation")]
    Forbidden,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MalformedToken => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::TokenExpired => "token_expired",
            AuthError::TokenNotYetValid => "token_not_yet_valid",
            AuthError::InvalidIssuer => "invalid_issuer",
            AuthError::SigningFailed(_) => "signing_failed",
            AuthError::Unauthenticated => "unauthenticated",
            AuthError::Forbidden => "forbidden",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::TokenNotYetValid
            | AuthError::InvalidIssuer
            | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::SigningFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
            ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid,
            _ => AuthError::MalformedToken,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // The body never says why authentication failed.
        response::send_error(self.status_code())
    }
}
