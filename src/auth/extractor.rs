// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractors for the resolved account.
//!
//! These read the identity bound by the resolver; they never look at
//! credentials themselves.
//!
//! ```rust,ignore
//! async fn my_handler(Auth(account): Auth) -> impl IntoResponse {
//!     // account is AuthenticatedAccount
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::identity;
use super::{AuthError, AuthenticatedAccount, Capability};

fn bound_account(parts: &Parts) -> Option<AuthenticatedAccount> {
    identity::lookup(&parts.extensions).account().cloned()
}

/// Extractor requiring an authenticated account.
///
/// # Example
///
/// ```rust,ignore
/// async fn me(Auth(account): Auth) -> Json<AuthenticatedAccount> {
///     Json(account)
/// }
/// ```
pub struct Auth(pub AuthenticatedAccount);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bound_account(parts)
            .map(Auth)
            .ok_or(AuthError::Unauthenticated)
    }
}

/// Extractor that requires the elevated privilege.
///
/// Rejects with 403 both when nobody is signed in and when the account is
/// not an owner.
pub struct AdminOnly(pub AuthenticatedAccount);

impl<S> FromRequestParts<S> for AdminOnly
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match bound_account(parts) {
            Some(account) if Capability::Admin.permits(Some(&account)) => Ok(AdminOnly(account)),
            _ => Err(Capability::Admin.rejection()),
        }
    }
}

/// Optional authentication extractor.
///
/// Returns `None` if no account is bound, instead of rejecting.
pub struct OptionalAuth(pub Option<AuthenticatedAccount>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(bound_account(parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::RequestIdentity;
    use axum::http::Request;

    fn parts_with(identity: Option<RequestIdentity>) -> Parts {
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;
        if let Some(identity) = identity {
            parts.extensions.insert(identity);
        }
        parts
    }

    #[tokio::test]
    async fn auth_requires_bound_account() {
        let mut parts = parts_with(None);
        let result = Auth::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));

        let mut parts = parts_with(Some(RequestIdentity::anonymous()));
        let result = Auth::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn auth_reads_bound_account() {
        let mut parts = parts_with(Some(RequestIdentity::bound(AuthenticatedAccount::new(
            "from_middleware",
        ))));

        let result = Auth::from_request_parts(&mut parts, &()).await;
        assert_eq!(result.unwrap().0.username, "from_middleware");
    }

    #[tokio::test]
    async fn auth_ignores_raw_credentials() {
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", "Bearer whatever")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn admin_only_rejects_non_owner() {
        let mut parts = parts_with(Some(RequestIdentity::bound(
            AuthenticatedAccount::new("member").with_owner(false),
        )));

        let result = AdminOnly::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Forbidden)));
    }

    #[tokio::test]
    async fn admin_only_rejects_missing_identity_with_forbidden() {
        let mut parts = parts_with(None);
        let result = AdminOnly::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Forbidden)));
    }

    #[tokio::test]
    async fn admin_only_accepts_owner() {
        let mut parts = parts_with(Some(RequestIdentity::bound(
            AuthenticatedAccount::new("owner").with_owner(true),
        )));

        let result = AdminOnly::from_request_parts(&mut parts, &()).await;
        assert_eq!(result.unwrap().0.username, "owner");
    }

    #[tokio::test]
    async fn optional_auth_returns_none_without_account() {
        let mut parts = parts_with(Some(RequestIdentity::anonymous()));
        let result = OptionalAuth::from_request_parts(&mut parts, &()).await;
        assert!(result.unwrap().0.is_none());
    }
}
