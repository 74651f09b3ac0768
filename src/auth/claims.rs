// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT claims and authenticated account representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims carried by an account token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (account username)
    pub sub: String,

    /// Elevated privilege flag; absent means not elevated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<bool>,

    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

/// Authenticated account bound to a single request.
///
/// This is the minimal projection of an account that the gates and
/// handlers see. It is built fresh from token validation on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedAccount {
    /// Account username (token `sub` claim)
    pub username: String,

    /// Elevated privilege flag
    #[serde(default)]
    pub owner: Option<bool>,
}

impl AuthenticatedAccount {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            owner: None,
        }
    }

    pub fn with_owner(mut self, owner: bool) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Create from validated claims.
    pub fn from_claims(claims: TokenClaims) -> Self {
        Self {
            username: claims.sub,
            owner: claims.owner,
        }
    }

    /// Check if this account holds the elevated privilege.
    ///
    /// An unset flag counts as not elevated.
    pub fn is_owner(&self) -> bool {
        self.owner.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims() -> TokenClaims {
        TokenClaims {
            sub: "shiori".to_string(),
            owner: Some(true),
            iss: "account-gate".to_string(),
            iat: 1700000000,
            exp: 1700003600,
        }
    }

    #[test]
    fn from_claims_extracts_username() {
        let account = AuthenticatedAccount::from_claims(sample_claims());
        assert_eq!(account.username, "shiori");
        assert!(account.is_owner());
    }

    #[test]
    fn unset_owner_is_not_elevated() {
        let mut claims = sample_claims();
        claims.owner = None;
        let account = AuthenticatedAccount::from_claims(claims);
        assert_eq!(account.owner, None);
        assert!(!account.is_owner());
    }

    #[test]
    fn explicit_false_is_not_elevated() {
        assert!(!AuthenticatedAccount::new("reader").with_owner(false).is_owner());
    }

    #[test]
    fn claims_without_owner_deserialize() {
        let claims: TokenClaims = serde_json::from_str(
            r#"{"sub":"reader","iss":"account-gate","iat":1,"exp":2}"#,
        )
        .unwrap();
        assert_eq!(claims.owner, None);
    }
}
