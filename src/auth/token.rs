// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token issuance and validation.
//!
//! Tokens are HS256 JWTs signed with a shared secret. Validity is a pure
//! function of the signature and the current time; there is no server-side
//! revocation list.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::{AuthError, AuthenticatedAccount, TokenClaims};

/// Default clock skew tolerance (60 seconds).
pub const DEFAULT_LEEWAY_SECS: u64 = 60;

/// Validates a presented token and returns the account it is bound to.
///
/// Implementations may suspend (e.g. a network-backed account lookup).
/// Callers hold no locks across the call.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate_token(&self, token: &str) -> Result<AuthenticatedAccount, AuthError>;
}

/// Signs and verifies account tokens.
///
/// Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct JwtAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
}

impl std::fmt::Debug for JwtAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuthority")
            .field("issuer", &self.issuer)
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

impl JwtAuthority {
    pub fn new(secret: &[u8], issuer: impl Into<String>, leeway_secs: u64) -> Self {
        let issuer = issuer.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&issuer]);
        validation.validate_nbf = true;
        validation.leeway = leeway_secs;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer,
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Create a signed token for `account` that expires at `expires_at`.
    pub fn create_token_for_account(
        &self,
        account: &AuthenticatedAccount,
        expires_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let claims = TokenClaims {
            sub: account.username.clone(),
            owner: account.owner,
            iss: self.issuer.clone(),
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningFailed(e.to_string()))
    }

    /// Verify signature, expiry and issuer, then project the account.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedAccount, AuthError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;

        if data.claims.sub.trim().is_empty() {
            return Err(AuthError::MalformedToken);
        }

        Ok(AuthenticatedAccount::from_claims(data.claims))
    }
}

#[async_trait]
impl TokenValidator for JwtAuthority {
    async fn validate_token(&self, token: &str) -> Result<AuthenticatedAccount, AuthError> {
        self.verify(token)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    pub const TEST_SECRET: &[u8] = b"test-secret-that-is-long-enough-for-hs256";
    pub const TEST_ISSUER: &str = "account-gate-test";

    pub fn authority() -> Arc<JwtAuthority> {
        Arc::new(JwtAuthority::new(TEST_SECRET, TEST_ISSUER, 0))
    }

    pub fn token_for(account: &AuthenticatedAccount) -> String {
        authority()
            .create_token_for_account(account, Utc::now() + chrono::Duration::minutes(1))
            .unwrap()
    }

    /// Validator that records how often it was asked.
    #[derive(Default)]
    pub struct CountingValidator {
        pub calls: AtomicUsize,
    }

    impl CountingValidator {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TokenValidator for CountingValidator {
        async fn validate_token(&self, token: &str) -> Result<AuthenticatedAccount, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            authority().verify(token)
        }
    }
}
