// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request-scoped identity binding.
//!
//! The resolver stores exactly one [`RequestIdentity`] in the request
//! extensions. Lookups distinguish "never resolved" from "resolved, nobody
//! signed in"; gates treat both as unauthenticated.

use axum::http::Extensions;

use super::AuthenticatedAccount;

/// Outcome of identity resolution for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestIdentity {
    account: Option<AuthenticatedAccount>,
}

impl RequestIdentity {
    pub fn anonymous() -> Self {
        Self { account: None }
    }

    pub fn bound(account: AuthenticatedAccount) -> Self {
        Self {
            account: Some(account),
        }
    }

    pub fn account(&self) -> Option<&AuthenticatedAccount> {
        self.account.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.account.is_some()
    }
}

/// What a request's extensions say about its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityLookup<'a> {
    /// No resolver has run for this request.
    Unresolved,
    /// Resolution ran and produced no account.
    Anonymous,
    Bound(&'a AuthenticatedAccount),
}

impl<'a> IdentityLookup<'a> {
    pub fn account(self) -> Option<&'a AuthenticatedAccount> {
        match self {
            IdentityLookup::Bound(account) => Some(account),
            IdentityLookup::Unresolved | IdentityLookup::Anonymous => None,
        }
    }
}

pub fn lookup(extensions: &Extensions) -> IdentityLookup<'_> {
    match extensions.get::<RequestIdentity>() {
        None => IdentityLookup::Unresolved,
        Some(identity) => match identity.account() {
            Some(account) => IdentityLookup::Bound(account),
            None => IdentityLookup::Anonymous,
        },
    }
}

/// Store `identity` unless one is already present.
///
/// Returns `false` when the request already carried an identity, which is
/// left untouched.
pub fn bind(extensions: &mut Extensions, identity: RequestIdentity) -> bool {
    if extensions.get::<RequestIdentity>().is_some() {
        return false;
    }
    extensions.insert(identity);
    true
}
