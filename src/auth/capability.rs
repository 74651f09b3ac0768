// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authorization tiers checked by the gates.

use super::{AuthError, AuthenticatedAccount};

/// Capability a gate requires from the bound identity.
///
/// ## Tiers
///
/// - `Authenticated` - any bound account
/// - `Admin` - a bound account with the elevated privilege flag set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Authenticated,
    Admin,
}

impl Capability {
    /// Check whether the (possibly absent) identity satisfies this tier.
    pub fn permits(self, account: Option<&AuthenticatedAccount>) -> bool {
        match (self, account) {
            (_, None) => false,
            (Capability::Authenticated, Some(_)) => true,
            (Capability::Admin, Some(account)) => account.is_owner(),
        }
    }

    /// Error returned when [`Capability::permits`] fails.
    ///
    /// The admin tier answers 403 whether or not anyone is signed in, so a
    /// caller cannot tell "unauthenticated" from "not an admin".
    pub fn rejection(self) -> AuthError {
        match self {
            Capability::Authenticated => AuthError::Unauthenticated,
            Capability::Admin => AuthError::Forbidden,
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Authenticated => write!(f, "authenticated"),
            Capability::Admin => write!(f, "admin"),
        }
    }
}
