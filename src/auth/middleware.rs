// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication middleware for Axum.
//!
//! Two kinds of stage live here:
//!
//! - [`IdentityResolver`] runs on every request. It tries to turn a
//!   presented credential into an [`AuthenticatedAccount`] and records the
//!   outcome in the request extensions. It never rejects.
//! - [`Gate`] runs on protected route groups. It checks the recorded
//!   identity against a [`Capability`] and either passes the request on or
//!   answers with the canonical 401/403 body.
//!
//! Gates are only obtainable from a resolver, and a gate that finds no
//! recorded identity runs the resolver itself, so a route group cannot end
//! up guarded by a gate that silently skipped resolution.
//!
//! ```rust,ignore
//! let resolver = IdentityResolver::new(authority);
//! let admin = resolver.admin().apply(Router::new().route("/stats", get(stats)));
//! let app = resolver.apply(Router::new().nest("/admin", admin));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use super::credentials::extract_token;
use super::identity::{self, IdentityLookup, RequestIdentity};
use super::{Capability, TokenValidator};

/// Best-effort identity resolution stage.
#[derive(Clone)]
pub struct IdentityResolver {
    validator: Arc<dyn TokenValidator>,
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver").finish_non_exhaustive()
    }
}

impl IdentityResolver {
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self { validator }
    }

    /// Resolve the identity presented in `headers`.
    ///
    /// Absent and invalid credentials both produce an anonymous identity;
    /// the validator's reason is only logged.
    pub async fn resolve(&self, headers: &HeaderMap) -> RequestIdentity {
        let Some(token) = extract_token(headers) else {
            return RequestIdentity::anonymous();
        };

        match self.validator.validate_token(token).await {
            Ok(account) => {
                tracing::debug!(username = %account.username, "resolved request identity");
                RequestIdentity::bound(account)
            }
            Err(e) => {
                tracing::debug!(
                    error_code = e.error_code(),
                    "credential rejected, continuing unauthenticated"
                );
                RequestIdentity::anonymous()
            }
        }
    }

    /// Resolve and bind the identity unless the request already carries one.
    pub async fn resolve_into(&self, request: &mut Request) {
        if !matches!(identity::lookup(request.extensions()), IdentityLookup::Unresolved) {
            return;
        }
        let resolved = self.resolve(request.headers()).await;
        identity::bind(request.extensions_mut(), resolved);
    }

    /// Build a gate requiring `capability`.
    pub fn gate(&self, capability: Capability) -> Gate {
        Gate {
            capability,
            resolver: self.clone(),
        }
    }

    /// Gate requiring any authenticated account (401 otherwise).
    pub fn authenticated(&self) -> Gate {
        self.gate(Capability::Authenticated)
    }

    /// Gate requiring an elevated account (403 otherwise).
    pub fn admin(&self) -> Gate {
        self.gate(Capability::Admin)
    }

    /// Run resolution in front of every route of `router`.
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(middleware::from_fn_with_state(self.clone(), resolve_identity))
    }
}

/// Identity resolution middleware function.
pub async fn resolve_identity(
    State(resolver): State<IdentityResolver>,
    mut request: Request,
    next: Next,
) -> Response {
    resolver.resolve_into(&mut request).await;
    next.run(request).await
}

/// Pipeline stage admitting only requests whose identity has a capability.
#[derive(Debug, Clone)]
pub struct Gate {
    capability: Capability,
    resolver: IdentityResolver,
}

impl Gate {
    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Guard every route currently in `router`.
    ///
    /// Must be called after the routes are added.
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.route_layer(middleware::from_fn_with_state(self.clone(), enforce))
    }
}

/// Gate middleware function.
pub async fn enforce(State(gate): State<Gate>, mut request: Request, next: Next) -> Response {
    let unresolved = matches!(
        identity::lookup(request.extensions()),
        IdentityLookup::Unresolved
    );
    if unresolved {
        tracing::warn!(
            path = %request.uri().path(),
            "gate reached before identity resolution, resolving inline"
        );
        gate.resolver.resolve_into(&mut request).await;
    }

    let permitted = gate
        .capability
        .permits(identity::lookup(request.extensions()).account());

    if !permitted {
        tracing::debug!(
            capability = %gate.capability,
            path = %request.uri().path(),
            "request rejected by gate"
        );
        return gate.capability.rejection().into_response();
    }

    next.run(request).await
}
