// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Resolves the calling account and enforces the authenticated/admin tiers.
//!
//! ## Auth Flow
//!
//! 1. Client presents `Authorization: Bearer <token>` or a `token` cookie
//! 2. [`IdentityResolver`] (every request):
//!    - extracts the credential, header first
//!    - validates it with the [`TokenValidator`]
//!    - binds the [`AuthenticatedAccount`] into the request, or records an
//!      anonymous identity when nothing valid was presented
//! 3. [`Gate`]s on protected route groups:
//!    - `authenticated` rejects anonymous requests with 401
//!    - `admin` rejects anything but an owner account with 403
//!
//! ## Security
//!
//! - Rejections carry the fixed body `{"ok":false,"message":null}`
//! - Validator failure reasons are logged, never returned
//! - Token expiry comes solely from the signed `exp` claim

pub mod capability;
pub mod claims;
pub mod credentials;
pub mod error;
pub mod extractor;
pub mod identity;
pub mod middleware;
pub mod token;

pub use capability::Capability;
pub use claims::{AuthenticatedAccount, TokenClaims};
pub use credentials::{AUTHORIZATION_SCHEME, TOKEN_COOKIE};
pub use error::AuthError;
pub use extractor::{AdminOnly, Auth, OptionalAuth};
pub use identity::RequestIdentity;
pub use middleware::{Gate, IdentityResolver};
pub use token::{JwtAuthority, TokenValidator};
