// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account Gate - request authentication layer
//!
//! Resolves the calling account from a bearer header or `token` cookie,
//! binds it to the request, and guards route groups with authenticated and
//! admin tiers.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Identity resolution, gates and token authority
//! - `config` - Environment configuration
//! - `response` - Shared JSON envelope

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod response;
pub mod state;
