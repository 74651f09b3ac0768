// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::auth::{IdentityResolver, JwtAuthority};
use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub tokens: Arc<JwtAuthority>,
    pub resolver: IdentityResolver,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(tokens: Arc<JwtAuthority>) -> Self {
        Self {
            resolver: IdentityResolver::new(tokens.clone()),
            tokens,
            started_at: Utc::now(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(JwtAuthority::new(
            &config.auth_secret,
            config.auth_issuer.clone(),
            config.auth_leeway_secs,
        )))
    }
}
