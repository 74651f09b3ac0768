// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{AuthenticatedAccount, TOKEN_COOKIE},
    error::ApiError,
    response::ErrorEnvelope,
    state::AppState,
};

pub mod account;
pub mod admin;
pub mod health;

pub fn router(state: AppState) -> Router {
    let resolver = state.resolver.clone();

    let public: Router<AppState> = Router::new()
        .route("/greeting", get(account::greeting))
        .route("/auth/logout", post(account::logout));

    let authenticated: Router<AppState> = resolver
        .authenticated()
        .apply(Router::new().route("/auth/me", get(account::me)));

    let admin: Router<AppState> = resolver
        .admin()
        .apply(Router::new().route("/admin/status", get(admin::status)));

    let v1_routes = public.merge(authenticated).merge(admin);

    let app: Router<AppState> = Router::new()
        .route("/health", get(health::health))
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(not_found);

    resolver
        .apply(app)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> Response {
    ApiError::not_found("route not found").into_response()
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        components.add_security_scheme(
            "cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(TOKEN_COOKIE))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        account::greeting,
        account::me,
        account::logout,
        admin::status
    ),
    components(
        schemas(
            AuthenticatedAccount,
            ErrorEnvelope,
            health::HealthResponse,
            account::GreetingResponse,
            admin::AdminStatusResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Account", description = "Identity of the caller"),
        (name = "Admin", description = "Owner-only operations")
    )
)]
struct ApiDoc;
