use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use devconnect_observability::{logging_middleware, metrics_middleware};

use crate::docs::ApiDoc;
use crate::middleware::auth::{AUTH_HEADER, require_auth};
use crate::modules::auth::router::init_auth_router;
use crate::modules::posts::router::init_posts_router;
use crate::modules::profile::router::init_profile_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

async fn health() -> &'static str {
    "API Running"
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static(AUTH_HEADER),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/users", init_users_router())
                .nest("/auth", init_auth_router())
                .nest("/profile", init_profile_router())
                .nest(
                    "/posts",
                    init_posts_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                ),
        )
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
