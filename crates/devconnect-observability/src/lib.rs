//! DevConnect Observability
//!
//! - structured logging to console and rolling files
//! - optional OpenTelemetry trace export
//! - Prometheus metrics and business counters
//!
//! Everything beyond console logging sits behind the `observability`
//! feature (on by default). At runtime `OBSERVABILITY_ENABLED=false` turns
//! it off as well.
//!
//! ```no_run
//! use devconnect_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, is_observability_enabled, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_app, metrics_middleware, track_github_request, track_jwt_issued,
    track_jwt_validation, track_login_failure, track_login_success, track_post_operation,
    track_profile_saved, track_user_deleted, track_user_registered,
};

/// No-op replacements used when the `observability` feature is off.
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Stand-in so `init_metrics` keeps its signature.
    #[derive(Clone, Debug)]
    pub struct PrometheusHandle;

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_tracing() {
        super::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn metrics_app(_handle: PrometheusHandle) -> Router {
        Router::new()
    }

    pub fn track_user_registered() {}
    pub fn track_user_deleted() {}
    pub fn track_login_success() {}
    pub fn track_login_failure(_reason: &str) {}
    pub fn track_jwt_issued() {}
    pub fn track_jwt_validation(_success: bool) {}
    pub fn track_profile_saved(_created: bool) {}
    pub fn track_post_operation(_operation: &str) {}
    pub fn track_github_request(_found: bool) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
