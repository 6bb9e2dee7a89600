use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console-only logging, used when observability is switched off.
///
/// `LOG_LEVEL` sets the level for DevConnect crates (default `info`);
/// `RUST_LOG`, when present, overrides the whole filter.
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "devconnect={},tower_http=warn,hyper=warn,tonic=warn,h2=warn,sqlx=warn",
            log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(env_filter);

    // try_init: a second call (e.g. from tests) is a no-op
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
