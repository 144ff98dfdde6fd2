//! Logging setup: a tracing_subscriber fmt layer writing to stderr, and to a log
//! file as well when one is configured. stdout stays reserved for JSON output.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{writer::MakeWriterExt, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Installs the global tracing subscriber.
/// Level comes from RUST_LOG (e.g. info, debug, trace); defaults to info.
/// Load .env (dotenvy::dotenv()) before calling, otherwise RUST_LOG from .env is ignored.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match log_file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let writer = io::stderr.and(Arc::new(file));
            Registry::default()
                .with(env_filter)
                .with(fmt_layer(writer))
                .try_init()
        }
        None => Registry::default()
            .with(env_filter)
            .with(fmt_layer(io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}

fn fmt_layer<S, W>(writer: W) -> impl Layer<S> + Send + Sync + 'static
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false)
}
