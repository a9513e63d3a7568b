use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::events::TracingStateEventSink;
use fintrack_core::documents::DocumentStoreTrait;
use fintrack_core::{AppStateStore, Gateways};
use fintrack_storage_sqlite::SqliteDocumentStore;

pub struct AppState {
    pub db_path: String,
    pub gateways: Gateways,
    pub store: Arc<AppStateStore>,
}

/// Installs the global subscriber. `log` records from the library crates are
/// forwarded to it.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Opens the SQLite document store and wires the gateways and state store over it.
///
/// Nothing is loaded; commands call `load_all` when they need the cache.
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    tracing::info!("Opening document store at {}", config.db_path);
    let documents: Arc<dyn DocumentStoreTrait> =
        Arc::new(SqliteDocumentStore::open(&config.db_path)?);
    let gateways = Gateways::from_document_store(documents);
    let store = Arc::new(AppStateStore::new(
        gateways.clone(),
        Arc::new(TracingStateEventSink),
    ));
    Ok(AppState {
        db_path: config.db_path.clone(),
        gateways,
        store,
    })
}
