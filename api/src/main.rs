#![forbid(unsafe_code)]

use api::data::DiagnosticsStore;
use api::server::{serve, AppState, ServerConfig, ServerError};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::from_env();
    init_tracing(config.log_json);

    let store = DiagnosticsStore::seeded();
    info!(
        sections = store.overview().sections.len(),
        "diagnostics store loaded"
    );

    serve(AppState::new(store, config)).await.inspect_err(|err| {
        error!(%err, "fasttrack api stopped");
    })
}
