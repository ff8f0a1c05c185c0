// Framework bootstrap for the gateway runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::backend::BackendClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, backend_url: &str) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(backend_url)?;

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app until Ctrl-C and report errors rather than panicking.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        })?;

    tracing::info!("shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::new(config::http_host(), config::http_port());

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, &config::backend_url()).await
}

fn build_state(backend_url: &str) -> Result<Arc<AppState>> {
    let backend = BackendClient::new(backend_url)
        .map_err(|e| std::io::Error::other(format!("failed to initialize backend client: {e}")))?;
    tracing::debug!(backend_url = %backend.base_url(), "backend client configured");

    Ok(Arc::new(AppState {
        backend: Arc::new(backend),
    }))
}
