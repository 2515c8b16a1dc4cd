//! # hivemindd — hivemind daemon
//!
//! Composition root that wires a store into the HTTP adapter and starts
//! the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Open the configured store (redb file or in-memory)
//! - Construct application services, injecting the store via port traits
//! - Build the axum router, bind a TCP port, and serve
//!
//! Store-open and bind failures are fatal — no retry.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use hivemind_adapter_http_axum::router;
use hivemind_adapter_http_axum::state::AppState;
use hivemind_adapter_storage_memory::InMemoryStore;
use hivemind_adapter_storage_redb::RedbStore;
use hivemind_app::ports::{SensorStore, SwitchStore};
use hivemind_app::services::sensor_service::SensorService;
use hivemind_app::services::switch_service::SwitchService;
use tracing_subscriber::EnvFilter;

mod config;

use config::{Backend, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let addr = config.bind_addr();
    match config.storage.backend {
        Backend::Redb => {
            let store = RedbStore::open(&config.storage.path)?;
            tracing::info!(path = %config.storage.path, "opened redb store");
            run(store, &addr).await
        }
        Backend::Memory => {
            tracing::warn!("using the in-memory store; state is lost on shutdown");
            run(InMemoryStore::new(), &addr).await
        }
    }
}

async fn run<S>(store: S, addr: &str) -> anyhow::Result<()>
where
    S: SensorStore + SwitchStore + Clone + Send + Sync + 'static,
{
    let state = AppState::new(
        SensorService::new(store.clone()),
        SwitchService::new(store),
    );
    let app = router::build(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "hivemindd listening");
    axum::serve(listener, app).await?;

    Ok(())
}
