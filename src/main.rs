use std::env;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use employee_records::api::{AppState, create_router};
use employee_records::config::{ConfigLoader, load_seed, seed_store};
use employee_records::logging::init_logging;
use employee_records::store::InMemoryStore;

const DEFAULT_CONFIG_PATH: &str = "config/records.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let loader = ConfigLoader::load(&config_path)?;
    init_logging(&loader.config().logging)?;

    info!(config = %config_path, "Employee records service starting");

    let store = Arc::new(InMemoryStore::new());
    if let Some(seed_path) = &loader.config().seed_path {
        let seed = load_seed(seed_path)?;
        seed_store(store.as_ref(), seed, Utc::now())?;
    }

    let bind_address = loader.config().server.bind_address.clone();
    let router = create_router(AppState::new(loader, store));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
