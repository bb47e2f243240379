//! The user store service binary.

use std::sync::Arc;

use log::info;

use userstore_rs::api;
use userstore_rs::server::{HttpServer, ServerConfig};
use userstore_rs::store::UserStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG controls the filter, e.g. RUST_LOG=info
    env_logger::init();

    let config = ServerConfig::default();
    let server = HttpServer::new(config);

    // The store is constructed once here and shared into the handlers;
    // it is the only state the process owns
    let store = Arc::new(UserStore::new());
    api::register_routes(&server, store).await;

    info!("Starting user store on http://{addr}", addr = server.config.addr);
    server.start().await?;

    Ok(())
}
