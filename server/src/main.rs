//! gRPC server implementation

use std::sync::Arc;

use log::info;
use svc_route_search::store::{MemoryStore, RouteStore, DEFAULT_ROUTES};
use svc_route_search::*;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Will use default config settings if no environment vars are found.
    let config = Config::try_from_env()
        .map_err(|e| format!("Failed to load configuration from environment: {}", e))?;

    // Try to load log configuration from the provided log file.
    // Will default to stdout debug logging if the file can not be loaded.
    load_logger_config_from_file(config.log_config.as_str())
        .await
        .or_else(|e| Ok::<(), String>(log::error!("(main) {}", e)))?;

    info!("(main) Server startup.");

    let store = MemoryStore::new();
    if config.seed_routes {
        store
            .seed(DEFAULT_ROUTES)
            .await
            .map_err(|e| format!("Failed to seed route table: {}", e))?;
    }
    let store: Arc<dyn RouteStore> = Arc::new(store);

    // Spawn the GRPC server for this service
    tokio::spawn(grpc::server::grpc_server(config, store, None)).await?;

    info!("(main) server shutdown.");

    // Make sure all log message are written/ displayed before shutdown
    log::logger().flush();

    Ok(())
}
