use anyhow::Result;
use std::path::Path;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::initialize_app_state_with_path;
use crate::router::{create_router, with_static_assets};

pub async fn serve(data_path: &Path, bind_address: &str, static_dir: Option<&Path>) -> Result<()> {
    trace!("Entering serve function");
    info!("Demandcast dashboard starting up");
    debug!("Data path: {}", data_path.display());
    debug!("Bind address: {}", bind_address);

    // Load the sales table; any error here is fatal
    trace!("Initializing application state");
    let state = match initialize_app_state_with_path(data_path) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to load sales data: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let mut app = create_router(state);
    if let Some(dir) = static_dir {
        info!("Serving dashboard frontend from {}", dir.display());
        app = with_static_assets(app, dir);
    }
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Demandcast API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
