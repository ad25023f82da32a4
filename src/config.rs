use anyhow::Result;
use moka::future::Cache;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::schemas::AppState;

/// Sales file read when no path is configured
pub const DEFAULT_DATA_PATH: &str = "US_Regional_Sales_Data.csv";

/// Address the dashboard listens on when none is configured
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8888";

/// Load the sales table and build the shared application state.
///
/// The table is loaded exactly once; a missing or malformed file is fatal.
pub fn initialize_app_state_with_path(data_path: &Path) -> Result<AppState> {
    tracing::info!("Loading sales table from {}", data_path.display());
    let table = model::load_sales_table(data_path)?;

    Ok(app_state_from_table(table))
}

/// Build application state around an already loaded table
pub fn app_state_from_table(table: model::SalesTable) -> AppState {
    // Entries derive from the immutable table only
    let cache = Cache::builder()
        .max_capacity(16)
        .time_to_idle(Duration::from_secs(3600))
        .build();

    AppState {
        table: Arc::new(table),
        forecaster: compute::default_forecaster(),
        cache,
    }
}
