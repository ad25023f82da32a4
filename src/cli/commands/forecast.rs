use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use crate::config::initialize_app_state_with_path;
use crate::helpers::comparison::price_comparison;

/// Runs the forecast-and-compare routine once and prints both figures.
pub async fn forecast(data_path: &Path, product_id: &str) -> Result<()> {
    let state = initialize_app_state_with_path(data_path)?;
    debug!("Computing dashboard figures for product {}", product_id);

    let comparison = price_comparison(&state).await?;
    let figures = compute::forecast_and_compare(
        state.forecaster.as_ref(),
        &state.table,
        &comparison,
        product_id,
    )
    .with_context(|| format!("Failed to compute dashboard for product {}", product_id))?;

    println!("{}", serde_json::to_string_pretty(&figures)?);
    info!("Figures for product {} written to stdout", product_id);
    Ok(())
}
