use std::sync::Arc;

use compute::{ComputeError, PriceComparison};
use tracing::{debug, instrument};

use crate::schemas::{AppState, CachedData};

const PRICE_COMPARISON_KEY: &str = "price_comparison";

/// Price comparison over the whole sales table.
///
/// Built once on first use and then served from the cache; concurrent
/// first requests wait for the same build. The result depends only on the
/// immutable table.
#[instrument(skip(state))]
pub async fn price_comparison(state: &AppState) -> Result<Arc<PriceComparison>, ComputeError> {
    let table = state.table.clone();
    let cached = state
        .cache
        .try_get_with(PRICE_COMPARISON_KEY.to_string(), async move {
            debug!("Building price comparison table");
            PriceComparison::from_table(&table)
                .map(|comparison| CachedData::PriceComparison(Arc::new(comparison)))
        })
        .await
        .map_err(|err| {
            Arc::try_unwrap(err).unwrap_or_else(|shared| ComputeError::DataFrame(shared.to_string()))
        })?;

    match cached {
        CachedData::PriceComparison(comparison) => Ok(comparison),
    }
}
