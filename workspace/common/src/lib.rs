//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

mod dashboard;
mod figure;
mod series;

pub use dashboard::{DashboardFigures, DashboardLayout, Dropdown, ProductOption};
pub use figure::{Figure, Trace, TraceKind};
pub use series::{
    ForecastPoint, ForecastSeries, ModelSummary, MonthlyPoint, MonthlySeries, PriceCell,
    PriceComparisonDto,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper as the frontend reads it.
/// The backend's `src/schemas.rs` serializes the same field names.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error payload returned by the backend on failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorPayload {
    pub error: String,
    pub code: String,
    pub success: bool,
}
