use axum::{http::StatusCode, response::Json};
use compute::ComputeError;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Maps a compute failure to an HTTP status and error body.
///
/// - `InvalidData` → 422 `INVALID_DATA`
/// - `Forecast` → 500 `FORECAST_FAILED`
/// - anything else → 500 `INTERNAL_ERROR`
pub fn compute_error_response(err: ComputeError) -> ApiError {
    let (status, code) = match &err {
        ComputeError::InvalidData(_) => {
            warn!("Rejected request: {}", err);
            (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_DATA")
        }
        ComputeError::Forecast(_) => {
            error!("Forecast failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "FORECAST_FAILED")
        }
        _ => {
            error!("Computation failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };

    let body = ErrorResponse {
        error: err.to_string(),
        code: code.to_string(),
        success: false,
    };
    (status, Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_data_maps_to_unprocessable_entity() {
        let (status, Json(body)) =
            compute_error_response(ComputeError::InvalidData("Invalid data for Product 9".into()));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "INVALID_DATA");
        assert_eq!(body.error, "Invalid data for Product 9");
        assert!(!body.success);
    }

    #[test]
    fn test_forecast_failure_maps_to_internal_error() {
        let (status, Json(body)) =
            compute_error_response(ComputeError::Forecast("insufficient data".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "FORECAST_FAILED");
    }
}
