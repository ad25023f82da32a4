use common::{ApiResponse, DashboardFigures, DashboardLayout, ErrorPayload};
use gloo_net::http::Request;
use serde::Deserialize;

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let error_response: Result<ErrorPayload, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::error!("GET {} - API error ({}): {}", endpoint, err.code, err.error);
                format!("Error: {}", err.error)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("GET {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}

/// Heading, product dropdown and chart panel ids
pub async fn get_dashboard_layout() -> Result<DashboardLayout, String> {
    get("/dashboard").await
}

/// Both charts for one product
pub async fn get_product_dashboard(product_id: &str) -> Result<DashboardFigures, String> {
    get(&product_dashboard_endpoint(product_id)).await
}

/// Product ids come from the sales file verbatim and may contain `/`, `?` or `#`
fn product_dashboard_endpoint(product_id: &str) -> String {
    let segment: String = js_sys::encode_uri_component(product_id).into();
    format!("/products/{}/dashboard", segment)
}
