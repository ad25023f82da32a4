use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::figure::Figure;

/// Dropdown entry for one product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductOption {
    pub label: String,
    pub value: String,
}

impl ProductOption {
    pub fn new(product_id: impl Into<String>) -> Self {
        let product_id = product_id.into();
        Self {
            label: product_id.clone(),
            value: product_id,
        }
    }
}

/// The product selection control
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<ProductOption>,
    /// Initially selected product
    pub value: Option<String>,
}

/// Static page layout: heading, one dropdown and the chart placeholders
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardLayout {
    pub title: String,
    pub dropdown: Dropdown,
    /// Element ids of the chart panels, in display order
    pub graphs: Vec<String>,
}

/// Both charts rendered for one product selection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardFigures {
    pub product_id: String,
    pub demand_forecast: Figure,
    pub price_comparison: Figure,
}
