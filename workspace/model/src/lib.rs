//! Sales data model.
//!
//! Reads the regional sales CSV once at start-up and exposes it as an
//! immutable [`SalesTable`] backed by a polars `DataFrame`.

pub mod calendar;
pub mod error;
pub mod loader;
pub mod record;
pub mod table;

pub use error::{ModelError, Result};
pub use loader::{load_sales_table, read_sales_records};
pub use record::SalesRecord;
pub use table::SalesTable;

// Re-export tracing for use in this crate
pub use tracing;
