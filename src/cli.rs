use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::{DEFAULT_BIND_ADDRESS, DEFAULT_DATA_PATH};
use commands::{forecast, list_products, serve};

#[derive(Parser)]
#[command(name = "demandcast")]
#[command(about = "Product demand forecasting and price comparison dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard web server
    Serve {
        /// Path to the regional sales CSV
        ///
        /// Dates must be day-first (DD-MM-YYYY); unit prices may contain
        /// thousands separators.
        #[arg(short, long, env = "SALES_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
        data_path: PathBuf,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 127.0.0.1:8888, 0.0.0.0:3000)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// Directory with the built frontend to serve at `/`
        #[arg(short, long, env = "STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },
    /// Compute both dashboard charts for one product and print them as JSON
    Forecast {
        /// Path to the regional sales CSV
        #[arg(short, long, env = "SALES_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
        data_path: PathBuf,

        /// Product identifier as it appears in the `_ProductID` column
        #[arg(short, long)]
        product: String,
    },
    /// List the product identifiers offered by the dashboard dropdown
    Products {
        /// Path to the regional sales CSV
        #[arg(short, long, env = "SALES_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
        data_path: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { data_path, bind_address, static_dir } => {
                serve(&data_path, &bind_address, static_dir.as_deref()).await?;
            }
            Commands::Forecast { data_path, product } => {
                forecast(&data_path, &product).await?;
            }
            Commands::Products { data_path } => {
                list_products(&data_path)?;
            }
        }
        Ok(())
    }
}
