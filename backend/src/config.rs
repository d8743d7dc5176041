//! Configuration management for the inventory planner
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with INV_ prefix
//! 4. A bare `PORT` variable, as set by most hosting platforms

use std::path::{Path, PathBuf};

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Feed file locations
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Root data directory
    pub dir: PathBuf,

    /// Directory holding `forecast_YYYY-MM.json` files
    pub forecast_dir: PathBuf,

    /// Stock feed (`product_id, stock, days_to_cover`)
    pub stock_file: PathBuf,

    /// Catalog feed (`id, name, category, unit, shelf_life_days`)
    pub products_file: PathBuf,
}

impl DataConfig {
    /// Standard feed layout under `dir`
    pub fn rooted_at(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            dir: dir.to_path_buf(),
            forecast_dir: dir.join("forecasts"),
            stock_file: dir.join("stock_data.csv"),
            products_file: dir.join("products_with_shelf_life.csv"),
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("INV_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let server = ServerConfig::default();
        let defaults = DataConfig::rooted_at("data");

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", i64::from(server.port))?
            .set_default("server.host", server.host)?
            .set_default("data.dir", path_value(&defaults.dir))?
            .set_default("data.forecast_dir", path_value(&defaults.forecast_dir))?
            .set_default("data.stock_file", path_value(&defaults.stock_file))?
            .set_default("data.products_file", path_value(&defaults.products_file))?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (INV_ prefix)
            .add_source(
                Environment::with_prefix("INV")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_config_layout() {
        let data = DataConfig::rooted_at("/srv/planner");
        assert_eq!(data.dir, PathBuf::from("/srv/planner"));
        assert_eq!(data.forecast_dir, PathBuf::from("/srv/planner/forecasts"));
        assert_eq!(data.stock_file, PathBuf::from("/srv/planner/stock_data.csv"));
        assert_eq!(
            data.products_file,
            PathBuf::from("/srv/planner/products_with_shelf_life.csv")
        );
    }

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.port, 5000);
        assert_eq!(server.host, "0.0.0.0");
    }
}
