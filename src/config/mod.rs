//! Configuration loading and parsing for TurtleShop.
//!
//! - Schema definition in [`schema`]
//! - File discovery, environment and flag layering in [`loader`]
//!
//! # Example
//!
//! ```
//! use turtleshop::config::{load_config, ConfigOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "timeout_secs: 5").unwrap();
//!
//! let overrides = ConfigOverrides {
//!     api_url: Some("http://localhost:3000".to_string()),
//!     data_dir: None,
//! };
//! let config = load_config(Some(&path), &overrides).unwrap();
//! assert_eq!(config.timeout_secs, 5);
//! assert_eq!(config.api_url, "http://localhost:3000");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    apply_env, apply_overrides, load_config, load_config_file, parse_config, user_config_path,
    ConfigOverrides, ENV_API_URL, ENV_DATA_DIR,
};
pub use schema::ShopConfig;
