//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_API_URL;
use crate::storage::default_data_dir;
use crate::ui::OutputMode;

/// TurtleShop settings, as read from `config.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Base URL of the DummyJSON-compatible API.
    pub api_url: String,

    /// HTTP timeout in seconds.
    pub timeout_secs: u64,

    /// Load the catalog from `/auth/products` using the session token.
    pub authenticated_catalog: bool,

    /// Token lifetime requested at login (`expiresInMins`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_minutes: Option<u32>,

    /// Where the session record is kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Default output verbosity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            authenticated_catalog: false,
            session_minutes: None,
            data_dir: None,
            output: None,
        }
    }
}

impl ShopConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured data directory, or the platform default.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}
