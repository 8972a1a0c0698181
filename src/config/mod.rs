//! Service configuration
//!
//! One JSON configuration file describes the whole service: where the
//! data directory lives, how the HTTP server binds, the per-operation
//! store deadline, and the upstream fun-fact URL. Every field has a
//! default so `init` can write a working file and partial files stay
//! valid.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Data directory holding the record log
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// HTTP bind and CORS settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Deadline for a single store operation, in milliseconds
    #[serde(default = "default_op_timeout_ms")]
    pub op_timeout_ms: u64,

    /// Upstream URL for the `/me` fun-fact passthrough
    #[serde(default = "default_fact_url")]
    pub fact_url: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_op_timeout_ms() -> u64 {
    5000
}

fn default_fact_url() -> String {
    "https://catfact.ninja/fact".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            http: HttpServerConfig::default(),
            op_timeout_ms: default_op_timeout_ms(),
            fact_url: default_fact_url(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Writes this configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(path, contents)
    }
}
