//! Server configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use yj_interpret::InterpreterConfig;

use crate::error::ServerResult;

/// Settings for the HTTP service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Reference data file.
    pub data_path: PathBuf,
    /// Directory served under `/static`, when it exists.
    pub static_dir: PathBuf,
    /// Interpretation service settings.
    pub interpreter: InterpreterConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_path: PathBuf::from("data/iching_basic.json"),
            static_dir: PathBuf::from("static"),
            interpreter: InterpreterConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> ServerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Set the bind interface.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the reference data file.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the static file directory.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Set the interpretation settings.
    pub fn with_interpreter(mut self, interpreter: InterpreterConfig) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// `host:port` to bind.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
