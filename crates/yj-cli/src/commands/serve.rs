use std::path::PathBuf;

use yj_server::ServerConfig;

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run(overrides: Overrides) -> Result<(), String> {
    let config = build_config(overrides)?;
    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| format!("failed to start runtime: {e}"))?;
    runtime
        .block_on(yj_server::run(config))
        .map_err(|e| e.to_string())
}

fn build_config(overrides: Overrides) -> Result<ServerConfig, String> {
    let mut config = match &overrides.config {
        Some(path) => ServerConfig::from_file(path)
            .map_err(|e| format!("cannot load {}: {e}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(host) = overrides.host {
        config = config.with_host(host);
    }
    if let Some(port) = overrides.port {
        config = config.with_port(port);
    }
    if let Some(data) = overrides.data {
        config = config.with_data_path(data);
    }
    if let Some(dir) = overrides.static_dir {
        config = config.with_static_dir(dir);
    }
    config.interpreter = config
        .interpreter
        .with_key_from(|name| std::env::var(name).ok());

    tracing::debug!(?config, "server configuration");
    Ok(config)
}
