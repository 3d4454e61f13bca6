//! Server configuration
//!
//! Layers, lowest to highest precedence: built-in defaults, an optional YAML
//! file, the environment (`REFRANK_BIND`, `REFRANK_LOG`), then CLI flags.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, WebError};

pub const ENV_BIND: &str = "REFRANK_BIND";
pub const ENV_LOG: &str = "REFRANK_LOG";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "refrank_web=info,tower_http=info";
pub const DEFAULT_HTMX_SRC: &str = "/static/htmx.min.js";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// `tracing_subscriber::EnvFilter` directive, `RUST_LOG` still wins
    pub log_filter: String,
    /// Where the layout loads htmx from
    pub htmx_src: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            htmx_src: DEFAULT_HTMX_SRC.to_string(),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_filter: Option<String>,
}

impl WebConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Resolve every layer. `env` is injected so tests don't touch the process environment.
    pub fn load<F>(file: Option<&Path>, env: F, overrides: Overrides) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = env(ENV_BIND) {
            let (host, port) = parse_bind(&bind)?;
            self.host = host;
            self.port = port;
        }
        if let Some(filter) = env(ENV_LOG) {
            self.log_filter = filter;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(filter) = overrides.log_filter {
            self.log_filter = filter;
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split `host:port`, splitting on the last colon
fn parse_bind(bind: &str) -> Result<(String, u16)> {
    let (host, port) = bind
        .rsplit_once(':')
        .ok_or_else(|| WebError::Config(format!("{ENV_BIND} must be host:port, got '{bind}'")))?;
    if host.is_empty() {
        return Err(WebError::Config(format!("{ENV_BIND} has an empty host: '{bind}'")));
    }
    let port = port
        .parse::<u16>()
        .map_err(|e| WebError::Config(format!("{ENV_BIND} has an invalid port '{port}': {e}")))?;
    Ok((host.to_string(), port))
}
