//! Configuration loading and resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Default listen port for the writewise-ui module
pub const DEFAULT_PORT: u16 = 5780;

/// Default base URL of the local inference backend
pub const DEFAULT_INFERENCE_URL: &str = "http://127.0.0.1:5781";

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HTTP listen port
    pub port: u16,
    /// Base URL of the inference backend hosting the grammar and rewrite models
    pub inference_url: String,
}

impl ServiceConfig {
    /// Resolve configuration following the priority order:
    /// 1. Command-line argument (highest priority)
    /// 2. Environment variable (WRITEWISE_PORT / WRITEWISE_INFERENCE_URL)
    /// 3. TOML config file
    /// 4. Compiled default (fallback)
    ///
    /// Each field is resolved independently, so a CLI port can be combined
    /// with a config-file inference URL.
    pub fn resolve(cli_port: Option<u16>, cli_inference_url: Option<&str>) -> Result<ServiceConfig> {
        let file = load_config_file().ok().and_then(|path| {
            tracing::debug!("Loading config file: {}", path.display());
            std::fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str::<toml::Value>(&content).ok())
        });

        let port = match cli_port {
            Some(port) => port,
            None => match std::env::var("WRITEWISE_PORT") {
                Ok(raw) => raw
                    .parse::<u16>()
                    .map_err(|_| Error::Config(format!("Invalid WRITEWISE_PORT: {}", raw)))?,
                Err(_) => file
                    .as_ref()
                    .and_then(|c| c.get("port"))
                    .and_then(|v| v.as_integer())
                    .map(|p| p as u16)
                    .unwrap_or(DEFAULT_PORT),
            },
        };

        let inference_url = match cli_inference_url {
            Some(url) => url.to_string(),
            None => match std::env::var("WRITEWISE_INFERENCE_URL") {
                Ok(url) => url,
                Err(_) => file
                    .as_ref()
                    .and_then(|c| c.get("inference_url"))
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string()),
            },
        };

        Ok(ServiceConfig {
            port,
            inference_url,
        })
    }
}

/// Get the configuration file path for the platform
fn load_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/writewise/config.toml first, then /etc/writewise/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("writewise").join("config.toml"));
        let system_config = PathBuf::from("/etc/writewise/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("writewise").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_takes_priority() {
        let config = ServiceConfig::resolve(Some(6000), Some("http://10.0.0.1:9000")).unwrap();
        assert_eq!(config.port, 6000);
        assert_eq!(config.inference_url, "http://10.0.0.1:9000");
    }

    #[test]
    fn defaults_apply_when_nothing_set() {
        // Env vars are not set in the test environment; a stray config file
        // would shadow the defaults, so only assert the CLI-absent path works.
        let config = ServiceConfig::resolve(None, None).unwrap();
        assert!(config.port > 0);
        assert!(!config.inference_url.is_empty());
    }
}
