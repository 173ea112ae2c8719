// src/config.rs

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

pub const DEFAULT_CLI_PATH: &str = "stellar";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_RPC_URL: &str = "https://soroban-testnet.stellar.org";

// Loaded once at startup from the environment (and an optional .env file).
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub port: u16,
    pub mcp_mode: bool,

    /// Binary used for every CLI invocation. A bare name is resolved through
    /// `PATH`.
    pub cli_path: String,
    /// Default deadline for a single CLI run.
    pub cli_timeout: Duration,
    /// Upper bound on concurrently running CLI processes. `None` means
    /// unlimited.
    pub max_concurrency: Option<usize>,

    // Remote RPC tools
    pub rpc_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            mcp_mode: false,
            cli_path: DEFAULT_CLI_PATH.to_string(),
            cli_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_concurrency: None,
            rpc_url: DEFAULT_RPC_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let port = match env::var("PORT") {
            Ok(v) => v.parse().context("PORT must be a valid number")?,
            Err(_) => defaults.port,
        };

        let mcp_mode = env::var("MCP_MODE")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let cli_path = env::var("STELLAR_CLI_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.cli_path);

        let cli_timeout = match env::var("STELLAR_CLI_TIMEOUT_MS") {
            Ok(v) => {
                let ms: u64 = v
                    .parse()
                    .context("STELLAR_CLI_TIMEOUT_MS must be a number of milliseconds")?;
                if ms == 0 {
                    bail!("STELLAR_CLI_TIMEOUT_MS must be greater than zero");
                }
                Duration::from_millis(ms)
            }
            Err(_) => defaults.cli_timeout,
        };

        let max_concurrency = match env::var("STELLAR_CLI_MAX_CONCURRENCY") {
            Ok(v) => {
                let n: usize = v
                    .parse()
                    .context("STELLAR_CLI_MAX_CONCURRENCY must be a positive number")?;
                (n > 0).then_some(n)
            }
            Err(_) => None,
        };

        let rpc_url = env::var("STELLAR_RPC_URL").unwrap_or(defaults.rpc_url);
        Url::parse(&rpc_url).context("STELLAR_RPC_URL must be a valid URL")?;

        Ok(Config {
            port,
            mcp_mode,
            cli_path,
            cli_timeout,
            max_concurrency,
            rpc_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_testnet_and_path_lookup() {
        let config = Config::default();
        assert_eq!(config.cli_path, "stellar");
        assert_eq!(config.cli_timeout, Duration::from_secs(60));
        assert_eq!(config.max_concurrency, None);
        assert!(Url::parse(&config.rpc_url).is_ok());
    }
}
