// Configuration module entry point
// Layered load: defaults -> optional config.toml -> AGENT_* environment,
// then the well-known agent variables are overlaid on top.

mod state;
mod types;

use std::env;
use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{AgentConfig, Config, LoggingConfig, PaymentConfig, ServerConfig};

/// Default recipient used when `WALLET_ADDRESS` is not set anywhere.
pub const DEFAULT_WALLET_ADDRESS: &str = "0x209693Bc6afc0C5328bA36FaF03C514EF312287C";

/// Default facilitator used when `FACILITATOR_URL` is not set anywhere.
pub const DEFAULT_FACILITATOR_URL: &str = "https://x402.org/facilitator";

impl Config {
    /// Load configuration from "config.toml" in the working directory.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("AGENT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.keep_alive", true)?
            .set_default("server.read_timeout", 30)?
            .set_default("server.write_timeout", 30)?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("agent.base_url", "")?
            .set_default("agent.assets_dir", "assets")?
            .set_default("payment.enabled", false)?
            .set_default("payment.wallet_address", DEFAULT_WALLET_ADDRESS)?
            .set_default("payment.facilitator_url", DEFAULT_FACILITATOR_URL)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        cfg.apply_well_known_env();
        Ok(cfg)
    }

    /// Overlay the four well-known environment variables recognized by
    /// the agent regardless of the `AGENT_` prefix convention.
    fn apply_well_known_env(&mut self) {
        if let Ok(account_id) = env::var("ACCOUNT_ID") {
            if !account_id.is_empty() {
                self.agent.account_id = Some(account_id);
            }
        }
        if let Ok(url) = env::var("BITTE_AGENT_URL") {
            if !url.is_empty() {
                self.agent.base_url = url;
            }
        }
        if let Ok(wallet) = env::var("WALLET_ADDRESS") {
            if !wallet.is_empty() {
                self.payment.wallet_address = wallet;
            }
        }
        if let Ok(facilitator) = env::var("FACILITATOR_URL") {
            if !facilitator.is_empty() {
                self.payment.facilitator_url = facilitator;
            }
        }

        if self.agent.base_url.is_empty() {
            self.agent.base_url = format!("http://{}:{}", self.server.host, self.server.port);
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
