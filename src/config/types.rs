// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub agent: AgentConfig,
    pub payment: PaymentConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub keep_alive: bool,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    pub show_headers: bool,
}

/// Agent identity configuration
///
/// `base_url` is the public URL the manifest advertises. When neither the
/// config file nor `BITTE_AGENT_URL` provides one it falls back to the
/// listen address.
#[derive(Debug, Deserialize, Clone)]
pub struct AgentConfig {
    pub account_id: Option<String>,
    pub base_url: String,
    pub assets_dir: String,
}

/// Payment gating configuration
///
/// When `enabled` is false the premium routes are not registered and the
/// manifest advertises an empty `paths` object.
#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    pub enabled: bool,
    pub wallet_address: String,
    pub facilitator_url: String,
}
