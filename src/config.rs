use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use lettre::message::Mailbox;
use serde::Deserialize;
use sgvrecycle_notification::EmailConfig;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit structured JSON logs instead of the console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Provider variables (RESEND_API_KEY, RESEND_FROM_EMAIL, RESEND_TO_EMAIL)
    /// 2. Environment variables (SGVRECYCLE__EMAIL__API_KEY, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SGVRECYCLE")
                .separator("__")
                .try_parsing(true),
        );

        // Variable names used by the provider's own tooling
        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.api_key", api_key)?;
        }
        if let Ok(from_email) = env::var("RESEND_FROM_EMAIL") {
            builder = builder.set_override("email.from_address", from_email)?;
        }
        if let Ok(to_email) = env::var("RESEND_TO_EMAIL") {
            builder = builder.set_override("email.contact_to_address", to_email)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.from_address.parse::<Mailbox>().is_err() {
            return Err(format!(
                "Invalid email.from_address: {}",
                self.email.from_address
            ));
        }
        if self.email.to_address.parse::<Mailbox>().is_err() {
            return Err(format!("Invalid email.to_address: {}", self.email.to_address));
        }
        if let Some(contact_to) = self
            .email
            .contact_to_address
            .as_deref()
            .filter(|address| !address.is_empty())
            && contact_to.parse::<Mailbox>().is_err()
        {
            return Err(format!("Invalid email.contact_to_address: {contact_to}"));
        }
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        Ok(())
    }
}
