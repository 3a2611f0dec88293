use config::{Config as ConfigBuilder, ConfigError, Environment, File, Map};
use folio_notification::{EmailConfig, Provider};
use lettre::message::Mailbox;
use serde::Deserialize;
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
    /// Directory holding the pre-built site, served for every other path
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
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
    /// 1. Legacy variables (RESEND_API_KEY, CONTACT_ADDRESS)
    /// 2. Environment variables (FOLIO__EMAIL__PROVIDER, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, env::vars().collect())
    }

    /// Same as `load`, reading variables from `vars` instead of the process environment.
    pub fn load_with_env(
        config_path: Option<String>,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| vars.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        if let Some(api_key) = vars.get("RESEND_API_KEY") {
            builder = builder.set_override("email.resend_api_key", api_key.as_str())?;
        }
        if let Some(contact_address) = vars.get("CONTACT_ADDRESS") {
            builder = builder.set_override("email.contact_address", contact_address.as_str())?;
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars)),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.timeout_secs == 0 {
            return Err("Email timeout_secs must be greater than 0".to_string());
        }
        if let Err(e) = self.email.contact_address.parse::<Mailbox>() {
            return Err(format!(
                "Invalid email contact_address '{}': {e}",
                self.email.contact_address
            ));
        }
        if let Err(e) = self.email.from_address.parse::<Mailbox>() {
            return Err(format!(
                "Invalid email from_address '{}': {e}",
                self.email.from_address
            ));
        }
        if self.email.provider == Provider::Resend && self.email.resend_api_key.is_empty() {
            return Err("Resend provider requires email.resend_api_key".to_string());
        }
        Ok(())
    }
}
