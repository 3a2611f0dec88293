use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Log the notification and report success. Development only.
    #[default]
    Log,
    Smtp,
    Resend,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default)]
    pub resend_api_key: String,
    #[serde(default = "default_resend_base_url")]
    pub resend_base_url: String,
}

impl EmailConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
            timeout_secs: default_timeout_secs(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            resend_api_key: String::new(),
            resend_base_url: default_resend_base_url(),
        }
    }
}

fn default_from_address() -> String {
    "Portfolio <portfolio@folio.localhost>".to_string()
}

fn default_contact_address() -> String {
    "contact@folio.localhost".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_resend_base_url() -> String {
    "https://api.resend.com".to_string()
}
