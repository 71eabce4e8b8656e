use std::env;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub swagger_ui: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            swagger_ui: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let service_port = match lookup("SERVICE_PORT") {
            Some(port) => port
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            None => defaults.service_port,
        };

        let service_host = lookup("SERVICE_HOST").unwrap_or(defaults.service_host);

        let swagger_ui = match lookup("SWAGGER_UI") {
            Some(flag) => parse_flag(&flag).context("SWAGGER_UI must be a boolean")?,
            None => defaults.swagger_ui,
        };

        Ok(Config {
            service_port,
            service_host,
            swagger_ui,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_addr());
        tracing::info!(
            "  Swagger UI: {}",
            if self.swagger_ui { "enabled" } else { "disabled" }
        );
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("expected true/false, got '{}'", other),
    }
}
