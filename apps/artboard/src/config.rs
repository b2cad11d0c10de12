use anyhow::{bail, Context, Result};

use crate::render::template_by_name;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL store when set; in-memory store otherwise.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Base URL for bundled support logos (e.g. the LinkedIn icon).
    pub asset_base_url: String,
    pub default_template: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            asset_base_url: String::new(),
            default_template: "latex".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            database_url: optional_env("DATABASE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            asset_base_url: optional_env("ASSET_BASE_URL").unwrap_or_default(),
            default_template: optional_env("DEFAULT_TEMPLATE")
                .unwrap_or_else(|| "latex".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if template_by_name(&self.default_template).is_none() {
            bail!(
                "DEFAULT_TEMPLATE '{}' is not a registered template",
                self.default_template
            );
        }
        Ok(())
    }
}

/// Reads `key`, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
