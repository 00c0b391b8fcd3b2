use std::{net::IpAddr, path::Path};

use anyhow::Context;
use atelier_models::email_address::EmailAddress;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub use crate::duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// The environment variables accepted as the mail provider credential, in
/// resolution order. The first one that is set (and non-empty) wins; the
/// `RESEND_API_KEY` name is a legacy alias retained from an earlier
/// deployment and carries a SendGrid key just the same.
pub const EMAIL_API_KEY_VARS: [&str; 2] = ["RESEND_API_KEY", "SENDGRID_API_KEY"];

pub const FROM_ADDRESS_VAR: &str = "CONTACT_FROM_EMAIL";
pub const SALES_ADDRESS_VAR: &str = "CONTACT_SALES_EMAIL";
pub const CORS_ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGINS";

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let mut config: Config = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")?;

    config.apply_env_overrides(|var| std::env::var(var).ok())?;

    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Front-end origins allowed by the CORS layer.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    /// SendGrid API key. Usually injected through the environment (see
    /// [`EMAIL_API_KEY_VARS`]); absence disables outbound mail.
    pub api_key: Option<String>,
    pub from: EmailAddress,
    pub from_name: String,
    pub sales: EmailAddress,
    pub sales_name: String,
    /// Upper bound applied around each notification send attempt.
    pub send_timeout: Duration,
    pub api_endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

impl Config {
    /// Applies the documented environment overrides on top of the file
    /// configuration: provider credential, sender/recipient addresses and
    /// the CORS origin allow-list.
    fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(api_key) = resolve_api_key(&lookup) {
            self.email.api_key = Some(api_key);
        }

        if let Some(from) = lookup(FROM_ADDRESS_VAR) {
            self.email.from = from
                .parse()
                .with_context(|| format!("Failed to parse {FROM_ADDRESS_VAR}"))?;
        }

        if let Some(sales) = lookup(SALES_ADDRESS_VAR) {
            self.email.sales = sales
                .parse()
                .with_context(|| format!("Failed to parse {SALES_ADDRESS_VAR}"))?;
        }

        if let Some(origins) = lookup(CORS_ORIGINS_VAR) {
            self.http.allowed_origins = origins
                .split(',')
                .map(|origin| origin.trim().to_owned())
                .filter(|origin| !origin.is_empty())
                .collect();
        }

        Ok(())
    }
}

/// Resolves the mail provider credential from [`EMAIL_API_KEY_VARS`],
/// first present (non-empty) name wins.
pub fn resolve_api_key(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    EMAIL_API_KEY_VARS
        .into_iter()
        .find_map(|var| lookup(var).filter(|key| !key.is_empty()))
}
