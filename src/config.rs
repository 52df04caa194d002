//! Process configuration, read from the environment (and `.env` when present).

use std::path::PathBuf;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    /// JSON array of seed records; the built-in catalogue is used when unset.
    pub seed_path: Option<PathBuf>,
    /// Built dashboard client to serve alongside the API.
    pub static_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 4000, seed_path: None, static_dir: None }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| anyhow::anyhow!("invalid PORT {raw:?}: {e}"))?,
            None => defaults.port,
        };
        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            seed_path: lookup("INVENTORY_SEED_PATH").filter(|s| !s.is_empty()).map(PathBuf::from),
            static_dir: lookup("STATIC_DIR").filter(|s| !s.is_empty()).map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> String { format!("{}:{}", self.host, self.port) }
}
