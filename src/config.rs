//! Configuration of the Rollcall bot.
//!
//! The configuration is read from a YAML file, then overridden by environment
//! variables prefixed with `ROLLCALL_`, nested keys being separated by `__`
//! (for example `ROLLCALL_TELEGRAM__TOKEN`). It is split into two sections: the
//! Telegram account settings and the event details.
//!
//! # Configuration File Format
//!
//! ```yaml
//! telegram:
//!   # Bot token given by @BotFather
//!   token: "123456:ABC-DEF"
//!   # Group receiving the roster broadcasts
//!   chat_id: -1001234567890
//!   # Telegram user ids allowed to use /stop, /reset and /add
//!   admin_ids: [11111111]
//!   # Optional, Bot API server
//!   api_url: "https://api.telegram.org"
//!   # Optional, long polling timeout in seconds
//!   polling_timeout: 30
//!
//! event:
//!   date: "Saturday 12 October"
//!   time: "19:00"
//!   place: "Central park"
//!   capacity: "12"
//!   price: "5 EUR"
//!   description: "Friendly match, bring water."
//! ```

use std::collections::HashSet;
use std::path::Path;

use anyhow::bail;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::roster::EventMetadata;

/// Prefix of the environment variables overriding the configuration file.
const ENV_PREFIX: &str = "ROLLCALL_";

/// Root configuration structure for the Rollcall bot.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Telegram account configuration
    pub telegram: Telegram,
    /// Event shown on top of the roster; every field has a default
    #[serde(default)]
    pub event: EventMetadata,
}

/// Telegram account configuration.
#[derive(Debug, Deserialize)]
pub struct Telegram {
    /// Bot token. Never logged.
    pub token: String,

    /// Chat id of the event group.
    ///
    /// `/start` is only accepted there and every broadcast is sent there.
    pub chat_id: i64,

    /// Telegram user ids of the administrators.
    #[serde(default)]
    pub admin_ids: HashSet<i64>,

    /// Base URL of the Bot API, without trailing slash.
    ///
    /// # Examples
    ///
    /// - `https://api.telegram.org`
    /// - `http://localhost:8081` for a self-hosted Bot API server
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Long polling timeout in seconds.
    #[serde(default = "default_polling_timeout")]
    pub polling_timeout: u64,
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_owned()
}

fn default_polling_timeout() -> u64 {
    30
}

impl Config {
    /// Loads the configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - YAML configuration file, `None` to only read environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a required key
    /// is missing, or if the token is empty.
    pub fn load(path: Option<&str>) -> Result<Config, anyhow::Error> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            if !Path::new(path).is_file() {
                bail!("configuration file {} not found", path);
            }
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let mut config: Config = figment.extract()?;

        if config.telegram.token.trim().is_empty() {
            bail!("telegram.token must not be empty");
        }

        // Normalize the API URL by removing trailing slashes
        let api_url_len = config.telegram.api_url.trim_end_matches('/').len();
        config.telegram.api_url.truncate(api_url_len);

        Ok(config)
    }
}
