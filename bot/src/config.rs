//! Bot configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Demo token used when `TELEGRAM_BOT_TOKEN` is unset. Shipping a usable
/// default is a secrets-hygiene hole; set the variable in any real
/// deployment.
pub const DEFAULT_TOKEN: &str = "7759081669:AAHVDXM7M1VsHirrDT6GLTFII-gYkxJ4NJ0";

pub const DEFAULT_ERROR_BACKOFF_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub token: String,
    /// Pause between poll attempts after a transport error.
    pub error_backoff_secs: u64,
}

impl BotConfig {
    /// Build bot config from environment variables.
    ///
    /// Optional:
    /// - `TELEGRAM_BOT_TOKEN`: default [`DEFAULT_TOKEN`]
    /// - `BOT_ERROR_BACKOFF_SECS`: default 5
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            token: std::env::var("TELEGRAM_BOT_TOKEN")
                .unwrap_or_else(|_| DEFAULT_TOKEN.to_string()),
            error_backoff_secs: env_parse_u64(
                "BOT_ERROR_BACKOFF_SECS",
                DEFAULT_ERROR_BACKOFF_SECS,
            ),
        }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
