//! Application configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Runtime configuration, loaded once at process start and read-only after.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token.
    pub bot_token: String,
    /// Chat the report is delivered to.
    pub chat_id: String,
}

impl Config {
    /// Load configuration from the environment.
    /// Uses BOT_TOKEN and CHAT_ID.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bot_token: require_var("BOT_TOKEN")?,
            chat_id: require_var("CHAT_ID")?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_env() {
        // Single test so the env mutations stay sequential.
        std::env::set_var("BOT_TOKEN", "token");
        std::env::set_var("CHAT_ID", "123");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bot_token, "token");
        assert_eq!(config.chat_id, "123");

        std::env::remove_var("CHAT_ID");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("CHAT_ID")));

        std::env::set_var("CHAT_ID", "");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("CHAT_ID")));
    }
}
