use std::env;

use crate::error::{BotError, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // The bot token has shipped under both names; accept either but prefer
    // DISCORD_TOKEN.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_TOKEN")
            .or_else(|| lookup("TOKEN"))
            .unwrap_or_default();

        if token.trim().is_empty() {
            return Err(BotError::Config(
                "DISCORD_TOKEN not configured".to_string(),
            ));
        }

        Ok(Self { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn reads_discord_token() {
        let config = Config::from_lookup(vars(&[("DISCORD_TOKEN", "abc123")])).unwrap();
        assert_eq!(config.token, "abc123");
    }

    #[test]
    fn falls_back_to_token() {
        let config = Config::from_lookup(vars(&[("TOKEN", "fallback")])).unwrap();
        assert_eq!(config.token, "fallback");
    }

    #[test]
    fn prefers_discord_token_over_token() {
        let config =
            Config::from_lookup(vars(&[("TOKEN", "old"), ("DISCORD_TOKEN", "new")])).unwrap();
        assert_eq!(config.token, "new");
    }

    #[test]
    fn missing_token_is_an_error() {
        assert!(Config::from_lookup(vars(&[])).is_err());
    }

    #[test]
    fn blank_token_is_an_error() {
        assert!(Config::from_lookup(vars(&[("DISCORD_TOKEN", "   ")])).is_err());
    }
}
