use reqwest::Url;
use std::str::FromStr;

use crate::errors::StatsError;
use crate::retry::RetryPolicy;

pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub charset: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "es_extended".to_string(),
            charset: "utf8mb4".to_string(),
        }
    }
}

pub struct WebhookSettings {
    pub players: String,
    pub factions: String,
}

pub struct BotSettings {
    pub logo_url: String,
    pub brand: String,
    pub currency: String,
    pub update_interval_secs: u64,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            logo_url: "https://i.imgur.com/t9EjCoH.png".to_string(),
            brand: "FIRSTSANCHEZ".to_string(),
            currency: "€".to_string(),
            update_interval_secs: 43_200, // 12 hours
        }
    }
}

pub struct RetrySettings {
    pub database: RetryPolicy,
    pub webhook: RetryPolicy,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            database: RetryPolicy::new(5, 5000),
            webhook: RetryPolicy::new(3, 5000),
        }
    }
}

pub struct HttpSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: "EconomyStatsBot/1.0",
            timeout_secs: 30,
        }
    }
}

/// Process-wide configuration, built once at startup and passed down explicitly
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub webhooks: WebhookSettings,
    pub bot: BotSettings,
    pub retry: RetrySettings,
    pub http: HttpSettings,
}

impl AppConfig {
    /// Reads `STATS_*` variables from the process environment
    pub fn from_env() -> Result<Self, StatsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StatsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_defaults = DatabaseSettings::default();
        let bot_defaults = BotSettings::default();
        let http_defaults = HttpSettings::default();

        let database = DatabaseSettings {
            host: lookup("STATS_DB_HOST").unwrap_or(db_defaults.host),
            port: parse_or(&lookup, "STATS_DB_PORT", db_defaults.port)?,
            user: lookup("STATS_DB_USER").unwrap_or(db_defaults.user),
            password: lookup("STATS_DB_PASSWORD").unwrap_or(db_defaults.password),
            database: lookup("STATS_DB_NAME").unwrap_or(db_defaults.database),
            charset: lookup("STATS_DB_CHARSET").unwrap_or(db_defaults.charset),
        };

        let webhooks = WebhookSettings {
            players: required_url(&lookup, "STATS_PLAYERS_WEBHOOK")?,
            factions: required_url(&lookup, "STATS_FACTIONS_WEBHOOK")?,
        };

        let bot = BotSettings {
            logo_url: lookup("STATS_LOGO_URL").unwrap_or(bot_defaults.logo_url),
            brand: lookup("STATS_BRAND").unwrap_or(bot_defaults.brand),
            currency: lookup("STATS_CURRENCY").unwrap_or(bot_defaults.currency),
            update_interval_secs: parse_or(
                &lookup,
                "STATS_UPDATE_INTERVAL_SECS",
                bot_defaults.update_interval_secs,
            )?,
        };

        let http = HttpSettings {
            timeout_secs: parse_or(&lookup, "STATS_HTTP_TIMEOUT_SECS", http_defaults.timeout_secs)?,
            ..http_defaults
        };

        let config = Self {
            database,
            webhooks,
            bot,
            retry: RetrySettings::default(),
            http,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_interval(mut self, interval_secs: Option<u64>) -> Result<Self, StatsError> {
        if let Some(secs) = interval_secs {
            self.bot.update_interval_secs = secs;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), StatsError> {
        if self.bot.update_interval_secs == 0 {
            return Err(StatsError::startup("update interval must be at least one second"));
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, StatsError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| StatsError::startup(format!("{key} has an invalid value: {raw:?}"))),
    }
}

fn required_url<F>(lookup: &F, key: &str) -> Result<String, StatsError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| StatsError::startup(format!("{key} is not set")))?;

    Url::parse(raw.trim())
        .map_err(|e| StatsError::startup(format!("{key} is not a valid URL: {e}")))?;

    Ok(raw.trim().to_string())
}
