pub mod settings;

pub use settings::{AppConfig, BotSettings, DatabaseSettings, HttpSettings, RetrySettings, WebhookSettings};
