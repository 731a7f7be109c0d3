use std::error::Error as StdError;
use thiserror::Error;

/// Failures raised by the bot's I/O boundaries and startup path
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("database unreachable after {attempts} attempt(s): {}", error_chain(.source))]
    Connection {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("startup failed: {0}")]
    Startup(String),
}

/// Query or row-mapping failure while reading statistics
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("query for {what} failed: {}", error_chain(.source))]
    Query {
        what: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("malformed accounts blob for {player}: {source}")]
    Accounts {
        player: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Webhook delivery failure
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("HTTP Status: {0}")]
    Status(u16),

    #[error("webhook request failed: {}", error_chain(.0))]
    Transport(#[source] reqwest::Error),
}

/// `err` followed by each of its causes, `: `-separated
pub fn error_chain(err: &dyn StdError) -> String {
    let mut text = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let next = inner.to_string();
        if !text.contains(&next) {
            text.push_str(": ");
            text.push_str(&next);
        }
        cause = inner.source();
    }
    text
}

impl DeliveryError {
    /// Status code of the rejected request, if the endpoint answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

impl StatsError {
    pub fn startup(message: impl Into<String>) -> Self {
        Self::Startup(message.into())
    }

    pub fn is_startup(&self) -> bool {
        matches!(self, Self::Startup(_))
    }
}
