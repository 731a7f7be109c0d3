use log::info;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

use crate::errors::{DeliveryError, StatsError};
use crate::retry::RetryPolicy;

/// Webhook sender; only `204 No Content` counts as delivered
pub struct WebhookClient {
    client: Client,
    policy: RetryPolicy,
}

impl WebhookClient {
    pub fn new(user_agent: &str, timeout_secs: u64, policy: RetryPolicy) -> Result<Self, StatsError> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client, policy })
    }

    /// POSTs `payload` as JSON, retrying with the client's policy.
    ///
    /// Returns the last failure once all attempts are used up.
    pub async fn deliver<T>(&self, url: &str, payload: &T) -> Result<(), StatsError>
    where
        T: Serialize + ?Sized,
    {
        self.policy
            .run("Discord Webhook Error", |_| self.send_post_request(url, payload))
            .await?;

        info!("Webhook delivered");
        Ok(())
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client, StatsError> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| StatsError::startup(format!("Failed to build HTTP client: {e}")))
    }

    async fn send_post_request<T>(&self, url: &str, payload: &T) -> Result<(), DeliveryError>
    where
        T: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(DeliveryError::Transport)?;

        check_status(response.status())
    }
}

fn check_status(status: StatusCode) -> Result<(), DeliveryError> {
    if status == StatusCode::NO_CONTENT {
        Ok(())
    } else {
        Err(DeliveryError::Status(status.as_u16()))
    }
}
