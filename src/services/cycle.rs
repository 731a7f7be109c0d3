use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use log::info;

use crate::config::AppConfig;
use crate::database::{fetch_top_factions, fetch_top_players, Connector};
use crate::discord::WebhookPayload;
use crate::domain::{FactionRecord, PlayerRecord, FACTION_LEADERBOARD_SIZE, PLAYER_LEADERBOARD_SIZE};
use crate::errors::StatsError;
use crate::formatting::{format_factions, format_players, Branding};
use crate::http::WebhookClient;

/// Both leaderboards rendered for one point in time
pub struct RenderedLeaderboards {
    pub players: Option<String>,
    pub factions: Option<String>,
}

/// One fetch -> format -> notify pass over both leaderboards
pub struct StatsCycle {
    config: AppConfig,
    connector: Connector,
    webhook: WebhookClient,
}

impl StatsCycle {
    pub fn new(config: AppConfig) -> Result<Self, StatsError> {
        let connector = Connector::new(&config.database, config.retry.database);
        let webhook = WebhookClient::new(
            config.http.user_agent,
            config.http.timeout_secs,
            config.retry.webhook,
        )?;

        Ok(Self {
            config,
            connector,
            webhook,
        })
    }

    pub fn interval_secs(&self) -> u64 {
        self.config.bot.update_interval_secs
    }

    /// Runs players first; a failure there ends the cycle before factions.
    pub async fn run(&self) -> Result<()> {
        info!("Fetching top {} players...", PLAYER_LEADERBOARD_SIZE);
        let players = fetch_top_players(&self.connector, PLAYER_LEADERBOARD_SIZE)
            .await
            .context("Failed to fetch top players")?;

        info!("Sending top {} players to Discord...", PLAYER_LEADERBOARD_SIZE);
        self.send_players(&players, now())
            .await
            .context("Failed to deliver player leaderboard")?;

        info!("Fetching top {} fractions...", FACTION_LEADERBOARD_SIZE);
        let factions = fetch_top_factions(&self.connector, FACTION_LEADERBOARD_SIZE)
            .await
            .context("Failed to fetch top fractions")?;

        info!("Sending top {} fractions to Discord...", FACTION_LEADERBOARD_SIZE);
        self.send_factions(&factions, now())
            .await
            .context("Failed to deliver fraction leaderboard")?;

        Ok(())
    }

    /// Fetches and renders both leaderboards without delivering them
    pub async fn preview(&self) -> Result<RenderedLeaderboards> {
        let players = fetch_top_players(&self.connector, PLAYER_LEADERBOARD_SIZE)
            .await
            .context("Failed to fetch top players")?;
        let factions = fetch_top_factions(&self.connector, FACTION_LEADERBOARD_SIZE)
            .await
            .context("Failed to fetch top fractions")?;

        let at = now();
        Ok(RenderedLeaderboards {
            players: format_players(&players, at, self.branding()),
            factions: format_factions(&factions, at, self.branding()),
        })
    }

    async fn send_players(&self, players: &[PlayerRecord], at: NaiveDateTime) -> Result<(), StatsError> {
        let Some(message) = format_players(players, at, self.branding()) else {
            info!("No players to report, skipping delivery");
            return Ok(());
        };

        let bot = &self.config.bot;
        let payload = WebhookPayload::players(&bot.brand, message, &bot.logo_url);
        self.webhook.deliver(&self.config.webhooks.players, &payload).await
    }

    async fn send_factions(&self, factions: &[FactionRecord], at: NaiveDateTime) -> Result<(), StatsError> {
        let Some(message) = format_factions(factions, at, self.branding()) else {
            info!("No fractions to report, skipping delivery");
            return Ok(());
        };

        let bot = &self.config.bot;
        let payload = WebhookPayload::factions(&bot.brand, message, &bot.logo_url);
        self.webhook.deliver(&self.config.webhooks.factions, &payload).await
    }

    fn branding(&self) -> Branding<'_> {
        Branding {
            brand: &self.config.bot.brand,
            currency: &self.config.bot.currency,
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
