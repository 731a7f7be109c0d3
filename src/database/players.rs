use log::{error, info};
use sqlx::mysql::MySqlRow;
use sqlx::Row;

use super::connection::{release, Connector, DbConn};
use super::models::RawPlayerRow;
use crate::domain::{top_players, Accounts, PlayerRecord};
use crate::errors::{FetchError, StatsError};

const PLAYERS_QUERY: &str = "SELECT firstname, lastname, accounts, job FROM users";

/// Richest `limit` players by cash + bank + black money
pub async fn fetch_top_players(
    connector: &Connector,
    limit: usize,
) -> Result<Vec<PlayerRecord>, StatsError> {
    let mut conn = connector.acquire().await?;
    let rows = load_player_rows(&mut conn).await;
    release(conn).await;

    let players = rows
        .and_then(map_player_rows)
        .inspect_err(|e| error!("Error fetching top players: {}", e))?;

    info!("Loaded {} player rows", players.len());
    Ok(top_players(players, limit))
}

async fn load_player_rows(conn: &mut DbConn) -> Result<Vec<RawPlayerRow>, FetchError> {
    let rows = sqlx::query(PLAYERS_QUERY)
        .fetch_all(&mut *conn)
        .await
        .map_err(players_query_error)?;

    rows.iter()
        .map(parse_player_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(players_query_error)
}

fn parse_player_row(row: &MySqlRow) -> Result<RawPlayerRow, sqlx::Error> {
    Ok(RawPlayerRow {
        first_name: row.try_get("firstname")?,
        last_name: row.try_get("lastname")?,
        accounts: row.try_get("accounts")?,
        job: row.try_get("job")?,
    })
}

fn players_query_error(source: sqlx::Error) -> FetchError {
    FetchError::Query {
        what: "players",
        source,
    }
}

/// Maps raw rows to records, failing on the first undecodable accounts blob.
pub fn map_player_rows(rows: Vec<RawPlayerRow>) -> Result<Vec<PlayerRecord>, FetchError> {
    rows.into_iter().map(map_player_row).collect()
}

fn map_player_row(row: RawPlayerRow) -> Result<PlayerRecord, FetchError> {
    let first_name = row.first_name.unwrap_or_default();
    let last_name = row.last_name.unwrap_or_default();

    let accounts = Accounts::parse(row.accounts.as_deref()).map_err(|source| FetchError::Accounts {
        player: format!("{} {}", first_name, last_name),
        source,
    })?;

    Ok(PlayerRecord::new(first_name, last_name, accounts, row.job.as_deref()))
}
