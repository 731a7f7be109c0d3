use log::{error, info};
use sqlx::mysql::MySqlRow;
use sqlx::Row;

use super::connection::{release, Connector, DbConn};
use super::models::RawFactionRow;
use crate::domain::{top_factions, FactionRecord};
use crate::errors::{FetchError, StatsError};

// Faction accounts are the ones without a personal owner. The cast lets
// unsigned and DECIMAL balance columns decode as i64.
const FACTIONS_QUERY: &str = "SELECT account_name, CAST(money AS SIGNED) AS money \
     FROM addon_account_data \
     WHERE owner IS NULL \
     ORDER BY money DESC \
     LIMIT ?";

/// Richest `limit` society accounts
pub async fn fetch_top_factions(
    connector: &Connector,
    limit: usize,
) -> Result<Vec<FactionRecord>, StatsError> {
    let mut conn = connector.acquire().await?;
    let rows = load_faction_rows(&mut conn, limit).await;
    release(conn).await;

    let rows = rows.inspect_err(|e| error!("Error fetching top fractions: {}", e))?;

    info!("Loaded {} faction accounts", rows.len());
    Ok(top_factions(map_faction_rows(rows), limit))
}

async fn load_faction_rows(conn: &mut DbConn, limit: usize) -> Result<Vec<RawFactionRow>, FetchError> {
    let rows = sqlx::query(FACTIONS_QUERY)
        .bind(limit as u64)
        .fetch_all(&mut *conn)
        .await
        .map_err(factions_query_error)?;

    rows.iter()
        .map(parse_faction_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(factions_query_error)
}

fn parse_faction_row(row: &MySqlRow) -> Result<RawFactionRow, sqlx::Error> {
    Ok(RawFactionRow {
        account_name: row.try_get("account_name")?,
        money: row.try_get("money")?,
    })
}

fn factions_query_error(source: sqlx::Error) -> FetchError {
    FetchError::Query {
        what: "factions",
        source,
    }
}

pub fn map_faction_rows(rows: Vec<RawFactionRow>) -> Vec<FactionRecord> {
    rows.into_iter()
        .map(|row| FactionRecord::new(&row.account_name, row.money))
        .collect()
}
