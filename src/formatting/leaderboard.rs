use chrono::NaiveDateTime;

use super::numbers::group_thousands;
use crate::domain::{
    CirculationTotals, FactionRecord, PlayerRecord, FACTION_LEADERBOARD_SIZE,
    PLAYER_LEADERBOARD_SIZE,
};

const THOUSANDS_SEPARATOR: char = '.';
const TROPHY: &str = "🏆";
const PODIUM_SIZE: usize = 3;

/// Footer and currency text shared by both leaderboards
#[derive(Debug, Clone, Copy)]
pub struct Branding<'a> {
    pub brand: &'a str,
    pub currency: &'a str,
}

/// Renders the player leaderboard, or `None` when there is nobody to show
pub fn format_players(
    players: &[PlayerRecord],
    generated_at: NaiveDateTime,
    branding: Branding<'_>,
) -> Option<String> {
    if players.is_empty() {
        return None;
    }

    let money = |value: i64| format_money(value, branding.currency);
    let mut message = format!(
        "**Top {} Players based on total capital**\n\n",
        PLAYER_LEADERBOARD_SIZE
    );

    for (idx, player) in players.iter().enumerate() {
        message += &format!("#{} {}\n", idx + 1, trophy(idx));
        message += &format!("{}\n", player.display_name());
        message += &format!("Total Money: {}\n", money(player.total_money));
        message += &format!("Cash: {}\n", money(player.cash_money));
        message += &format!("Bank: {}\n", money(player.bank_money));
        message += &format!("Black Money: {}\n\n", money(player.black_money));
    }

    let totals = CirculationTotals::from_players(players);
    message += "\n**💰 Total Money in Circulation 💰**\n";
    message += &format!("Cash: {}\n", money(totals.cash));
    message += &format!("Bank Money: {}\n", money(totals.bank));
    message += &format!("Black Money: {}\n", money(totals.black));
    message += &format!("Total: {}\n\n", money(totals.total()));
    message += &footer(branding.brand, "MONEY", generated_at);

    Some(message)
}

/// Renders the faction leaderboard, or `None` when there are no faction accounts
pub fn format_factions(
    factions: &[FactionRecord],
    generated_at: NaiveDateTime,
    branding: Branding<'_>,
) -> Option<String> {
    if factions.is_empty() {
        return None;
    }

    let mut message = format!(
        "**Top {} Fractions based on their capital**\n\n",
        FACTION_LEADERBOARD_SIZE
    );

    for (idx, faction) in factions.iter().enumerate() {
        message += &format!("#{} {} - {}\n", idx + 1, trophy(idx), faction.faction_name);
        message += &format!("Money: {}\n\n", format_money(faction.money, branding.currency));
    }

    message += &footer(branding.brand, "FRACTION", generated_at);
    Some(message)
}

fn trophy(idx: usize) -> &'static str {
    if idx < PODIUM_SIZE { TROPHY } else { "" }
}

fn format_money(value: i64, currency: &str) -> String {
    format!("{} {}", group_thousands(value, THOUSANDS_SEPARATOR), currency)
}

fn footer(brand: &str, kind: &str, generated_at: NaiveDateTime) -> String {
    format!(
        "**{} | {} Statistics | {}**",
        brand,
        kind,
        generated_at.format("%d.%m.%Y - %H:%M")
    )
}
