pub mod models;
pub mod ranking;

pub use models::{Accounts, CirculationTotals, FactionRecord, PlayerRecord};
pub use ranking::{top_factions, top_players, FACTION_LEADERBOARD_SIZE, PLAYER_LEADERBOARD_SIZE};
