pub mod leaderboard;
pub mod numbers;

pub use leaderboard::{format_factions, format_players, Branding};
pub use numbers::group_thousands;
