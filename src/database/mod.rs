pub mod connection;
pub mod factions;
pub mod models;
pub mod players;
#[cfg(test)]
pub(crate) mod testing;

pub use connection::{release, Connector, DbConn};
pub use factions::fetch_top_factions;
pub use models::*;
pub use players::fetch_top_players;
