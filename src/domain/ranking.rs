use super::models::{FactionRecord, PlayerRecord};

pub const PLAYER_LEADERBOARD_SIZE: usize = 20;
pub const FACTION_LEADERBOARD_SIZE: usize = 10;

/// Stable descending sort by `key`, truncated to `limit`.
///
/// Equal keys keep their input order.
pub fn top_by<T, K, F>(mut records: Vec<T>, limit: usize, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    records.sort_by(|a, b| key(b).cmp(&key(a)));
    records.truncate(limit);
    records
}

pub fn top_players(players: Vec<PlayerRecord>, limit: usize) -> Vec<PlayerRecord> {
    top_by(players, limit, |p| p.total_money)
}

pub fn top_factions(factions: Vec<FactionRecord>, limit: usize) -> Vec<FactionRecord> {
    top_by(factions, limit, |f| f.money)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Accounts;

    fn player(name: &str, cash: i64) -> PlayerRecord {
        PlayerRecord::new(
            name.to_string(),
            String::new(),
            Accounts { cash, bank: 0, black: 0 },
            Some("unemployed"),
        )
    }

    #[test]
    fn test_top_players_truncates_and_sorts() {
        let players: Vec<_> = (0..25).map(|i| player(&format!("p{i}"), i * 100)).collect();

        let top = top_players(players, PLAYER_LEADERBOARD_SIZE);

        assert_eq!(top.len(), 20);
        assert_eq!(top[0].first_name, "p24");
        assert_eq!(top[19].first_name, "p5");
        assert!(top.windows(2).all(|w| w[0].total_money >= w[1].total_money));
    }

    #[test]
    fn test_ties_keep_query_order() {
        let players = vec![player("a", 5), player("b", 10), player("c", 5), player("d", 10)];

        let names: Vec<_> = top_players(players, 20)
            .into_iter()
            .map(|p| p.first_name)
            .collect();

        assert_eq!(names, ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_top_factions_limit() {
        let factions: Vec<_> = (0..12)
            .map(|i| FactionRecord::new(&format!("society_f{i}"), 1000 - i))
            .collect();

        let top = top_factions(factions, FACTION_LEADERBOARD_SIZE);

        assert_eq!(top.len(), 10);
        assert_eq!(top[0].faction_name, "F0");
        assert_eq!(top[9].faction_name, "F9");
    }

    #[test]
    fn test_fewer_than_limit() {
        assert!(top_players(Vec::new(), 20).is_empty());
        assert_eq!(top_factions(vec![FactionRecord::new("society_x", 1)], 10).len(), 1);
    }
}
