use serde_json::{Map, Value};

/// Player wealth as shown on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub first_name: String,
    pub last_name: String,
    pub total_money: i64,
    pub cash_money: i64,
    pub bank_money: i64,
    pub black_money: i64,
    pub faction: String,
}

impl PlayerRecord {
    pub fn new(first_name: String, last_name: String, accounts: Accounts, job: Option<&str>) -> Self {
        Self {
            first_name,
            last_name,
            total_money: accounts.total(),
            cash_money: accounts.cash,
            bank_money: accounts.bank,
            black_money: accounts.black,
            faction: faction_label(job),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Collective (society) treasury balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionRecord {
    pub faction_name: String,
    pub money: i64,
}

impl FactionRecord {
    pub fn new(account_name: &str, money: i64) -> Self {
        Self {
            faction_name: faction_display_name(account_name),
            money,
        }
    }
}

/// Money components decoded from the `accounts` JSON column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accounts {
    pub cash: i64,
    pub bank: i64,
    pub black: i64,
}

const ACCOUNT_KEYS: [&str; 3] = ["money", "bank", "black_money"];

impl Accounts {
    /// Decodes the blob; a missing, empty or `null` blob means no money at all.
    ///
    /// Only a JSON object carries balances, any other JSON value reads as zero.
    pub fn parse(blob: Option<&str>) -> Result<Self, serde_json::Error> {
        let blob = match blob.map(str::trim) {
            None | Some("") => return Ok(Self::default()),
            Some(raw) => raw,
        };

        match serde_json::from_str::<Value>(blob)? {
            Value::Object(map) => Self::from_map(&map),
            _ => Ok(Self::default()),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, serde_json::Error> {
        let [cash, bank, black] = ACCOUNT_KEYS;
        Ok(Self {
            cash: amount(map, cash)?,
            bank: amount(map, bank)?,
            black: amount(map, black)?,
        })
    }

    pub fn total(&self) -> i64 {
        self.cash.saturating_add(self.bank).saturating_add(self.black)
    }
}

fn amount(map: &Map<String, Value>, key: &str) -> Result<i64, serde_json::Error> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => Ok(n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "`{}` is not a number: {}",
            key, other
        ))),
    }
}

/// "unemployed" (and a missing job) maps to "Unemployed", anything else gets
/// its first character uppercased.
pub fn faction_label(job: Option<&str>) -> String {
    match job {
        None | Some("unemployed") => "Unemployed".to_string(),
        Some(job) => capitalize_first(job),
    }
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `society_police` -> `POLICE`
pub fn faction_display_name(account_name: &str) -> String {
    account_name.replacen("society_", "", 1).to_uppercase()
}

/// Sums over the displayed players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CirculationTotals {
    pub cash: i64,
    pub bank: i64,
    pub black: i64,
}

impl CirculationTotals {
    pub fn from_players(players: &[PlayerRecord]) -> Self {
        players.iter().fold(Self::default(), |acc, p| Self {
            cash: acc.cash.saturating_add(p.cash_money),
            bank: acc.bank.saturating_add(p.bank_money),
            black: acc.black.saturating_add(p.black_money),
        })
    }

    pub fn total(&self) -> i64 {
        self.cash.saturating_add(self.bank).saturating_add(self.black)
    }
}
