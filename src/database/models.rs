/// Row of the `users` table as read from the database
#[derive(Debug, Clone, Default)]
pub struct RawPlayerRow {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub accounts: Option<String>,
    pub job: Option<String>,
}

/// Row of `addon_account_data` with a NULL owner
#[derive(Debug, Clone)]
pub struct RawFactionRow {
    pub account_name: String,
    pub money: i64,
}
