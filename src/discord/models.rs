use serde::Serialize;

pub const EMBED_COLOR: u32 = 0xFFA500;

/// JSON body accepted by a Discord-compatible webhook
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebhookPayload {
    pub username: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Embed {
    pub description: String,
    pub avatar_url: String,
    pub color: u32,
}

impl WebhookPayload {
    /// Single-embed message posted under `username`
    pub fn embed(username: String, description: String, avatar_url: &str) -> Self {
        Self {
            username,
            embeds: vec![Embed {
                description,
                avatar_url: avatar_url.to_string(),
                color: EMBED_COLOR,
            }],
        }
    }

    pub fn players(brand: &str, description: String, logo_url: &str) -> Self {
        Self::embed(format!("{} Player Statistics", brand), description, logo_url)
    }

    pub fn factions(brand: &str, description: String, logo_url: &str) -> Self {
        Self::embed(format!("{} Fraction Statistics", brand), description, logo_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_shape() {
        let payload = WebhookPayload::players("FIRSTSANCHEZ", "hello".to_string(), "https://logo");

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "username": "FIRSTSANCHEZ Player Statistics",
                "embeds": [{
                    "description": "hello",
                    "avatar_url": "https://logo",
                    "color": 16753920
                }]
            })
        );
    }

    #[test]
    fn test_faction_username() {
        let payload = WebhookPayload::factions("X", String::new(), "");
        assert_eq!(payload.username, "X Fraction Statistics");
    }
}
