pub mod models;

pub use models::{Embed, WebhookPayload, EMBED_COLOR};
