use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

// ─── Database documents ───

/// One document per administrator in the `users` collection, keyed by the
/// unique lowercase username. `created_at` is overwritten on every seeding
/// run, so it records the last password reset rather than true creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime,
}

// ─── WebSocket messages ───

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsClientMessage {
    Chat { content: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsServerMessage {
    Chat { user_name: String, content: String },
    Presence { online: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ws_message_wire_shape() {
        let msg = WsServerMessage::Chat {
            user_name: "admin".to_string(),
            content: "hello".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            json,
            r#"{"type":"chat","user_name":"admin","content":"hello"}"#
        );

        let parsed: WsClientMessage =
            serde_json::from_str(r#"{"type":"chat","content":"hi"}"#).unwrap();
        let WsClientMessage::Chat { content } = parsed;
        assert_eq!(content, "hi");
    }
}
