//! The canonical response model.
//!
//! [`CanonicalResponse`] is initialized by the shaping pipeline with a fixed
//! shape and filled in by downstream processing. The session snapshot always
//! contains a [`BOT_CONTEXT_KEY`] object, created empty if absent, so
//! downstream code may assume its presence unconditionally.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::channel::ResponseMode;

/// Reserved session key carrying opaque application context.
///
/// Excluded from the response session snapshot and from opportunistic JSON
/// decoding.
pub const APP_CONTEXT_KEY: &str = "appContext";

/// Session key under which the bot-context object always exists.
pub const BOT_CONTEXT_KEY: &str = "botContext";

/// Card payload attached to rich-display channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseCard {
    /// Whether downstream processing has populated the card for sending.
    pub send: bool,
    /// Card title.
    pub title: String,
    /// Card body text.
    pub text: String,
    /// Card image or link URL.
    pub url: String,
}

/// The canonical response shell downstream processing fills in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalResponse {
    /// Response rendering type; defaults to plain text.
    pub mode: ResponseMode,
    /// Message body; initially empty.
    pub message: String,
    /// Decoded snapshot of the inbound session.
    pub session: Map<String, Value>,
    /// Card payload; initially empty with `send` false.
    pub card: ResponseCard,
}

impl CanonicalResponse {
    /// Initializes a response shell from the inbound session.
    ///
    /// Clones the session, strips [`APP_CONTEXT_KEY`], opportunistically
    /// JSON-decodes every remaining string value (values that fail to parse
    /// are kept as-is), and force-creates the bot-context object.
    pub fn from_session(inbound: &Map<String, Value>) -> Self {
        let mut session: Map<String, Value> = inbound
            .iter()
            .filter(|(key, _)| key.as_str() != APP_CONTEXT_KEY)
            .map(|(key, value)| (key.clone(), decode_session_value(value)))
            .collect();

        session
            .entry(BOT_CONTEXT_KEY.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        Self {
            session,
            ..Self::default()
        }
    }
}

/// Decodes a session value that is itself a JSON-encoded string.
///
/// Non-string values and strings that do not parse pass through unchanged.
fn decode_session_value(value: &Value) -> Value {
    match value {
        Value::String(s) => serde_json::from_str(s).unwrap_or_else(|_| value.clone()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn snapshot_decodes_and_strips_app_context() {
        let inbound = session(json!({
            "a": "1",
            "appContext": "{\"x\":1}",
            "b": "notjson",
        }));
        let response = CanonicalResponse::from_session(&inbound);

        assert_eq!(response.session["a"], json!(1));
        assert_eq!(response.session["b"], json!("notjson"));
        assert!(!response.session.contains_key(APP_CONTEXT_KEY));
        assert_eq!(response.session[BOT_CONTEXT_KEY], json!({}));
    }

    #[test]
    fn existing_bot_context_survives() {
        let inbound = session(json!({ "botContext": "{\"topic\":\"billing\"}" }));
        let response = CanonicalResponse::from_session(&inbound);
        assert_eq!(response.session[BOT_CONTEXT_KEY], json!({ "topic": "billing" }));
    }

    #[test]
    fn shell_defaults_are_empty() {
        let response = CanonicalResponse::from_session(&Map::new());
        assert_eq!(response.mode, ResponseMode::PlainText);
        assert!(response.message.is_empty());
        assert!(!response.card.send);
        assert!(response.card.title.is_empty());
        assert!(response.card.url.is_empty());
    }
}
