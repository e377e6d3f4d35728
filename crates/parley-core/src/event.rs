//! Raw inbound events.
//!
//! The front-door integrations deliver channel-defined JSON payloads with no
//! common schema, so [`RawEvent`] preserves the payload untouched and exposes
//! typed accessors for the handful of fields the dispatch and classification
//! heuristics read. The payload is never mutated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request attribute header carrying the messaging-platform channel type.
pub const CHANNEL_TYPE_ATTRIBUTE: &str = "x-amz-lex:channel-type";

/// Request attribute header listing accepted response content types.
///
/// Contact-center integrations signal voice capability through this header
/// even while nominally in `"Text"` dialog mode.
pub const ACCEPT_CONTENT_TYPES_ATTRIBUTE: &str = "x-amz-lex:accept-content-types";

/// An opaque, channel-defined inbound payload.
///
/// Read-only input; accessors return `None` for fields the originating
/// channel did not provide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEvent(Value);

impl RawEvent {
    /// Wraps a raw JSON payload.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Returns the voice-assistant version marker, if present.
    ///
    /// Only voice-assistant events carry a top-level `version` field; its
    /// presence is the authoritative request-kind discriminator.
    pub fn version(&self) -> Option<&str> {
        self.0.get("version").and_then(Value::as_str)
    }

    /// Returns the reported output dialog mode (`"Voice"` or `"Text"`).
    pub fn output_dialog_mode(&self) -> Option<&str> {
        self.0.get("outputDialogMode").and_then(Value::as_str)
    }

    /// Returns a channel-reported request attribute by header name.
    pub fn request_attribute(&self, name: &str) -> Option<&str> {
        self.0
            .get("requestAttributes")
            .and_then(|attrs| attrs.get(name))
            .and_then(Value::as_str)
    }

    /// Returns the event's user identifier, if present.
    pub fn user_id(&self) -> Option<&str> {
        self.0.get("userId").and_then(Value::as_str)
    }
}

impl Default for RawEvent {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}

impl From<Value> for RawEvent {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors_read_channel_fields() {
        let event = RawEvent::new(json!({
            "outputDialogMode": "Text",
            "userId": "user-1",
            "requestAttributes": { CHANNEL_TYPE_ATTRIBUTE: "Slack" },
        }));
        assert_eq!(event.version(), None);
        assert_eq!(event.output_dialog_mode(), Some("Text"));
        assert_eq!(event.user_id(), Some("user-1"));
        assert_eq!(event.request_attribute(CHANNEL_TYPE_ATTRIBUTE), Some("Slack"));
        assert_eq!(event.request_attribute(ACCEPT_CONTENT_TYPES_ATTRIBUTE), None);
    }

    #[test]
    fn version_marker_present_on_voice_assistant_events() {
        let event = RawEvent::new(json!({ "version": "1.0" }));
        assert_eq!(event.version(), Some("1.0"));
    }
}
