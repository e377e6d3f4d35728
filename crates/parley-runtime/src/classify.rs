//! Channel classification heuristic.
//!
//! Infers which channel/client produced the request from incomplete,
//! overlapping signals; several channels have no authoritative discriminator
//! field. The chain is an explicit ordered list of (predicate, tag-builder)
//! pairs so new channel signals can be inserted without restructuring
//! conditional nesting. Multiple signals may technically be present and only
//! the highest-priority one governs. Classification never fails; the result
//! is advisory, used for telemetry and downstream formatting.

use std::sync::LazyLock;

use regex::Regex;

use parley_core::channel::{ChannelTag, DialogFlavor, LexVariant, RequestKind};
use parley_core::event::{ACCEPT_CONTENT_TYPES_ATTRIBUTE, CHANNEL_TYPE_ATTRIBUTE};
use parley_core::request::CanonicalRequest;

/// Shape of anonymous identity-pool identifiers,
/// e.g. `us-east-1:a8e1f7b2-b20d-441c-9698-aff8b519d8d5`.
///
/// Characteristic of web-UI clients authenticating through an identity pool.
static IDENTITY_POOL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*-.*-\d:.*-.*-.*-.*$").unwrap());

struct Rule {
    matches: fn(&CanonicalRequest) -> bool,
    build: fn(&CanonicalRequest) -> ChannelTag,
}

/// Priority-ordered classification chain; first match wins.
const RULES: &[Rule] = &[
    // Voice-assistant events are authoritative: the type marker beats every
    // other signal.
    Rule {
        matches: |req| req.kind == RequestKind::Alexa,
        build: |_| ChannelTag::Alexa,
    },
    Rule {
        matches: |req| channel_type(req) == Some("Slack"),
        build: |req| ChannelTag::lex(LexVariant::Slack, flavor(req)),
    },
    Rule {
        matches: |req| channel_type(req) == Some("Twilio-SMS"),
        build: |req| ChannelTag::lex(LexVariant::TwilioSms, flavor(req)),
    },
    // Contact-center integrations report no channel type but always send
    // the accepted-content-types header.
    Rule {
        matches: |req| {
            req.event
                .request_attribute(ACCEPT_CONTENT_TYPES_ATTRIBUTE)
                .is_some()
        },
        build: |req| ChannelTag::lex(LexVariant::AmazonConnect, flavor(req)),
    },
    Rule {
        matches: |req| {
            req.event
                .user_id()
                .is_some_and(|id| IDENTITY_POOL_ID.is_match(id))
        },
        build: |req| ChannelTag::lex(LexVariant::LexWebUi, flavor(req)),
    },
];

fn channel_type(request: &CanonicalRequest) -> Option<&str> {
    request.event.request_attribute(CHANNEL_TYPE_ATTRIBUTE)
}

fn flavor(request: &CanonicalRequest) -> DialogFlavor {
    DialogFlavor::from(request.preferred_response_mode)
}

/// Makes a best guess at the channel/client identity from fields of the
/// partially-shaped request.
pub fn classify(request: &CanonicalRequest) -> ChannelTag {
    RULES
        .iter()
        .find(|rule| (rule.matches)(request))
        .map(|rule| (rule.build)(request))
        .unwrap_or_else(|| ChannelTag::generic_lex(flavor(request)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use parley_core::channel::ResponseMode;
    use parley_core::event::RawEvent;

    use super::*;

    fn request(event: serde_json::Value, mode: ResponseMode) -> CanonicalRequest {
        let mut request = CanonicalRequest::default();
        request.event = RawEvent::new(event);
        request.preferred_response_mode = mode;
        request
    }

    #[test]
    fn voice_assistant_marker_beats_every_other_signal() {
        let mut req = request(
            json!({
                "version": "1.0",
                "userId": "us-east-1:a8e1f7b2-b20d-441c-9698-aff8b519d8d5",
                "requestAttributes": { CHANNEL_TYPE_ATTRIBUTE: "Slack" },
            }),
            ResponseMode::Ssml,
        );
        req.kind = RequestKind::Alexa;
        assert_eq!(classify(&req), ChannelTag::Alexa);
    }

    #[test]
    fn platform_header_identifies_slack_and_twilio() {
        let slack = request(
            json!({ "requestAttributes": { CHANNEL_TYPE_ATTRIBUTE: "Slack" } }),
            ResponseMode::PlainText,
        );
        assert_eq!(classify(&slack).to_string(), "LEX.Slack.Text");

        let twilio = request(
            json!({ "requestAttributes": { CHANNEL_TYPE_ATTRIBUTE: "Twilio-SMS" } }),
            ResponseMode::Ssml,
        );
        assert_eq!(classify(&twilio).to_string(), "LEX.TwilioSMS.Voice");
    }

    #[test]
    fn accept_content_types_header_means_contact_center() {
        let req = request(
            json!({ "requestAttributes": { ACCEPT_CONTENT_TYPES_ATTRIBUTE: "text/plain; charset=utf-8" } }),
            ResponseMode::PlainText,
        );
        assert_eq!(
            classify(&req),
            ChannelTag::lex(LexVariant::AmazonConnect, DialogFlavor::Text)
        );
    }

    #[test]
    fn identity_pool_user_id_means_web_ui() {
        let req = request(
            json!({ "userId": "us-east-1:a8e1f7b2-b20d-441c-9698-aff8b519d8d5" }),
            ResponseMode::PlainText,
        );
        assert_eq!(
            classify(&req),
            ChannelTag::lex(LexVariant::LexWebUi, DialogFlavor::Text)
        );
    }

    #[test]
    fn fallback_is_generic_and_follows_response_mode() {
        let text = request(json!({ "userId": "plain-user" }), ResponseMode::PlainText);
        assert_eq!(classify(&text).to_string(), "LEX.Text");

        let voice = request(json!({}), ResponseMode::Ssml);
        assert_eq!(classify(&voice).to_string(), "LEX.Voice");
    }

    #[test]
    fn higher_priority_signal_governs_when_several_match() {
        // Slack header plus identity-pool user id: the header wins.
        let req = request(
            json!({
                "userId": "us-east-1:a8e1f7b2-b20d-441c-9698-aff8b519d8d5",
                "requestAttributes": { CHANNEL_TYPE_ATTRIBUTE: "Slack" },
            }),
            ResponseMode::PlainText,
        );
        assert_eq!(
            classify(&req),
            ChannelTag::lex(LexVariant::Slack, DialogFlavor::Text)
        );
    }
}
