//! The canonical request model.
//!
//! [`CanonicalRequest`] is the single unit handed to downstream intent
//! processing. The shaping pipeline guarantees that the channel tag and the
//! preferred response mode are always set before hand-off, and that the
//! sentiment fields are always present, defaulting to an explicit
//! "not enabled" sentinel rather than being absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::channel::{ChannelTag, RequestKind, ResponseMode};
use crate::event::RawEvent;
use crate::settings::ResolvedSettings;

// =============================================================================
// Sentiment
// =============================================================================

/// Sentiment tag attached to every canonical request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    /// Sentiment support is gated off for this invocation.
    #[default]
    NotEnabled,
    /// Predominantly positive text.
    Positive,
    /// Predominantly negative text.
    Negative,
    /// Neither positive nor negative.
    Neutral,
    /// Both positive and negative signals.
    Mixed,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NotEnabled => "NOT_ENABLED",
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Mixed => "MIXED",
        })
    }
}

/// Per-channel confidence scores returned by the sentiment collaborator.
///
/// All zeros for the `NOT_ENABLED` sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Confidence that the text is positive.
    pub positive: f64,
    /// Confidence that the text is negative.
    pub negative: f64,
    /// Confidence that the text is neutral.
    pub neutral: f64,
    /// Confidence that the text is mixed.
    pub mixed: f64,
}

/// A sentiment tag together with its score, as returned by the collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    /// The inferred sentiment tag.
    pub sentiment: Sentiment,
    /// The per-channel confidence scores.
    pub score: SentimentScore,
}

// =============================================================================
// Parsed Fields
// =============================================================================

/// Fields contributed by a channel adapter.
///
/// Merged onto the canonical request after dispatch; adapter fields take
/// precedence on collision. Adapters operate on a namespace disjoint from
/// the classifier and settings fields by convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedFields {
    /// The user's utterance or typed input.
    pub question: String,
    /// The matched intent name, if the channel reported one.
    #[serde(default)]
    pub intent: Option<String>,
    /// Slot name/value pairs extracted by the channel.
    #[serde(default)]
    pub slots: Map<String, Value>,
    /// The inbound session container.
    #[serde(default)]
    pub session: Map<String, Value>,
    /// The channel's user identifier.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Additional adapter-specific fields.
    #[serde(default)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// Canonical Request
// =============================================================================

/// The canonical internal request consumed by all downstream processing.
///
/// Exclusively owned by the invocation that created it; never shared across
/// concurrent invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRequest {
    /// The raw inbound event, unmodified.
    pub event: RawEvent,
    /// Which front-door integration produced the event.
    pub kind: RequestKind,
    /// Inferred channel/client identity.
    pub channel: ChannelTag,
    /// Preferred response rendering mode.
    pub preferred_response_mode: ResponseMode,
    /// Settings resolved for this invocation.
    pub settings: ResolvedSettings,
    /// The user's utterance or typed input.
    pub question: String,
    /// The matched intent name, if any.
    pub intent: Option<String>,
    /// Slot name/value pairs.
    pub slots: Map<String, Value>,
    /// The session container, shaped but not persisted by this core.
    pub session: Map<String, Value>,
    /// The channel's user identifier.
    pub user_id: Option<String>,
    /// Adapter- and collaborator-contributed fields outside the canonical
    /// schema.
    pub extra: Map<String, Value>,
    /// Sentiment tag; `NOT_ENABLED` when the feature is gated off.
    pub sentiment: Sentiment,
    /// Sentiment score; all zeros when the feature is gated off.
    pub sentiment_score: SentimentScore,
}

impl CanonicalRequest {
    /// Creates a request for an inbound event with resolved settings attached.
    pub fn new(event: RawEvent, settings: ResolvedSettings) -> Self {
        Self {
            event,
            settings,
            ..Self::default()
        }
    }

    /// Merges adapter-parsed fields onto the request.
    ///
    /// Adapter fields win on collision.
    pub fn apply(&mut self, fields: ParsedFields) {
        self.question = fields.question;
        if fields.intent.is_some() {
            self.intent = fields.intent;
        }
        self.slots = fields.slots;
        self.session = fields.session;
        if fields.user_id.is_some() {
            self.user_id = fields.user_id;
        }
        self.extra.extend(fields.extra);
    }
}
