//! Channel identity and response rendering tags.
//!
//! [`ChannelTag`] is the closed set of channel/client identities the
//! classifier can produce. Classification is best-effort and
//! telemetry-grade; several channels have no authoritative discriminator,
//! so a misclassified tag is advisory, never an error.

use serde::{Deserialize, Serialize};

// =============================================================================
// Request Kind
// =============================================================================

/// High-level request classification by front-door integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// Voice-assistant integration (speech-only).
    Alexa,
    /// Conversational-platform integration.
    Lex,
}

impl Default for RequestKind {
    fn default() -> Self {
        Self::Lex
    }
}

// =============================================================================
// Response Mode
// =============================================================================

/// Preferred response rendering mode reported to downstream formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseMode {
    /// Plain text rendering.
    #[default]
    PlainText,
    /// Speech-markup rendering.
    Ssml,
}

impl std::fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::PlainText => "PlainText",
            Self::Ssml => "SSML",
        })
    }
}

/// Voice/text mode suffix carried by conversational-platform channel tags.
///
/// `Voice` iff the preferred response mode is speech-markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogFlavor {
    /// Speech-markup responses.
    Voice,
    /// Plain text responses.
    #[default]
    Text,
}

impl From<ResponseMode> for DialogFlavor {
    fn from(mode: ResponseMode) -> Self {
        match mode {
            ResponseMode::Ssml => Self::Voice,
            ResponseMode::PlainText => Self::Text,
        }
    }
}

impl std::fmt::Display for DialogFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Voice => "Voice",
            Self::Text => "Text",
        })
    }
}

// =============================================================================
// Channel Tag
// =============================================================================

/// Known conversational-platform client variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexVariant {
    /// Slack messaging platform.
    Slack,
    /// Twilio SMS integration.
    TwilioSms,
    /// Amazon Connect contact-center integration.
    AmazonConnect,
    /// Lex Web UI with anonymous identity-pool credentials.
    LexWebUi,
}

impl std::fmt::Display for LexVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Slack => "Slack",
            Self::TwilioSms => "TwilioSMS",
            Self::AmazonConnect => "AmazonConnect",
            Self::LexWebUi => "LexWebUI",
        })
    }
}

/// Inferred channel/client identity.
///
/// Renders as `ALEXA`, `LEX.<Variant>.<Mode>`, or the generic `LEX.<Mode>`
/// when no variant signal was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelTag {
    /// Voice-assistant channel. Carries no mode suffix; the channel is
    /// speech-only.
    Alexa,
    /// Conversational-platform channel.
    Lex {
        /// The recognized client variant, if any.
        variant: Option<LexVariant>,
        /// Voice/text mode derived from the preferred response mode.
        flavor: DialogFlavor,
    },
}

impl ChannelTag {
    /// Builds a conversational-platform tag for a known variant.
    pub fn lex(variant: LexVariant, flavor: DialogFlavor) -> Self {
        Self::Lex {
            variant: Some(variant),
            flavor,
        }
    }

    /// Builds the generic conversational-platform tag.
    pub fn generic_lex(flavor: DialogFlavor) -> Self {
        Self::Lex {
            variant: None,
            flavor,
        }
    }
}

impl Default for ChannelTag {
    fn default() -> Self {
        Self::Lex {
            variant: None,
            flavor: DialogFlavor::Text,
        }
    }
}

impl std::fmt::Display for ChannelTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alexa => f.write_str("ALEXA"),
            Self::Lex {
                variant: Some(variant),
                flavor,
            } => write!(f, "LEX.{variant}.{flavor}"),
            Self::Lex {
                variant: None,
                flavor,
            } => write!(f, "LEX.{flavor}"),
        }
    }
}
