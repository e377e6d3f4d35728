//! Collaborator contracts consumed by the shaping pipeline.
//!
//! The channel-specific parsers, the multilanguage subsystem and the
//! sentiment subsystem are external collaborators; this core only specifies
//! their call contracts. Each trait is object-safe so the pipeline can hold
//! collaborators as trait objects, in the same way the transport layer of a
//! bot framework holds its protocol adapters.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AdapterResult, PipelineResult};
use crate::event::RawEvent;
use crate::request::{CanonicalRequest, ParsedFields, SentimentReading};

/// A channel-specific parser extracting intent/slot data from a raw event.
///
/// The voice-assistant adapter is implicitly speech-only; the
/// conversational-platform adapter's events additionally carry an
/// output-dialog-mode hint and optional content-type-acceptance headers,
/// which the dispatch layer (not the adapter) turns into a preferred
/// response mode.
#[async_trait]
pub trait ChannelAdapter: Send + Sync {
    /// Parses the raw event into fields merged onto the canonical request.
    async fn parse(&self, event: &RawEvent) -> AdapterResult<ParsedFields>;
}

/// A boxed channel adapter trait object.
pub type BoxedAdapter = Arc<dyn ChannelAdapter>;

/// The multilanguage translation subsystem.
///
/// Side-effecting on the request; gated by the
/// `ENABLE_MULTI_LANGUAGE_SUPPORT` settings flag.
#[async_trait]
pub trait MultilanguageSupport: Send + Sync {
    /// Establishes the language context used by later stages.
    async fn set_multilang_env(&self, request: &mut CanonicalRequest) -> PipelineResult<()>;
}

/// The sentiment-analysis subsystem.
///
/// Gated by the `ENABLE_SENTIMENT_SUPPORT` settings flag.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Returns a sentiment tag and score for the given text.
    async fn get_sentiment(&self, text: &str) -> PipelineResult<SentimentReading>;
}
