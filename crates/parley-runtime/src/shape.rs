//! Request/response shaper.
//!
//! [`Pipeline::shape`] is the single producer of the canonical
//! request/response pair consumed by downstream intent processing. The
//! stage order is a correctness dependency, not an optimization: settings
//! are attached before any feature-gated collaborator runs, and the adapter
//! runs before the classifier because the classifier reads the
//! adapter-derived preferred response mode. No retries happen at this
//! layer; any adapter or collaborator failure propagates.

use std::sync::Arc;

use tracing::{debug, warn};

use parley_core::collaborator::{BoxedAdapter, MultilanguageSupport, SentimentAnalyzer};
use parley_core::error::PipelineResult;
use parley_core::event::RawEvent;
use parley_core::request::CanonicalRequest;
use parley_core::response::CanonicalResponse;
use parley_core::settings::{ResolvedSettings, keys};

use crate::classify::classify;
use crate::dispatch::{detect_kind, dispatch};
use crate::logging::Redactor;

/// The request-normalization pipeline.
///
/// Owns the two channel adapters and the optional feature-gated
/// collaborators. One pipeline instance serves many invocations; each
/// invocation exclusively owns the pair it produces.
pub struct Pipeline {
    alexa: BoxedAdapter,
    lex: BoxedAdapter,
    multilanguage: Option<Arc<dyn MultilanguageSupport>>,
    sentiment: Option<Arc<dyn SentimentAnalyzer>>,
}

impl Pipeline {
    /// Creates a pipeline over the voice-assistant and
    /// conversational-platform adapters.
    pub fn new(alexa: BoxedAdapter, lex: BoxedAdapter) -> Self {
        Self {
            alexa,
            lex,
            multilanguage: None,
            sentiment: None,
        }
    }

    /// Wires the multilanguage collaborator.
    pub fn with_multilanguage(mut self, collaborator: Arc<dyn MultilanguageSupport>) -> Self {
        self.multilanguage = Some(collaborator);
        self
    }

    /// Wires the sentiment collaborator.
    pub fn with_sentiment(mut self, collaborator: Arc<dyn SentimentAnalyzer>) -> Self {
        self.sentiment = Some(collaborator);
        self
    }

    /// Shapes a raw inbound event into the canonical request/response pair.
    pub async fn shape(
        &self,
        settings: ResolvedSettings,
        event: RawEvent,
    ) -> PipelineResult<(CanonicalRequest, CanonicalResponse)> {
        let redactor = Redactor::from_toggle(&settings.toggles.redaction);
        let mut request = CanonicalRequest::new(event, settings);

        request.kind = detect_kind(&request.event);
        dispatch(&self.alexa, &self.lex, &mut request).await?;

        request.channel = classify(&request);
        debug!(
            channel = %request.channel,
            mode = %request.preferred_response_mode,
            question = %redactor.redact(&request.question),
            "Shaped inbound request"
        );

        if request.settings.flag(keys::ENABLE_MULTI_LANGUAGE_SUPPORT) {
            match &self.multilanguage {
                Some(multilanguage) => multilanguage.set_multilang_env(&mut request).await?,
                None => warn!("Multilanguage support enabled but no collaborator wired"),
            }
        }

        if request.settings.flag(keys::ENABLE_SENTIMENT_SUPPORT)
            && let Some(sentiment) = &self.sentiment
        {
            let reading = sentiment.get_sentiment(&request.question).await?;
            request.sentiment = reading.sentiment;
            request.sentiment_score = reading.score;
        }
        // The defaults already carry the NOT_ENABLED sentinel with an empty
        // score, so the fields are present either way.

        let response = CanonicalResponse::from_session(&request.session);
        Ok((request, response))
    }
}
