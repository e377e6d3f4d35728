//! Channel adapter dispatch.
//!
//! Determines which external parser handles the event by inspecting the raw
//! event's shape only (not settings), merges the parsed fields onto the
//! request, and derives the preferred response rendering mode from
//! channel-reported capabilities.

use tracing::{debug, warn};

use parley_core::channel::{RequestKind, ResponseMode};
use parley_core::collaborator::BoxedAdapter;
use parley_core::error::AdapterResult;
use parley_core::event::{ACCEPT_CONTENT_TYPES_ATTRIBUTE, RawEvent};
use parley_core::request::CanonicalRequest;

/// Classifies the request by front-door integration.
///
/// Only voice-assistant events carry the version marker.
pub fn detect_kind(event: &RawEvent) -> RequestKind {
    if event.version().is_some() {
        RequestKind::Alexa
    } else {
        RequestKind::Lex
    }
}

/// Derives the preferred response mode for a conversational-platform event.
///
/// `"Voice"` dialog mode means speech-markup. Contact-center integrations
/// use `"Text"` dialog mode yet indicate speech-markup support through the
/// accepted-content-types header, so that header upgrades `"Text"` to SSML.
/// Any other or missing value is logged and defaults to plain text.
pub fn preferred_response_mode(event: &RawEvent) -> ResponseMode {
    match event.output_dialog_mode() {
        Some("Voice") => ResponseMode::Ssml,
        Some("Text") => {
            let accepted = event
                .request_attribute(ACCEPT_CONTENT_TYPES_ATTRIBUTE)
                .unwrap_or("");
            if accepted.contains("SSML") {
                ResponseMode::Ssml
            } else {
                ResponseMode::PlainText
            }
        }
        other => {
            warn!(output_dialog_mode = ?other, "Unrecognized outputDialogMode, defaulting to plain text");
            ResponseMode::PlainText
        }
    }
}

/// Delegates to the adapter matching the request kind and merges its fields
/// onto the request.
///
/// The voice-assistant channel is speech-only, so its preferred response
/// mode is forced to speech-markup.
pub(crate) async fn dispatch(
    alexa: &BoxedAdapter,
    lex: &BoxedAdapter,
    request: &mut CanonicalRequest,
) -> AdapterResult<()> {
    match request.kind {
        RequestKind::Alexa => {
            let fields = alexa.parse(&request.event).await?;
            request.apply(fields);
            request.preferred_response_mode = ResponseMode::Ssml;
        }
        RequestKind::Lex => {
            let fields = lex.parse(&request.event).await?;
            request.apply(fields);
            request.preferred_response_mode = preferred_response_mode(&request.event);
        }
    }
    debug!(
        kind = ?request.kind,
        mode = %request.preferred_response_mode,
        "Adapter dispatch complete"
    );
    Ok(())
}
