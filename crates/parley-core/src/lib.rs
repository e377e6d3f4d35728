//! # Parley Core
//!
//! Core models for the Parley fulfillment front end.
//!
//! Parley sits at the front of a conversational-bot fulfillment handler: it
//! receives a raw inbound event from one of several heterogeneous voice/text
//! channel integrations, classifies which channel produced it, merges a
//! tiered configuration store into an effective settings object, and emits a
//! canonical request/response pair that downstream processing consumes
//! without channel-specific branching.
//!
//! This crate provides the shared foundation:
//!
//! - **Settings model**: the recursive settings value with boolean coercion
//!   and deep merge ([`coerce_bools`], [`deep_merge`], [`ResolvedSettings`])
//! - **Event model**: the opaque inbound payload ([`RawEvent`])
//! - **Channel tags**: the closed identity set ([`ChannelTag`],
//!   [`ResponseMode`])
//! - **Canonical models**: [`CanonicalRequest`] and [`CanonicalResponse`]
//! - **Collaborator contracts**: [`ChannelAdapter`],
//!   [`MultilanguageSupport`], [`SentimentAnalyzer`]
//! - **Errors**: per-layer `thiserror` enums with result aliases

pub mod channel;
pub mod collaborator;
pub mod error;
pub mod event;
pub mod request;
pub mod response;
pub mod settings;

pub use channel::{ChannelTag, DialogFlavor, LexVariant, RequestKind, ResponseMode};
pub use collaborator::{BoxedAdapter, ChannelAdapter, MultilanguageSupport, SentimentAnalyzer};
pub use error::{
    AdapterError, AdapterResult, PipelineError, PipelineResult, SettingsError, SettingsResult,
};
pub use event::{ACCEPT_CONTENT_TYPES_ATTRIBUTE, CHANNEL_TYPE_ATTRIBUTE, RawEvent};
pub use request::{
    CanonicalRequest, ParsedFields, Sentiment, SentimentReading, SentimentScore,
};
pub use response::{APP_CONTEXT_KEY, BOT_CONTEXT_KEY, CanonicalResponse, ResponseCard};
pub use settings::{
    KEY_MATERIAL_FIELD, RedactionToggle, ResolvedSettings, Toggles, coerce_bools, deep_merge,
};
