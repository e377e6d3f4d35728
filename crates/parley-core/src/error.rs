//! Unified error types for the Parley core.
//!
//! This module provides standardized error types used across the settings,
//! adapter and pipeline layers.

use thiserror::Error;

// =============================================================================
// Settings Errors
// =============================================================================

/// Errors that can occur while fetching or resolving settings.
///
/// Any of these aborts the invocation; there is no degraded default-only
/// mode, because an invocation without configuration cannot safely decide
/// redaction or logging policy.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    /// The named parameter does not exist in the store.
    #[error("parameter '{name}' not found")]
    ParameterNotFound {
        /// The missing parameter identifier.
        name: String,
    },

    /// The backing store could not be reached.
    #[error("parameter store unavailable: {reason}")]
    StoreUnavailable {
        /// Reason for failure.
        reason: String,
    },

    /// The store refused to decrypt or return the parameter.
    #[error("access to parameter '{name}' denied: {reason}")]
    AccessDenied {
        /// The parameter identifier.
        name: String,
        /// Reason for denial.
        reason: String,
    },

    /// A required resolver identifier was not supplied.
    #[error("missing resolver configuration: {0}")]
    MissingConfig(&'static str),
}

// =============================================================================
// Adapter Errors
// =============================================================================

/// Errors that can occur in channel adapter operations.
#[derive(Debug, Clone, Error)]
pub enum AdapterError {
    /// Event parsing failed.
    #[error("failed to parse event: {reason}")]
    ParseError {
        /// Reason for failure.
        reason: String,
    },

    /// Internal adapter error.
    #[error("adapter error: {0}")]
    Internal(String),
}

// =============================================================================
// Pipeline Errors
// =============================================================================

/// Errors surfaced by the request/response shaping pipeline.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    /// Settings resolution failed.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Channel adapter dispatch failed.
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// The multilanguage collaborator failed.
    #[error("multilanguage collaborator failed: {reason}")]
    Multilanguage {
        /// Reason for failure.
        reason: String,
    },

    /// The sentiment collaborator failed.
    #[error("sentiment collaborator failed: {reason}")]
    Sentiment {
        /// Reason for failure.
        reason: String,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
