//! Logging utilities for the Parley front end.
//!
//! Provides a `tracing`/`tracing-subscriber` setup plus the redaction
//! filter the settings resolver toggles. Redaction is applied through an
//! explicit [`Redactor`] threaded from the resolved settings, never through
//! ambient process state, so concurrent invocations sharing a process
//! cannot leak each other's policy.
//!
//! ```rust,ignore
//! use parley_runtime::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_level(tracing::Level::DEBUG)
//!     .directive("parley_settings=trace")
//!     .init();
//! ```

use std::borrow::Cow;

use regex::Regex;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

use parley_core::settings::RedactionToggle;

/// Replacement text written over redacted matches.
const REDACTION_MASK: &str = "XXXXXX";

// =============================================================================
// Redaction
// =============================================================================

/// Redaction filter compiled from the resolved settings toggle.
///
/// Built once per invocation; an invalid or empty pattern disables
/// redaction with a warning rather than failing the invocation.
#[derive(Debug, Default)]
pub struct Redactor {
    pattern: Option<Regex>,
}

impl Redactor {
    /// Compiles a redactor from the settings-derived toggle.
    pub fn from_toggle(toggle: &RedactionToggle) -> Self {
        if !toggle.enabled || toggle.pattern.is_empty() {
            return Self { pattern: None };
        }
        match Regex::new(&toggle.pattern) {
            Ok(pattern) => Self {
                pattern: Some(pattern),
            },
            Err(error) => {
                warn!(%error, "Invalid redaction pattern, redaction disabled");
                Self { pattern: None }
            }
        }
    }

    /// Masks every match of the configured pattern.
    ///
    /// Returns the text unchanged when redaction is off.
    pub fn redact<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, REDACTION_MASK),
            None => Cow::Borrowed(text),
        }
    }
}

// =============================================================================
// Logging Setup
// =============================================================================

/// A builder for configuring the tracing subscriber.
#[derive(Default)]
pub struct LoggingBuilder {
    directives: Vec<String>,
    level: Option<tracing::Level>,
}

impl LoggingBuilder {
    /// Creates a new logging builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global log level.
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Adds a filter directive, e.g. `"parley_runtime=debug"`.
    pub fn directive(mut self, directive: &str) -> Self {
        self.directives.push(directive.to_string());
        self
    }

    /// Builds the filter from the level, `RUST_LOG`, and directives.
    fn build_filter(&self) -> EnvFilter {
        let base_level = self.level.unwrap_or(tracing::Level::INFO);
        let base_filter = base_level.to_string().to_lowercase();

        let mut filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&base_filter));

        for directive in &self.directives {
            if let Ok(d) = directive.parse() {
                filter = filter.add_directive(d);
            }
        }

        filter
    }

    /// Initializes the logging system, ignoring a subscriber that is
    /// already installed.
    pub fn init(self) {
        let _ = self.try_init();
    }

    /// Tries to initialize the logging system, returning an error on
    /// failure.
    pub fn try_init(self) -> Result<(), TryInitError> {
        use tracing_subscriber::prelude::*;

        let filter = self.build_filter();
        let layer = tracing_subscriber::fmt::layer().compact();
        tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redactor_masks_matches() {
        let toggle = RedactionToggle {
            enabled: true,
            pattern: r"\d{4}".to_string(),
        };
        let redactor = Redactor::from_toggle(&toggle);
        assert_eq!(
            redactor.redact("my pin is 1234 and 5678"),
            "my pin is XXXXXX and XXXXXX"
        );
    }

    #[test]
    fn disabled_toggle_passes_text_through() {
        let redactor = Redactor::from_toggle(&RedactionToggle::default());
        assert_eq!(redactor.redact("my pin is 1234"), "my pin is 1234");
    }

    #[test]
    fn invalid_pattern_disables_redaction() {
        let toggle = RedactionToggle {
            enabled: true,
            pattern: "(".to_string(),
        };
        let redactor = Redactor::from_toggle(&toggle);
        assert_eq!(redactor.redact("text"), "text");
    }
}
