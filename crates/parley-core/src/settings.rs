//! Settings value model.
//!
//! Configuration arrives from the parameter store as opaque strings, so the
//! settings value is the recursive [`serde_json::Value`] type and the two
//! transformations over it are pure functions:
//!
//! - [`coerce_bools`] — turns string-encoded `"true"`/`"false"` (optionally
//!   wrapped in one layer of quotes) into real booleans, at any depth
//! - [`deep_merge`] — layers custom settings over defaults, custom winning
//!   on key conflicts at every depth
//!
//! This isolates the stringly-typed store impedance mismatch to one narrow
//! boundary; everything downstream reads [`ResolvedSettings`] through typed
//! accessors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fixed field name under which the default authentication key-material
/// locator is injected into the resolved settings.
pub const KEY_MATERIAL_FIELD: &str = "DEFAULT_USER_POOL_JWKS_URL";

/// Recognized settings keys consumed by this core.
pub mod keys {
    /// Enables the logging redaction filter.
    pub const ENABLE_REDACTING: &str = "ENABLE_REDACTING";
    /// Regex pattern used by the redaction filter.
    pub const REDACTING_REGEX: &str = "REDACTING_REGEX";
    /// Disables the destination logging sink.
    pub const DISABLE_CLOUDWATCH_LOGGING: &str = "DISABLE_CLOUDWATCH_LOGGING";
    /// Enables the multilanguage collaborator.
    pub const ENABLE_MULTI_LANGUAGE_SUPPORT: &str = "ENABLE_MULTI_LANGUAGE_SUPPORT";
    /// Enables the sentiment collaborator.
    pub const ENABLE_SENTIMENT_SUPPORT: &str = "ENABLE_SENTIMENT_SUPPORT";
}

// =============================================================================
// Value Transformations
// =============================================================================

/// Strips exactly one layer of wrapping double quotes, if present.
fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .filter(|inner| !inner.is_empty())
        .unwrap_or(s)
}

/// Coerces string-encoded booleans into real booleans, recursively.
///
/// A string equal (case-insensitively) to `"true"` or `"false"` after
/// quote-stripping becomes the corresponding boolean; every other value
/// passes through unchanged.
pub fn coerce_bools(value: Value) -> Value {
    match value {
        Value::String(s) => match strip_quotes(&s).to_lowercase().as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(s),
        },
        Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, coerce_bools(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(coerce_bools).collect()),
        other => other,
    }
}

/// Deep-merges `custom` over `default`.
///
/// Objects are merged key-by-key with `custom` winning on conflicts at every
/// nesting depth. Arrays and scalars are not merged element-wise; the custom
/// value replaces the default wholesale.
pub fn deep_merge(default: Value, custom: Value) -> Value {
    match (default, custom) {
        (Value::Object(mut base), Value::Object(over)) => {
            for (key, value) in over {
                let merged = match base.remove(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            Value::Object(base)
        }
        (_, custom) => custom,
    }
}

// =============================================================================
// Resolved Settings
// =============================================================================

/// Redaction filter toggle derived during settings resolution.
///
/// When the feature is off the pattern is explicitly empty, so consumers
/// never have to distinguish "absent" from "explicitly off".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedactionToggle {
    /// Whether the redaction filter is active.
    pub enabled: bool,
    /// Regex pattern matching text to redact. Empty when disabled.
    pub pattern: String,
}

/// Feature toggles consumed by the logging subsystem.
///
/// These are plain values threaded through the call context rather than
/// ambient process state, so concurrent invocations sharing a process
/// cannot observe each other's toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Toggles {
    /// Redaction filter state.
    pub redaction: RedactionToggle,
    /// Whether the destination logging sink is disabled.
    pub cloudwatch_logging_disabled: bool,
}

impl Toggles {
    /// Returns true when the destination logging sink should receive output.
    pub fn log_sink_enabled(&self) -> bool {
        !self.cloudwatch_logging_disabled
    }
}

/// Settings after the default → custom precedence merge.
///
/// Immutable once produced; attached to the canonical request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSettings {
    values: Map<String, Value>,
    /// Toggles derived from the merged settings.
    pub toggles: Toggles,
}

impl ResolvedSettings {
    /// Wraps a merged settings object and its derived toggles.
    ///
    /// A non-object merged value yields an empty settings map; the store can
    /// legally hold scalar parameters, but a settings blob that is not an
    /// object carries no keys to resolve.
    pub fn new(merged: Value, toggles: Toggles) -> Self {
        let values = match merged {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { values, toggles }
    }

    /// Returns the raw value for a settings key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns a boolean settings flag, treating absent or non-boolean
    /// values as `false`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(Value::Bool(true)))
    }

    /// Returns a string settings value, if present.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Returns the full settings map.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_quote_wrapped_booleans_at_depth() {
        let value = json!({
            "a": "true",
            "b": "\"False\"",
            "nested": { "c": "TRUE", "list": ["false", "keep"] },
            "n": 3,
        });
        let coerced = coerce_bools(value);
        assert_eq!(
            coerced,
            json!({
                "a": true,
                "b": false,
                "nested": { "c": true, "list": [false, "keep"] },
                "n": 3,
            })
        );
    }

    #[test]
    fn leaves_non_boolean_strings_alone() {
        let coerced = coerce_bools(json!({ "a": "truthy", "b": "\"\"", "c": "" }));
        assert_eq!(coerced, json!({ "a": "truthy", "b": "\"\"", "c": "" }));
    }

    #[test]
    fn merge_custom_wins_at_every_depth() {
        let default = json!({
            "keep": 1,
            "override": "old",
            "nested": { "keep": true, "override": "old" },
        });
        let custom = json!({
            "override": "new",
            "added": 2,
            "nested": { "override": "new" },
        });
        assert_eq!(
            deep_merge(default, custom),
            json!({
                "keep": 1,
                "override": "new",
                "added": 2,
                "nested": { "keep": true, "override": "new" },
            })
        );
    }

    #[test]
    fn merge_replaces_arrays_wholesale() {
        let default = json!({ "list": [1, 2, 3] });
        let custom = json!({ "list": [9] });
        assert_eq!(deep_merge(default, custom), json!({ "list": [9] }));
    }

    #[test]
    fn flag_treats_absent_and_non_boolean_as_false() {
        let settings =
            ResolvedSettings::new(json!({ "on": true, "off": false, "s": "true-ish" }), Toggles::default());
        assert!(settings.flag("on"));
        assert!(!settings.flag("off"));
        assert!(!settings.flag("s"));
        assert!(!settings.flag("missing"));
    }
}
