//! Settings resolver.
//!
//! Resolution runs first in every invocation and gates the feature toggles
//! consumed by every later stage. It performs three store fetches (default
//! key material, default settings, custom settings), merges the two settings
//! objects with custom winning at every depth, injects the key-material
//! locator under a fixed field name, and derives the logging toggles as
//! explicit values on the result. Any fetch failure aborts resolution;
//! there is no partial or default-only degraded mode.

use serde_json::{Map, Value};
use tracing::{debug, info};

use parley_core::error::{SettingsError, SettingsResult};
use parley_core::settings::{
    KEY_MATERIAL_FIELD, RedactionToggle, ResolvedSettings, Toggles, deep_merge, keys,
};

use crate::reader::SettingsReader;
use crate::store::BoxedStore;

/// Externally supplied parameter identifiers for the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Identifier of the default user-pool key-material parameter.
    pub key_material_param: String,
    /// Identifier of the default settings parameter.
    pub default_settings_param: String,
    /// Identifier of the custom/override settings parameter.
    pub custom_settings_param: String,
}

impl ResolverConfig {
    /// Creates a resolver configuration from explicit identifiers.
    pub fn new(
        key_material_param: impl Into<String>,
        default_settings_param: impl Into<String>,
        custom_settings_param: impl Into<String>,
    ) -> Self {
        Self {
            key_material_param: key_material_param.into(),
            default_settings_param: default_settings_param.into(),
            custom_settings_param: custom_settings_param.into(),
        }
    }

    /// Reads the identifiers from the conventional environment variables.
    pub fn from_env() -> SettingsResult<Self> {
        Ok(Self {
            key_material_param: require_env("DEFAULT_USER_POOL_JWKS_PARAM")?,
            default_settings_param: require_env("DEFAULT_SETTINGS_PARAM")?,
            custom_settings_param: require_env("CUSTOM_SETTINGS_PARAM")?,
        })
    }

    fn validate(&self) -> SettingsResult<()> {
        if self.key_material_param.is_empty() {
            return Err(SettingsError::MissingConfig("key_material_param"));
        }
        if self.default_settings_param.is_empty() {
            return Err(SettingsError::MissingConfig("default_settings_param"));
        }
        if self.custom_settings_param.is_empty() {
            return Err(SettingsError::MissingConfig("custom_settings_param"));
        }
        Ok(())
    }
}

fn require_env(name: &'static str) -> SettingsResult<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(SettingsError::MissingConfig(name))
}

/// Merges the tiered settings store into an effective settings object.
pub struct SettingsResolver {
    reader: SettingsReader,
    config: ResolverConfig,
}

impl SettingsResolver {
    /// Creates a resolver over the given store and identifiers.
    pub fn new(store: BoxedStore, config: ResolverConfig) -> Self {
        Self {
            reader: SettingsReader::new(store),
            config,
        }
    }

    /// Resolves the effective settings for one invocation.
    pub async fn resolve(&self) -> SettingsResult<ResolvedSettings> {
        self.config.validate()?;

        debug!(parameter = %self.config.key_material_param, "Fetching default key material locator");
        let key_material = self.reader.fetch(&self.config.key_material_param).await?;

        debug!(parameter = %self.config.default_settings_param, "Fetching default settings");
        let default_settings = self.reader.fetch(&self.config.default_settings_param).await?;

        debug!(parameter = %self.config.custom_settings_param, "Fetching custom settings");
        let custom_settings = self.reader.fetch(&self.config.custom_settings_param).await?;

        let merged = deep_merge(default_settings, custom_settings);
        let mut merged = match merged {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        merged.insert(KEY_MATERIAL_FIELD.to_string(), key_material);

        let toggles = derive_toggles(&merged);
        Ok(ResolvedSettings::new(Value::Object(merged), toggles))
    }
}

/// Derives the logging toggles from merged settings.
///
/// Both toggles always carry an explicit value, so consumers never have to
/// distinguish "absent" from "explicitly off".
fn derive_toggles(settings: &Map<String, Value>) -> Toggles {
    let redacting_enabled = matches!(settings.get(keys::ENABLE_REDACTING), Some(Value::Bool(true)));
    let redaction = if redacting_enabled {
        let pattern = settings
            .get(keys::REDACTING_REGEX)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        info!("Redacting enabled");
        RedactionToggle {
            enabled: true,
            pattern,
        }
    } else {
        info!("Redacting disabled");
        RedactionToggle {
            enabled: false,
            pattern: String::new(),
        }
    };

    let cloudwatch_logging_disabled = matches!(
        settings.get(keys::DISABLE_CLOUDWATCH_LOGGING),
        Some(Value::Bool(true))
    );
    if cloudwatch_logging_disabled {
        info!("Destination logging sink disabled");
    } else {
        info!("Destination logging sink enabled");
    }

    Toggles {
        redaction,
        cloudwatch_logging_disabled,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::store::MemoryStore;

    use super::*;

    const JWKS: &str = "jwks-param";
    const DEFAULTS: &str = "default-settings";
    const CUSTOM: &str = "custom-settings";

    fn config() -> ResolverConfig {
        ResolverConfig::new(JWKS, DEFAULTS, CUSTOM)
    }

    fn resolver(store: MemoryStore) -> SettingsResolver {
        SettingsResolver::new(Arc::new(store), config())
    }

    fn store_with(defaults: &str, custom: &str) -> MemoryStore {
        MemoryStore::new()
            .with(JWKS, "https://example.com/jwks.json")
            .with(DEFAULTS, defaults)
            .with(CUSTOM, custom)
    }

    #[tokio::test]
    async fn custom_settings_override_defaults() {
        let store = store_with(
            r#"{"ENABLE_REDACTING":"false","GREETING":"hello","nested":{"a":1,"b":2}}"#,
            r#"{"GREETING":"hi","nested":{"b":3}}"#,
        );
        let settings = resolver(store).resolve().await.unwrap();

        assert_eq!(settings.text("GREETING"), Some("hi"));
        assert_eq!(settings.get("nested"), Some(&json!({ "a": 1, "b": 3 })));
        assert!(!settings.flag(keys::ENABLE_REDACTING));
    }

    #[tokio::test]
    async fn key_material_locator_is_injected() {
        let store = store_with("{}", "{}");
        let settings = resolver(store).resolve().await.unwrap();
        assert_eq!(
            settings.text(KEY_MATERIAL_FIELD),
            Some("https://example.com/jwks.json")
        );
    }

    #[tokio::test]
    async fn redaction_toggle_carries_pattern_when_enabled() {
        let store = store_with(
            r#"{"ENABLE_REDACTING":"true","REDACTING_REGEX":"\\d{4}"}"#,
            "{}",
        );
        let settings = resolver(store).resolve().await.unwrap();
        assert!(settings.toggles.redaction.enabled);
        assert_eq!(settings.toggles.redaction.pattern, "\\d{4}");
    }

    #[tokio::test]
    async fn disabled_toggles_are_explicit() {
        let store = store_with("{}", "{}");
        let settings = resolver(store).resolve().await.unwrap();
        assert!(!settings.toggles.redaction.enabled);
        assert_eq!(settings.toggles.redaction.pattern, "");
        assert!(settings.toggles.log_sink_enabled());
    }

    #[tokio::test]
    async fn cloudwatch_logging_can_be_disabled() {
        let store = store_with(r#"{"DISABLE_CLOUDWATCH_LOGGING":"true"}"#, "{}");
        let settings = resolver(store).resolve().await.unwrap();
        assert!(settings.toggles.cloudwatch_logging_disabled);
        assert!(!settings.toggles.log_sink_enabled());
    }

    #[tokio::test]
    async fn any_fetch_failure_aborts_resolution() {
        let store = MemoryStore::new()
            .with(JWKS, "https://example.com/jwks.json")
            .with(DEFAULTS, "{}");
        let result = resolver(store).resolve().await;
        assert!(matches!(
            result,
            Err(SettingsError::ParameterNotFound { ref name }) if name == CUSTOM
        ));
    }

    #[tokio::test]
    async fn empty_identifier_is_rejected() {
        let store = store_with("{}", "{}");
        let resolver =
            SettingsResolver::new(Arc::new(store), ResolverConfig::new("", DEFAULTS, CUSTOM));
        assert!(matches!(
            resolver.resolve().await,
            Err(SettingsError::MissingConfig("key_material_param"))
        ));
    }
}
