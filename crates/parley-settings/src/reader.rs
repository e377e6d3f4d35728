//! Settings store reader.
//!
//! Retrieves named configuration blobs with secret decryption enabled and
//! normalizes them: values that parse as JSON are decoded into their
//! structural form with boolean coercion applied; values that do not parse
//! are kept as raw scalars, which is an explicit fallback, not a failure.

use serde_json::Value;
use tracing::debug;

use parley_core::error::SettingsResult;
use parley_core::settings::coerce_bools;

use crate::store::BoxedStore;

/// Reads and normalizes parameters from a [`ParameterStore`].
///
/// [`ParameterStore`]: crate::store::ParameterStore
pub struct SettingsReader {
    store: BoxedStore,
}

impl SettingsReader {
    /// Creates a reader over the given store.
    pub fn new(store: BoxedStore) -> Self {
        Self { store }
    }

    /// Fetches a parameter and decodes it into a settings value.
    ///
    /// Store failures propagate unmodified; an invocation without
    /// configuration cannot safely decide redaction or logging policy.
    pub async fn fetch(&self, name: &str) -> SettingsResult<Value> {
        let raw = self.store.get(name, true).await?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(decoded) => {
                debug!(parameter = %name, "Decoded JSON settings parameter");
                Ok(coerce_bools(decoded))
            }
            Err(_) => {
                debug!(parameter = %name, "Parameter is not JSON, keeping raw value");
                Ok(Value::String(raw))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::store::MemoryStore;

    use super::*;

    fn reader(store: MemoryStore) -> SettingsReader {
        SettingsReader::new(Arc::new(store))
    }

    #[tokio::test]
    async fn json_parameters_are_decoded_and_coerced() {
        let reader = reader(
            MemoryStore::new().with(
                "settings",
                r#"{"ENABLE_REDACTING":"true","LIMIT":"5","nested":{"flag":"\"false\""}}"#,
            ),
        );
        let value = reader.fetch("settings").await.unwrap();
        assert_eq!(
            value,
            json!({ "ENABLE_REDACTING": true, "LIMIT": "5", "nested": { "flag": false } })
        );
    }

    #[tokio::test]
    async fn non_json_parameters_pass_through_as_scalars() {
        let reader = reader(MemoryStore::new().with("jwks", "https://example.com/jwks.json"));
        let value = reader.fetch("jwks").await.unwrap();
        assert_eq!(value, json!("https://example.com/jwks.json"));
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let reader = reader(MemoryStore::new());
        assert!(reader.fetch("absent").await.is_err());
    }
}
