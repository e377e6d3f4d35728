//! Parameter store contract.
//!
//! The retrieval transport beneath the store (and any retry policy it
//! carries) is outside this core's contract; the resolver only requires the
//! [`ParameterStore`] trait. [`MemoryStore`] backs tests and local
//! development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use parley_core::error::{SettingsError, SettingsResult};

/// An external key/value store holding named configuration blobs.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Retrieves the raw string value for a parameter identifier.
    ///
    /// Fails if the identifier is absent or access is denied; callers must
    /// propagate the failure, never substitute an empty configuration.
    async fn get(&self, name: &str, decrypt: bool) -> SettingsResult<String>;
}

/// A boxed parameter store trait object.
pub type BoxedStore = Arc<dyn ParameterStore>;

/// In-memory parameter store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    parameters: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl ParameterStore for MemoryStore {
    async fn get(&self, name: &str, _decrypt: bool) -> SettingsResult<String> {
        self.parameters
            .get(name)
            .cloned()
            .ok_or_else(|| SettingsError::ParameterNotFound {
                name: name.to_string(),
            })
    }
}
