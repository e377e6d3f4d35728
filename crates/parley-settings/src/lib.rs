//! # Parley Settings
//!
//! Configuration layer for the Parley fulfillment front end.
//!
//! Settings arrive as opaque key/value strings from an external parameter
//! store and must be deserialized, boolean-coerced, and merged across a
//! default → custom precedence chain before any downstream decision
//! (redaction, logging toggles, feature flags) can be made correctly.
//!
//! - [`ParameterStore`]: the store contract (`get(name, decrypt)`)
//! - [`SettingsReader`]: fetch + decode + coercion for one parameter
//! - [`SettingsResolver`]: three fetches, deep merge, key-material
//!   injection, toggle derivation

pub mod reader;
pub mod resolver;
pub mod store;

pub use reader::SettingsReader;
pub use resolver::{ResolverConfig, SettingsResolver};
pub use store::{BoxedStore, MemoryStore, ParameterStore};
