//! # Parley Runtime
//!
//! Orchestration layer for the Parley fulfillment front end.
//!
//! One invocation is one logical flow of control through a fixed sequence:
//!
//! ```text
//! ResolvedSettings ─┐
//!                   ▼
//! RawEvent ──▶ adapter dispatch ──▶ channel classify ──▶ collaborators
//!                   │                                        │
//!                   └────────────────▶ Pipeline::shape ◀─────┘
//!                                          │
//!                          (CanonicalRequest, CanonicalResponse)
//! ```
//!
//! - [`dispatch`]: adapter selection and preferred-response-mode derivation
//! - [`classify`]: the priority-ordered channel classification heuristic
//! - [`shape`]: the [`Pipeline`] producing the canonical pair
//! - [`logging`]: tracing setup and the settings-driven redaction filter

pub mod classify;
pub mod dispatch;
pub mod logging;
pub mod shape;

pub use classify::classify;
pub use dispatch::{detect_kind, preferred_response_mode};
pub use logging::{LoggingBuilder, Redactor};
pub use shape::Pipeline;
