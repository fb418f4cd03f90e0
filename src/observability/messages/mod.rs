// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit the same event with typed tracing fields.
//!
//! # Organization
//!
//! * `engine` - Engine construction and per-item lifecycle events
//! * `processor` - Processor and output policy failures
//!
//! # Usage Pattern
//!
//! ```rust
//! use policy_engine::observability::messages::engine::GateRejected;
//! use policy_engine::observability::messages::StructuredLog;
//!
//! let msg = GateRejected {
//!     engine: "english_translation",
//!     policy: "NotYetTranslated",
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod engine;
pub mod processor;

/// A log message that knows its own level and fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event at its documented level.
    fn log(&self);

    /// Build a span carrying the message fields.
    fn span(&self, name: &str) -> Span;
}
