// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for engine lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Engine construction
//! * Gate evaluation
//! * Per-item processing lifecycle (start, completion)

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Engine configuration frozen by the builder.
///
/// # Log Level
/// `debug!` - Construction detail
///
/// # Example
/// ```
/// use policy_engine::observability::messages::engine::EngineBuilt;
///
/// let msg = EngineBuilt {
///     engine: "aggregate_translation",
///     strategy: "parallel",
///     input_policy_count: 1,
///     processor_count: 3,
///     output_policy_count: 0,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct EngineBuilt<'a> {
    pub engine: &'a str,
    pub strategy: &'a str,
    pub input_policy_count: usize,
    pub processor_count: usize,
    pub output_policy_count: usize,
}

impl Display for EngineBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built engine '{}': {} input policies, {} {} processors, {} output policies",
            self.engine,
            self.input_policy_count,
            self.processor_count,
            self.strategy,
            self.output_policy_count
        )
    }
}

impl StructuredLog for EngineBuilt<'_> {
    fn log(&self) {
        tracing::debug!(
            engine = self.engine,
            strategy = self.strategy,
            input_policy_count = self.input_policy_count,
            processor_count = self.processor_count,
            output_policy_count = self.output_policy_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "engine_built",
            span_name = name,
            engine = self.engine,
            strategy = self.strategy,
        )
    }
}

/// An input policy rejected the item. This is a normal skip, not a failure.
///
/// # Log Level
/// `debug!` - Expected control flow
pub struct GateRejected<'a> {
    pub engine: &'a str,
    pub policy: &'a str,
}

impl Display for GateRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' skipped item: input policy '{}' rejected it",
            self.engine, self.policy
        )
    }
}

impl StructuredLog for GateRejected<'_> {
    fn log(&self) {
        tracing::debug!(engine = self.engine, policy = self.policy, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "gate_rejected",
            span_name = name,
            engine = self.engine,
            policy = self.policy,
        )
    }
}

/// Item passed the gate and the processor stage is starting.
///
/// Its span wraps the whole `process` call for an item.
///
/// # Log Level
/// `debug!` - Per-item lifecycle
pub struct ProcessingStarted<'a> {
    pub engine: &'a str,
    pub strategy: &'a str,
    pub processor_count: usize,
}

impl Display for ProcessingStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' processing item with {} {} processors",
            self.engine, self.processor_count, self.strategy
        )
    }
}

impl StructuredLog for ProcessingStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            engine = self.engine,
            strategy = self.strategy,
            processor_count = self.processor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "policy_engine",
            span_name = name,
            engine = self.engine,
            strategy = self.strategy,
        )
    }
}

/// Processor and output stages both finished without a surfaced failure.
///
/// # Log Level
/// `debug!` - Per-item lifecycle
///
/// # Example
/// ```
/// use policy_engine::observability::messages::engine::ProcessingCompleted;
/// use std::time::Duration;
///
/// let msg = ProcessingCompleted {
///     engine: "numeric_translation",
///     strategy: "sequential_async",
///     duration: Duration::from_millis(12),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ProcessingCompleted<'a> {
    pub engine: &'a str,
    pub strategy: &'a str,
    pub duration: std::time::Duration,
}

impl Display for ProcessingCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' completed item with {} strategy in {:?}",
            self.engine, self.strategy, self.duration
        )
    }
}

impl StructuredLog for ProcessingCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            engine = self.engine,
            strategy = self.strategy,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processing_completed",
            span_name = name,
            engine = self.engine,
            strategy = self.strategy,
            duration = ?self.duration,
        )
    }
}
