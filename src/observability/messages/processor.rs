// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor and output policy failures.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A processor failed and the invocation stops here.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use policy_engine::observability::messages::processor::ProcessorFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "backend unavailable");
/// let msg = ProcessorFailed {
///     engine: "english_translation",
///     processor: "DictionaryTranslator",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ProcessorFailed<'a> {
    pub engine: &'a str,
    pub processor: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}': processor '{}' failed: {}",
            self.engine, self.processor, self.error
        )
    }
}

impl StructuredLog for ProcessorFailed<'_> {
    fn log(&self) {
        tracing::error!(
            engine = self.engine,
            processor = self.processor,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "processor_failed",
            span_name = name,
            engine = self.engine,
            processor = self.processor,
            error = %self.error,
        )
    }
}

/// Some branches of a parallel stage failed after all branches finished.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ParallelBranchesFailed<'a> {
    pub engine: &'a str,
    pub failed: usize,
    pub completed: usize,
}

impl Display for ParallelBranchesFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}': {} parallel branches failed, {} completed with side effects kept",
            self.engine, self.failed, self.completed
        )
    }
}

impl StructuredLog for ParallelBranchesFailed<'_> {
    fn log(&self) {
        tracing::error!(
            engine = self.engine,
            failed = self.failed,
            completed = self.completed,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "parallel_branches_failed",
            span_name = name,
            engine = self.engine,
            failed = self.failed,
            completed = self.completed,
        )
    }
}

/// An output policy failed.
///
/// # Log Level
/// `warn!` - Later output policies may still run
pub struct OutputPolicyFailed<'a> {
    pub engine: &'a str,
    pub policy: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for OutputPolicyFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}': output policy '{}' failed: {}",
            self.engine, self.policy, self.error
        )
    }
}

impl StructuredLog for OutputPolicyFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            engine = self.engine,
            policy = self.policy,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "output_policy_failed",
            span_name = name,
            engine = self.engine,
            policy = self.policy,
            error = %self.error,
        )
    }
}
