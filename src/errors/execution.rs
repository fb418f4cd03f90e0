// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by [`PolicyEngine::process`](crate::engine::PolicyEngine::process).
//!
//! A gate miss is not an error: the engine returns `Ok(())` without running
//! anything. Every variant here names the engine and the stage that failed.

use std::fmt;
use thiserror::Error;

/// Pipeline stage that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Processor,
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Processor => write!(f, "processor"),
            Stage::Output => write!(f, "output"),
        }
    }
}

/// One failed branch of a parallel processor stage.
#[derive(Debug)]
pub struct BranchFailure {
    pub processor: String,
    pub error: anyhow::Error,
}

impl fmt::Display for BranchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.processor, self.error)
    }
}

#[derive(Error, Debug)]
pub enum PolicyEngineError {
    /// A sequential processor failed. Remaining processors and all output
    /// policies were skipped.
    #[error("engine '{engine}': processor '{processor}' failed: {source}")]
    ProcessorFailed {
        engine: String,
        processor: String,
        #[source]
        source: anyhow::Error,
    },

    /// One or more parallel branches failed after every branch ran to completion.
    /// Side effects of the branches listed in `completed` have already happened
    /// and are not rolled back. Output policies were skipped.
    #[error(
        "engine '{engine}': {} parallel processor(s) failed [{}]; completed branches [{}] are not rolled back",
        .failures.len(),
        join(.failures),
        .completed.join(", ")
    )]
    ParallelProcessorsFailed {
        engine: String,
        failures: Vec<BranchFailure>,
        completed: Vec<String>,
    },

    /// An output policy failed. `further_failures` counts later output
    /// policies that also failed when every policy was allowed to run.
    #[error("engine '{engine}': output policy '{policy}' failed: {source}")]
    OutputPolicyFailed {
        engine: String,
        policy: String,
        #[source]
        source: anyhow::Error,
        further_failures: usize,
    },
}

impl PolicyEngineError {
    pub fn stage(&self) -> Stage {
        match self {
            PolicyEngineError::ProcessorFailed { .. }
            | PolicyEngineError::ParallelProcessorsFailed { .. } => Stage::Processor,
            PolicyEngineError::OutputPolicyFailed { .. } => Stage::Output,
        }
    }

    pub fn engine(&self) -> &str {
        match self {
            PolicyEngineError::ProcessorFailed { engine, .. }
            | PolicyEngineError::ParallelProcessorsFailed { engine, .. }
            | PolicyEngineError::OutputPolicyFailed { engine, .. } => engine,
        }
    }
}

fn join(failures: &[BranchFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
