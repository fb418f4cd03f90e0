// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use crate::config::{EngineOptions, OutputFailurePolicy};
use crate::engine::runner::{ProcessorRunner, Strategy};
use crate::errors::PolicyEngineError;
use crate::observability::messages::engine::{
    EngineBuilt, GateRejected, ProcessingCompleted, ProcessingStarted,
};
use crate::observability::messages::processor::OutputPolicyFailed;
use crate::observability::messages::StructuredLog;
use crate::traits::{AsyncProcessor, InputPolicy, OutputPolicy};

/// Name given to engines built without one.
pub const DEFAULT_ENGINE_NAME: &str = "policy_engine";

/// An immutable gate → process → finalize pipeline for items of type `T`.
///
/// Built once through [`PolicyEngineBuilder`](crate::builder::PolicyEngineBuilder)
/// and reused for any number of items. The engine holds no per-call state, so
/// concurrent calls for different items need no locking.
///
/// ## Execution
///
/// 1. **Gate**: input policies are evaluated in order. The first `false` ends
///    the call with `Ok(())` and nothing else runs.
/// 2. **Process**: the configured strategy runs once over the item.
/// 3. **Finalize**: output policies run in order. See
///    [`OutputFailurePolicy`] for how their failures are handled.
///
/// A processor failure skips the finalize stage entirely.
pub struct PolicyEngine<T> {
    name: String,
    input_policies: Vec<Arc<dyn InputPolicy<T>>>,
    runner: ProcessorRunner<T>,
    output_policies: Vec<Arc<dyn OutputPolicy<T>>>,
    output_failure_policy: OutputFailurePolicy,
}

impl<T: Send + Sync> PolicyEngine<T> {
    pub(crate) fn new(
        input_policies: Vec<Arc<dyn InputPolicy<T>>>,
        runner: ProcessorRunner<T>,
        output_policies: Vec<Arc<dyn OutputPolicy<T>>>,
        options: EngineOptions,
    ) -> Self {
        let engine = Self {
            name: options
                .name
                .unwrap_or_else(|| DEFAULT_ENGINE_NAME.to_string()),
            input_policies,
            runner,
            output_policies,
            output_failure_policy: options.output_failure_policy,
        };

        EngineBuilt {
            engine: &engine.name,
            strategy: engine.runner.strategy().as_str(),
            input_policy_count: engine.input_policies.len(),
            processor_count: engine.runner.len(),
            output_policy_count: engine.output_policies.len(),
        }
        .log();

        engine
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> Strategy {
        self.runner.strategy()
    }

    pub fn output_failure_policy(&self) -> OutputFailurePolicy {
        self.output_failure_policy
    }

    /// Run the item through the pipeline.
    ///
    /// Returns `Ok(())` both when the item was processed and when the gate
    /// rejected it.
    pub async fn process(&self, item: &T) -> Result<(), PolicyEngineError> {
        if !self.gate(item) {
            return Ok(());
        }

        let started = ProcessingStarted {
            engine: &self.name,
            strategy: self.runner.strategy().as_str(),
            processor_count: self.runner.len(),
        };
        let span = started.span("process");

        async {
            started.log();
            let start_time = Instant::now();

            self.runner.run(&self.name, item).await?;
            self.finalize(item).await?;

            ProcessingCompleted {
                engine: &self.name,
                strategy: self.runner.strategy().as_str(),
                duration: start_time.elapsed(),
            }
            .log();

            Ok(())
        }
        .instrument(span)
        .await
    }

    /// True when every input policy accepts the item. An empty set accepts everything.
    pub fn gate(&self, item: &T) -> bool {
        match self
            .input_policies
            .iter()
            .find(|policy| !policy.evaluate(item))
        {
            Some(rejecting) => {
                GateRejected {
                    engine: &self.name,
                    policy: rejecting.name(),
                }
                .log();
                false
            }
            None => true,
        }
    }

    async fn finalize(&self, item: &T) -> Result<(), PolicyEngineError> {
        let mut first_failure: Option<(String, anyhow::Error)> = None;
        let mut further_failures = 0;

        for policy in &self.output_policies {
            let Err(error) = policy.apply(item).await else {
                continue;
            };

            OutputPolicyFailed {
                engine: &self.name,
                policy: policy.name(),
                error: &*error,
            }
            .log();

            if first_failure.is_none() {
                first_failure = Some((policy.name().to_string(), error));
            } else {
                further_failures += 1;
            }

            if self.output_failure_policy == OutputFailurePolicy::StopOnFirst {
                break;
            }
        }

        match first_failure {
            Some((policy, source)) => Err(PolicyEngineError::OutputPolicyFailed {
                engine: self.name.clone(),
                policy,
                source,
                further_failures,
            }),
            None => Ok(()),
        }
    }
}

/// Lets a built engine serve as one processing unit of another engine.
#[async_trait]
impl<T: Send + Sync> AsyncProcessor<T> for PolicyEngine<T> {
    async fn process(&self, item: &T) -> anyhow::Result<()> {
        PolicyEngine::process(self, item).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<T> std::fmt::Debug for PolicyEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyEngine")
            .field("name", &self.name)
            .field("input_policy_count", &self.input_policies.len())
            .field("output_policy_count", &self.output_policies.len())
            .field("output_failure_policy", &self.output_failure_policy)
            .finish_non_exhaustive()
    }
}
