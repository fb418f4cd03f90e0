// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Staged construction of a [`PolicyEngine`].
//!
//! Each stage is a separate type that is consumed by value and only exposes the
//! next legal step, so a pipeline is always configured in the order
//! input policies → exactly one processor strategy → output policies → build.
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use policy_engine::builder::PolicyEngineBuilder;
//! use policy_engine::traits::{InputPolicy, Processor};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let below_ten: Arc<dyn InputPolicy<AtomicU32>> =
//!     Arc::new(|n: &AtomicU32| n.load(Ordering::SeqCst) < 10);
//! let increment: Arc<dyn Processor<AtomicU32>> = Arc::new(|n: &AtomicU32| -> anyhow::Result<()> {
//!     n.fetch_add(1, Ordering::SeqCst);
//!     Ok(())
//! });
//!
//! let engine = PolicyEngineBuilder::configure()
//!     .with_input_policies(vec![below_ten])
//!     .with_processors(vec![increment])?
//!     .with_output_policies(vec![])
//!     .named("counter")
//!     .build();
//!
//! let item = AtomicU32::new(1);
//! engine.process(&item).await?;
//! assert_eq!(item.load(Ordering::SeqCst), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Selecting two processor strategies does not compile:
//!
//! ```compile_fail
//! use std::sync::Arc;
//! use policy_engine::builder::PolicyEngineBuilder;
//! use policy_engine::traits::Processor;
//!
//! let noop: Arc<dyn Processor<u32>> = Arc::new(|_: &u32| -> anyhow::Result<()> { Ok(()) });
//! let _ = PolicyEngineBuilder::configure()
//!     .with_input_policies(vec![])
//!     .with_processors(vec![noop.clone()])
//!     .unwrap()
//!     .with_processors(vec![noop]);
//! ```
//!
//! Neither does building without a processor stage:
//!
//! ```compile_fail
//! use policy_engine::builder::PolicyEngineBuilder;
//!
//! let _ = PolicyEngineBuilder::<u32>::configure()
//!     .with_input_policies(vec![])
//!     .build();
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::config::EngineOptions;
use crate::engine::runner::ProcessorRunner;
use crate::engine::PolicyEngine;
use crate::errors::BuildError;
use crate::traits::{AsyncProcessor, InputPolicy, OutputPolicy, Processor};

/// Entry point of the staged builder.
pub struct PolicyEngineBuilder<T>(PhantomData<fn(&T)>);

impl<T: Send + Sync> PolicyEngineBuilder<T> {
    pub fn configure() -> InputStage<T> {
        InputStage {
            _item: PhantomData,
        }
    }
}

/// First stage: the gate.
pub struct InputStage<T> {
    _item: PhantomData<fn(&T)>,
}

impl<T: Send + Sync> InputStage<T> {
    /// Input policies are evaluated in the given order, so cheap or selective
    /// policies belong first. An empty collection passes every item.
    pub fn with_input_policies(
        self,
        input_policies: Vec<Arc<dyn InputPolicy<T>>>,
    ) -> ProcessorStage<T> {
        ProcessorStage { input_policies }
    }
}

/// Second stage: exactly one processor strategy.
pub struct ProcessorStage<T> {
    input_policies: Vec<Arc<dyn InputPolicy<T>>>,
}

impl<T: Send + Sync> ProcessorStage<T> {
    /// Synchronous processors run one after another in the given order.
    pub fn with_processors(
        self,
        processors: Vec<Arc<dyn Processor<T>>>,
    ) -> Result<OutputStage<T>, BuildError> {
        self.with_runner(ProcessorRunner::Sequential(processors))
    }

    /// Asynchronous processors run one after another, each awaited before the next.
    pub fn with_async_processors(
        self,
        processors: Vec<Arc<dyn AsyncProcessor<T>>>,
    ) -> Result<OutputStage<T>, BuildError> {
        self.with_runner(ProcessorRunner::SequentialAsync(processors))
    }

    /// Asynchronous processors run concurrently against the same item.
    ///
    /// Parallel processors must touch disjoint parts of the item or coordinate
    /// among themselves; no ordering between their writes is guaranteed.
    pub fn with_parallel_processors(
        self,
        processors: Vec<Arc<dyn AsyncProcessor<T>>>,
    ) -> Result<OutputStage<T>, BuildError> {
        self.with_runner(ProcessorRunner::Parallel(processors))
    }

    fn with_runner(self, runner: ProcessorRunner<T>) -> Result<OutputStage<T>, BuildError> {
        if runner.is_empty() {
            return Err(BuildError::NoProcessors {
                strategy: runner.strategy(),
            });
        }

        Ok(OutputStage {
            input_policies: self.input_policies,
            runner,
        })
    }
}

/// Third stage: post-processing actions.
pub struct OutputStage<T> {
    input_policies: Vec<Arc<dyn InputPolicy<T>>>,
    runner: ProcessorRunner<T>,
}

impl<T: Send + Sync> OutputStage<T> {
    pub fn with_output_policies(
        self,
        output_policies: Vec<Arc<dyn OutputPolicy<T>>>,
    ) -> FinalStage<T> {
        FinalStage {
            input_policies: self.input_policies,
            runner: self.runner,
            output_policies,
            options: EngineOptions::default(),
        }
    }
}

/// Fully configured pipeline, ready to build.
pub struct FinalStage<T> {
    input_policies: Vec<Arc<dyn InputPolicy<T>>>,
    runner: ProcessorRunner<T>,
    output_policies: Vec<Arc<dyn OutputPolicy<T>>>,
    options: EngineOptions,
}

impl<T: Send + Sync> FinalStage<T> {
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.options.name = Some(name.into());
        self
    }

    /// Apply loaded options. A name already set with [`named`](Self::named)
    /// is kept when the options carry none.
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        let name = options.name.or(self.options.name.take());
        self.options = EngineOptions { name, ..options };
        self
    }

    pub fn build(self) -> PolicyEngine<T> {
        PolicyEngine::new(
            self.input_policies,
            self.runner,
            self.output_policies,
            self.options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFailurePolicy;
    use crate::engine::{Strategy, DEFAULT_ENGINE_NAME};

    fn noop() -> Arc<dyn Processor<u32>> {
        Arc::new(|_: &u32| -> anyhow::Result<()> { Ok(()) })
    }

    #[test]
    fn test_empty_processor_stage_is_rejected() {
        let sync = PolicyEngineBuilder::<u32>::configure()
            .with_input_policies(vec![])
            .with_processors(vec![]);
        assert_eq!(
            sync.err(),
            Some(BuildError::NoProcessors {
                strategy: Strategy::Sequential
            })
        );

        let parallel = PolicyEngineBuilder::<u32>::configure()
            .with_input_policies(vec![])
            .with_parallel_processors(vec![]);
        assert_eq!(
            parallel.err(),
            Some(BuildError::NoProcessors {
                strategy: Strategy::Parallel
            })
        );
    }

    #[test]
    fn test_build_freezes_strategy_and_defaults() {
        let engine = PolicyEngineBuilder::configure()
            .with_input_policies(vec![])
            .with_processors(vec![noop()])
            .unwrap()
            .with_output_policies(vec![])
            .build();

        assert_eq!(engine.strategy(), Strategy::Sequential);
        assert_eq!(engine.name(), DEFAULT_ENGINE_NAME);
        assert_eq!(engine.output_failure_policy(), OutputFailurePolicy::RunAll);
    }

    #[test]
    fn test_named_survives_options_without_name() {
        let engine = PolicyEngineBuilder::configure()
            .with_input_policies(vec![])
            .with_processors(vec![noop()])
            .unwrap()
            .with_output_policies(vec![])
            .named("inner")
            .with_options(EngineOptions {
                name: None,
                output_failure_policy: OutputFailurePolicy::StopOnFirst,
            })
            .build();

        assert_eq!(engine.name(), "inner");
        assert_eq!(
            engine.output_failure_policy(),
            OutputFailurePolicy::StopOnFirst
        );
    }

    #[test]
    fn test_options_name_overrides() {
        let options = EngineOptions::from_yaml_str("name: from_options").unwrap();
        let engine = PolicyEngineBuilder::configure()
            .with_input_policies(vec![])
            .with_processors(vec![noop()])
            .unwrap()
            .with_output_policies(vec![])
            .named("inline")
            .with_options(options)
            .build();

        assert_eq!(engine.name(), "from_options");
    }
}
