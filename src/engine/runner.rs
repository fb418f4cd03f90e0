// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::future::join_all;
use std::fmt;
use std::sync::Arc;

use crate::errors::{BranchFailure, PolicyEngineError};
use crate::observability::messages::processor::{ParallelBranchesFailed, ProcessorFailed};
use crate::observability::messages::StructuredLog;
use crate::traits::{AsyncProcessor, Processor};

/// Execution strategy of an engine's processor stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Synchronous processors, one after another.
    Sequential,
    /// Asynchronous processors, each awaited before the next starts.
    SequentialAsync,
    /// Asynchronous processors started together and awaited as a set.
    Parallel,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::SequentialAsync => "sequential_async",
            Strategy::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The processor stage selected at build time. Exactly one shape per engine.
pub(crate) enum ProcessorRunner<T> {
    Sequential(Vec<Arc<dyn Processor<T>>>),
    SequentialAsync(Vec<Arc<dyn AsyncProcessor<T>>>),
    Parallel(Vec<Arc<dyn AsyncProcessor<T>>>),
}

impl<T: Send + Sync> ProcessorRunner<T> {
    pub(crate) fn strategy(&self) -> Strategy {
        match self {
            ProcessorRunner::Sequential(_) => Strategy::Sequential,
            ProcessorRunner::SequentialAsync(_) => Strategy::SequentialAsync,
            ProcessorRunner::Parallel(_) => Strategy::Parallel,
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            ProcessorRunner::Sequential(processors) => processors.len(),
            ProcessorRunner::SequentialAsync(processors) | ProcessorRunner::Parallel(processors) => {
                processors.len()
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run the configured processors against `item`.
    ///
    /// Sequential strategies stop at the first failure. The parallel strategy
    /// always lets every branch finish before reporting failures.
    pub(crate) async fn run(&self, engine: &str, item: &T) -> Result<(), PolicyEngineError> {
        match self {
            ProcessorRunner::Sequential(processors) => {
                for processor in processors {
                    processor
                        .process(item)
                        .map_err(|error| processor_failed(engine, processor.name(), error))?;
                }
                Ok(())
            }
            ProcessorRunner::SequentialAsync(processors) => {
                for processor in processors {
                    processor
                        .process(item)
                        .await
                        .map_err(|error| processor_failed(engine, processor.name(), error))?;
                }
                Ok(())
            }
            ProcessorRunner::Parallel(processors) => run_parallel(engine, processors, item).await,
        }
    }
}

async fn run_parallel<T: Send + Sync>(
    engine: &str,
    processors: &[Arc<dyn AsyncProcessor<T>>],
    item: &T,
) -> Result<(), PolicyEngineError> {
    let outcomes = join_all(processors.iter().map(|processor| processor.process(item))).await;

    let mut failures = Vec::new();
    let mut completed = Vec::new();
    for (processor, outcome) in processors.iter().zip(outcomes) {
        match outcome {
            Ok(()) => completed.push(processor.name().to_string()),
            Err(error) => {
                ProcessorFailed {
                    engine,
                    processor: processor.name(),
                    error: &*error,
                }
                .log();
                failures.push(BranchFailure {
                    processor: processor.name().to_string(),
                    error,
                });
            }
        }
    }

    if failures.is_empty() {
        return Ok(());
    }

    ParallelBranchesFailed {
        engine,
        failed: failures.len(),
        completed: completed.len(),
    }
    .log();

    Err(PolicyEngineError::ParallelProcessorsFailed {
        engine: engine.to_string(),
        failures,
        completed,
    })
}

fn processor_failed(engine: &str, processor: &str, error: anyhow::Error) -> PolicyEngineError {
    ProcessorFailed {
        engine,
        processor,
        error: &*error,
    }
    .log();

    PolicyEngineError::ProcessorFailed {
        engine: engine.to_string(),
        processor: processor.to_string(),
        source: error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    struct Counter {
        value: AtomicUsize,
        trace: Mutex<Vec<&'static str>>,
    }

    impl Counter {
        fn new(value: usize) -> Self {
            Self {
                value: AtomicUsize::new(value),
                trace: Mutex::new(Vec::new()),
            }
        }

        fn get(&self) -> usize {
            self.value.load(Ordering::SeqCst)
        }
    }

    struct Inc;
    struct Double;

    impl Processor<Counter> for Inc {
        fn process(&self, item: &Counter) -> anyhow::Result<()> {
            item.value.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    impl Processor<Counter> for Double {
        fn process(&self, item: &Counter) -> anyhow::Result<()> {
            let current = item.get();
            item.value.store(current * 2, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Records entry and exit around a sleep so interleaving is visible.
    struct Traced {
        label: &'static str,
        delay: Duration,
        fail: bool,
    }

    #[async_trait]
    impl AsyncProcessor<Counter> for Traced {
        async fn process(&self, item: &Counter) -> anyhow::Result<()> {
            item.trace.lock().unwrap().push(self.label);
            tokio::time::sleep(self.delay).await;
            item.trace.lock().unwrap().push(self.label);
            item.value.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("{} failed", self.label);
            }
            Ok(())
        }

        fn name(&self) -> &str {
            self.label
        }
    }

    fn traced(label: &'static str, delay_ms: u64, fail: bool) -> Arc<dyn AsyncProcessor<Counter>> {
        Arc::new(Traced {
            label,
            delay: Duration::from_millis(delay_ms),
            fail,
        })
    }

    #[tokio::test]
    async fn test_sequential_observes_prior_mutations() {
        let runner: ProcessorRunner<Counter> =
            ProcessorRunner::Sequential(vec![Arc::new(Inc), Arc::new(Double)]);
        let counter = Counter::new(1);

        runner.run("test", &counter).await.unwrap();
        assert_eq!(counter.get(), 4);
        assert_eq!(runner.strategy(), Strategy::Sequential);
    }

    #[tokio::test]
    async fn test_sequential_async_never_interleaves() {
        let runner = ProcessorRunner::SequentialAsync(vec![
            traced("a", 20, false),
            traced("b", 1, false),
        ]);
        let counter = Counter::new(0);

        runner.run("test", &counter).await.unwrap();
        assert_eq!(*counter.trace.lock().unwrap(), vec!["a", "a", "b", "b"]);
    }

    #[tokio::test]
    async fn test_sequential_async_stops_at_first_failure() {
        let runner = ProcessorRunner::SequentialAsync(vec![
            traced("a", 1, true),
            traced("b", 1, false),
        ]);
        let counter = Counter::new(0);

        let error = runner.run("seq", &counter).await.unwrap_err();
        match error {
            PolicyEngineError::ProcessorFailed {
                engine, processor, ..
            } => {
                assert_eq!(engine, "seq");
                assert_eq!(processor, "a");
            }
            other => panic!("Expected ProcessorFailed, got {:?}", other),
        }
        assert_eq!(counter.get(), 1);
    }

    #[tokio::test]
    async fn test_parallel_branches_overlap() {
        let runner = ProcessorRunner::Parallel(vec![
            traced("a", 30, false),
            traced("b", 30, false),
        ]);
        let counter = Counter::new(0);

        runner.run("test", &counter).await.unwrap();
        let trace = counter.trace.lock().unwrap().clone();
        // Both branches entered before either finished
        assert_eq!(&trace[..2], &["a", "b"]);
        assert_eq!(counter.get(), 2);
    }

    #[tokio::test]
    async fn test_parallel_failure_waits_for_all_branches() {
        let runner = ProcessorRunner::Parallel(vec![
            traced("fast_failure", 1, true),
            traced("slow_success", 30, false),
        ]);
        let counter = Counter::new(0);

        let error = runner.run("fan_out", &counter).await.unwrap_err();
        assert_eq!(counter.get(), 2);
        match error {
            PolicyEngineError::ParallelProcessorsFailed {
                failures, completed, ..
            } => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].processor, "fast_failure");
                assert_eq!(completed, vec!["slow_success".to_string()]);
            }
            other => panic!("Expected ParallelProcessorsFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::Sequential.to_string(), "sequential");
        assert_eq!(Strategy::SequentialAsync.to_string(), "sequential_async");
        assert_eq!(Strategy::Parallel.to_string(), "parallel");
    }
}
