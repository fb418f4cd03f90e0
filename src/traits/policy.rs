// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

/// A predicate deciding whether an item is eligible for processing.
///
/// Implementations must not change the item. An engine evaluates its input
/// policies in configured order and stops at the first `false`.
pub trait InputPolicy<T>: Send + Sync {
    fn evaluate(&self, item: &T) -> bool;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<T, F> InputPolicy<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn evaluate(&self, item: &T) -> bool {
        self(item)
    }
}

/// A side-effecting action run after an item has been processed.
///
/// Synchronous actions implement this by simply not awaiting anything.
#[async_trait]
pub trait OutputPolicy<T>: Send + Sync {
    async fn apply(&self, item: &T) -> anyhow::Result<()>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

#[async_trait]
impl<T, F> OutputPolicy<T> for F
where
    T: Sync,
    F: Fn(&T) -> anyhow::Result<()> + Send + Sync,
{
    async fn apply(&self, item: &T) -> anyhow::Result<()> {
        self(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_closure_is_an_input_policy() {
        let is_even = |n: &u32| n % 2 == 0;
        assert!(is_even.evaluate(&4));
        assert!(!is_even.evaluate(&5));
    }

    #[tokio::test]
    async fn test_closure_is_an_output_policy() {
        let mark = |flag: &AtomicBool| -> anyhow::Result<()> {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        };

        let flag = AtomicBool::new(false);
        mark.apply(&flag).await.unwrap();
        assert!(flag.load(Ordering::SeqCst));
    }
}
