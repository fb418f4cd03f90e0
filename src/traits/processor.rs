// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

/// A synchronous unit of work that advances an item.
///
/// Processors receive the item by shared reference. Any state they change must
/// live behind interior mutability owned by the item itself.
pub trait Processor<T>: Send + Sync {
    fn process(&self, item: &T) -> anyhow::Result<()>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<T, F> Processor<T> for F
where
    F: Fn(&T) -> anyhow::Result<()> + Send + Sync,
{
    fn process(&self, item: &T) -> anyhow::Result<()> {
        self(item)
    }
}

/// An asynchronous unit of work that advances an item.
///
/// A built [`PolicyEngine`](crate::engine::PolicyEngine) implements this trait,
/// which is how engines nest inside other engines.
#[async_trait]
pub trait AsyncProcessor<T>: Send + Sync {
    async fn process(&self, item: &T) -> anyhow::Result<()>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Increment;

    impl Processor<AtomicUsize> for Increment {
        fn process(&self, item: &AtomicUsize) -> anyhow::Result<()> {
            item.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_closure_is_a_processor() {
        let double = |item: &AtomicUsize| -> anyhow::Result<()> {
            let current = item.load(Ordering::SeqCst);
            item.store(current * 2, Ordering::SeqCst);
            Ok(())
        };

        let item = AtomicUsize::new(3);
        Processor::process(&double, &item).unwrap();
        assert_eq!(item.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_default_name_is_type_name() {
        assert!(Increment.name().ends_with("Increment"));
    }
}
