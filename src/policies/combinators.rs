// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Boolean composition of input policies.
//!
//! Each combinator owns an ordered, fixed list of child policies and is itself
//! an [`InputPolicy`], so combinators nest freely:
//!
//! ```
//! use std::sync::Arc;
//! use policy_engine::policies::{And, Or};
//! use policy_engine::traits::InputPolicy;
//!
//! let positive: Arc<dyn InputPolicy<i32>> = Arc::new(|n: &i32| *n > 0);
//! let even: Arc<dyn InputPolicy<i32>> = Arc::new(|n: &i32| n % 2 == 0);
//! let large: Arc<dyn InputPolicy<i32>> = Arc::new(|n: &i32| *n > 100);
//!
//! let policy: Or<i32> = Or::new(vec![
//!     Arc::new(And::new(vec![positive, even])),
//!     large,
//! ]);
//!
//! assert!(policy.evaluate(&4));
//! assert!(!policy.evaluate(&3));
//! ```

use std::sync::Arc;

use crate::traits::InputPolicy;

/// True iff every child is true. Short-circuits on the first `false`.
/// An empty `And` is true.
pub struct And<T> {
    policies: Vec<Arc<dyn InputPolicy<T>>>,
}

impl<T> And<T> {
    pub fn new(policies: Vec<Arc<dyn InputPolicy<T>>>) -> Self {
        Self { policies }
    }
}

impl<T> InputPolicy<T> for And<T> {
    fn evaluate(&self, item: &T) -> bool {
        self.policies.iter().all(|policy| policy.evaluate(item))
    }

    fn name(&self) -> &str {
        "And"
    }
}

/// True iff at least one child is true. Short-circuits on the first `true`.
/// An empty `Or` is false.
pub struct Or<T> {
    policies: Vec<Arc<dyn InputPolicy<T>>>,
}

impl<T> Or<T> {
    pub fn new(policies: Vec<Arc<dyn InputPolicy<T>>>) -> Self {
        Self { policies }
    }
}

impl<T> InputPolicy<T> for Or<T> {
    fn evaluate(&self, item: &T) -> bool {
        self.policies.iter().any(|policy| policy.evaluate(item))
    }

    fn name(&self) -> &str {
        "Or"
    }
}

/// True iff exactly one child is true.
///
/// Every child is evaluated. With more than two children this is "exactly one",
/// not pairwise parity.
pub struct Xor<T> {
    policies: Vec<Arc<dyn InputPolicy<T>>>,
}

impl<T> Xor<T> {
    pub fn new(policies: Vec<Arc<dyn InputPolicy<T>>>) -> Self {
        Self { policies }
    }
}

impl<T> InputPolicy<T> for Xor<T> {
    fn evaluate(&self, item: &T) -> bool {
        let passed = self
            .policies
            .iter()
            .map(|policy| policy.evaluate(item))
            .filter(|passed| *passed)
            .count();

        passed == 1
    }

    fn name(&self) -> &str {
        "Xor"
    }
}
