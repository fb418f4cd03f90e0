// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod pipeline;
pub(crate) mod runner;

pub use pipeline::{PolicyEngine, DEFAULT_ENGINE_NAME};
pub use runner::Strategy;
