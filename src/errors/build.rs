// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while assembling an engine.

use thiserror::Error;

use crate::engine::Strategy;

/// The builder's stage types already rule out skipped, repeated, or reordered
/// stages. What remains checkable only at run time lands here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A processor stage was configured with an empty collection.
    #[error("{strategy} processor stage requires at least one processor")]
    NoProcessors { strategy: Strategy },
}
