// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading engine options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read options file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid engine options: {0}")]
    Parse(#[from] serde_yaml::Error),
}
