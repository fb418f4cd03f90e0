// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod builder;    // staged engine construction
pub mod config;     // engine options
pub mod demo;       // translation demo pipeline
pub mod engine;     // gate → process → finalize
pub mod errors;     // error handling
pub mod observability;
pub mod policies;   // boolean combinators
pub mod traits;     // capability abstractions
