// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod combinators;

pub use combinators::{And, Or, Xor};
