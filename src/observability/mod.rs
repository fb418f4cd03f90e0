// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for engine construction and execution.
//!
//! Message types follow a struct-based pattern with a `Display` implementation
//! so log text lives in one place instead of scattered format strings.
//!
//! # Usage
//!
//! ```rust
//! use policy_engine::observability::messages::processor::ProcessorFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = ProcessorFailed {
//!     engine: "my_engine",
//!     processor: "my_processor",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
