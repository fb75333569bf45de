// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit the same event through `tracing` with its fields
//! attached, so log aggregation can filter on fields rather than parse text.

pub mod processor;
pub mod session;
pub mod transfer;
pub mod validation;

use tracing::Span;

/// Emit a message through `tracing` with structured fields.
pub trait StructuredLog {
    /// Log the message at its designated level.
    fn log(&self);

    /// Create a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
