// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for session commit and rollback events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Buffered emissions of one invocation became visible.
///
/// # Log Level
/// `debug!` - Routine per-invocation event
pub struct SessionCommitted {
    pub transmissions: usize,
}

impl Display for SessionCommitted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Session committed {} transmission(s)", self.transmissions)
    }
}

impl StructuredLog for SessionCommitted {
    fn log(&self) {
        tracing::debug!(transmissions = self.transmissions, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "session_commit",
            span_name = name,
            transmissions = self.transmissions,
        )
    }
}

/// An invocation was aborted; its emissions never became visible.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct SessionRolledBack {
    pub requeued: usize,
    pub discarded: usize,
}

impl Display for SessionRolledBack {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session rolled back: {} unit(s) requeued, {} derived unit(s) discarded",
            self.requeued, self.discarded
        )
    }
}

impl StructuredLog for SessionRolledBack {
    fn log(&self) {
        tracing::warn!(
            requeued = self.requeued,
            discarded = self.discarded,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "session_rollback",
            span_name = name,
            requeued = self.requeued,
            discarded = self.discarded,
        )
    }
}
