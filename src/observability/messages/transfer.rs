// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for remote transfer lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A transfer exchange is starting.
///
/// # Log Level
/// `info!` - Important operational event
pub struct TransferStarted<'a> {
    pub url: &'a str,
    pub port_name: &'a str,
    pub bytes: usize,
}

impl Display for TransferStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Transferring {} bytes to port '{}' at {}",
            self.bytes, self.port_name, self.url
        )
    }
}

impl StructuredLog for TransferStarted<'_> {
    fn log(&self) {
        tracing::info!(
            url = self.url,
            port_name = self.port_name,
            bytes = self.bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "transfer",
            span_name = name,
            url = self.url,
            port_name = self.port_name,
        )
    }
}

/// A transfer exchange completed and was confirmed by the remote side.
///
/// # Log Level
/// `info!` - Important operational event
pub struct TransferCompleted<'a> {
    pub url: &'a str,
    pub port_name: &'a str,
    pub bytes: usize,
    pub duration: std::time::Duration,
}

impl Display for TransferCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Transferred {} bytes to port '{}' at {} in {:?}",
            self.bytes, self.port_name, self.url, self.duration
        )
    }
}

impl StructuredLog for TransferCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            url = self.url,
            port_name = self.port_name,
            bytes = self.bytes,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "transfer_completed",
            span_name = name,
            url = self.url,
            port_name = self.port_name,
        )
    }
}

/// A transfer exchange failed; the unit is being penalized and routed to
/// failure.
///
/// # Log Level
/// `error!` - Recoverable, per-unit failure
pub struct TransferFailed<'a> {
    pub url: &'a str,
    pub port_name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for TransferFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Transfer to port '{}' at {} failed: {}",
            self.port_name, self.url, self.error
        )
    }
}

impl StructuredLog for TransferFailed<'_> {
    fn log(&self) {
        tracing::error!(
            url = self.url,
            port_name = self.port_name,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "transfer_failed",
            span_name = name,
            url = self.url,
            port_name = self.port_name,
        )
    }
}
