// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation errors.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A required property is missing or empty in the flow configuration.
///
/// # Log Level
/// `error!` - Configuration must be fixed before scheduling
pub struct RequiredPropertyMissing<'a> {
    pub processor_id: &'a str,
    pub property: &'a str,
}

impl Display for RequiredPropertyMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' is missing required property '{}'",
            self.processor_id, self.property
        )
    }
}

impl StructuredLog for RequiredPropertyMissing<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            property = self.property,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation",
            span_name = name,
            processor_id = self.processor_id,
            property = self.property,
        )
    }
}

/// A processor entry names an unknown implementation.
///
/// # Log Level
/// `error!` - Configuration must be fixed before scheduling
pub struct UnknownProcessorKind<'a> {
    pub processor_id: &'a str,
    pub kind: &'a str,
}

impl Display for UnknownProcessorKind<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' names unknown implementation '{}'",
            self.processor_id, self.kind
        )
    }
}

impl StructuredLog for UnknownProcessorKind<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            kind = self.kind,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation",
            span_name = name,
            processor_id = self.processor_id,
            kind = self.kind,
        )
    }
}

/// Two processor entries share the same id.
///
/// # Log Level
/// `error!` - Configuration must be fixed before scheduling
pub struct DuplicateProcessorIdFound<'a> {
    pub processor_id: &'a str,
}

impl Display for DuplicateProcessorIdFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate processor id '{}'", self.processor_id)
    }
}

impl StructuredLog for DuplicateProcessorIdFound<'_> {
    fn log(&self) {
        tracing::error!(processor_id = self.processor_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation",
            span_name = name,
            processor_id = self.processor_id,
        )
    }
}
