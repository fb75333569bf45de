// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor execution and routing events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A list-valued attribute could not be parsed; the unit is being routed to
/// failure.
///
/// # Log Level
/// `error!` - Recoverable, per-unit failure
///
/// # Example
/// ```
/// use flowunit::observability::messages::processor::ListAttributeUnparseable;
/// use flowunit::observability::messages::StructuredLog;
///
/// let error = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad quoting");
/// let msg = ListAttributeUnparseable {
///     processor_id: "fan_out_by_attribute",
///     attribute: "list_of_things",
///     value: "\"lions,\"tigers\"",
///     error: &error,
/// };
/// msg.log();
/// ```
pub struct ListAttributeUnparseable<'a> {
    pub processor_id: &'a str,
    pub attribute: &'a str,
    pub value: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ListAttributeUnparseable<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' could not parse attribute '{}' value '{}': {}",
            self.processor_id, self.attribute, self.value, self.error
        )
    }
}

impl StructuredLog for ListAttributeUnparseable<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            attribute = self.attribute,
            value = self.value,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "list_parse_failure",
            span_name = name,
            processor_id = self.processor_id,
            attribute = self.attribute,
        )
    }
}

/// The configured source attribute is absent from the unit.
///
/// # Log Level
/// `error!` - Recoverable, per-unit failure
pub struct MissingSourceAttribute<'a> {
    pub processor_id: &'a str,
    pub attribute: &'a str,
}

impl Display for MissingSourceAttribute<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' found no attribute '{}' on the unit; routing to failure",
            self.processor_id, self.attribute
        )
    }
}

impl StructuredLog for MissingSourceAttribute<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            attribute = self.attribute,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "missing_source_attribute",
            span_name = name,
            processor_id = self.processor_id,
            attribute = self.attribute,
        )
    }
}

/// A fan-out completed: derived units emitted, original routed onward.
///
/// # Log Level
/// `debug!` - Routine per-unit event
pub struct FanOutCompleted<'a> {
    pub processor_id: &'a str,
    pub attribute: &'a str,
    pub derived: usize,
}

impl Display for FanOutCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' fanned attribute '{}' out into {} derived unit(s)",
            self.processor_id, self.attribute, self.derived
        )
    }
}

impl StructuredLog for FanOutCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            attribute = self.attribute,
            derived = self.derived,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "fan_out",
            span_name = name,
            processor_id = self.processor_id,
            derived = self.derived,
        )
    }
}
