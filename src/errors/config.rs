// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur during flow configuration validation.
///
/// All of these are fatal to scheduling the affected processor and are
/// reported before any unit is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two processor entries share the same id
    DuplicateProcessorId {
        /// The duplicate processor id
        processor_id: String,
    },
    /// A processor entry names an implementation that doesn't exist
    UnknownProcessor {
        /// The processor with the unknown implementation
        processor_id: String,
        /// The implementation name that couldn't be resolved
        kind: String,
    },
    /// A required property is absent from a processor's configuration
    MissingRequiredProperty {
        processor_id: String,
        property: String,
    },
    /// A required property is present but blank
    EmptyRequiredProperty {
        processor_id: String,
        property: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateProcessorId { processor_id } => {
                write!(f, "Duplicate processor id: '{}'", processor_id)
            }
            ValidationError::UnknownProcessor { processor_id, kind } => {
                write!(
                    f,
                    "Processor '{}' names implementation '{}' which does not exist",
                    processor_id, kind
                )
            }
            ValidationError::MissingRequiredProperty {
                processor_id,
                property,
            } => {
                write!(
                    f,
                    "Processor '{}' is missing required property '{}'",
                    processor_id, property
                )
            }
            ValidationError::EmptyRequiredProperty {
                processor_id,
                property,
            } => {
                write!(
                    f,
                    "Processor '{}' required property '{}' must not be empty",
                    processor_id, property
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
