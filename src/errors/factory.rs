// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for processor instantiation.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building processors from configuration
#[derive(Debug)]
pub enum ProcessorFactoryError {
    /// The configured implementation name is not known to the factory
    UnknownProcessor { processor_id: String, kind: String },
}

impl fmt::Display for ProcessorFactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessorFactoryError::UnknownProcessor { processor_id, kind } => {
                write!(
                    f,
                    "Unknown processor implementation '{}' for processor '{}'",
                    kind, processor_id
                )
            }
        }
    }
}

impl Error for ProcessorFactoryError {}
