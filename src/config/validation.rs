// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Flow configuration validation.
//!
//! Validation runs before any processor is instantiated and before any unit
//! is processed, so configuration mistakes surface as scheduling failures
//! rather than per-unit failures. Checks, in order:
//!
//! 1. **Uniqueness**: processor ids must be unique
//! 2. **Resolution**: every entry must name a known implementation
//! 3. **Required properties**: each implementation's required properties must
//!    be present and non-blank (a property holding an `${attribute}`
//!    expression counts as present; it is resolved per unit later)
//!
//! Every finding is also emitted through the observability sink as it is
//! discovered.

use std::collections::HashSet;

use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    DuplicateProcessorIdFound, RequiredPropertyMissing, UnknownProcessorKind,
};
use crate::observability::messages::StructuredLog;
use crate::processors::ProcessorFactory;

use super::FlowConfig;

/// Validate a flow configuration, collecting every error rather than
/// stopping at the first.
pub fn validate_flow_config(cfg: &FlowConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for processor in &cfg.processors {
        if !seen_ids.insert(processor.id.as_str()) {
            DuplicateProcessorIdFound {
                processor_id: &processor.id,
            }
            .log();
            errors.push(ValidationError::DuplicateProcessorId {
                processor_id: processor.id.clone(),
            });
        }

        let Some(required) = ProcessorFactory::required_properties(&processor.processor) else {
            UnknownProcessorKind {
                processor_id: &processor.id,
                kind: &processor.processor,
            }
            .log();
            errors.push(ValidationError::UnknownProcessor {
                processor_id: processor.id.clone(),
                kind: processor.processor.clone(),
            });
            continue;
        };

        for &property in required {
            match processor.properties.get(property) {
                None => {
                    RequiredPropertyMissing {
                        processor_id: &processor.id,
                        property,
                    }
                    .log();
                    errors.push(ValidationError::MissingRequiredProperty {
                        processor_id: processor.id.clone(),
                        property: property.to_string(),
                    });
                }
                Some(value) if value.trim().is_empty() => {
                    RequiredPropertyMissing {
                        processor_id: &processor.id,
                        property,
                    }
                    .log();
                    errors.push(ValidationError::EmptyRequiredProperty {
                        processor_id: processor.id.clone(),
                        property: property.to_string(),
                    });
                }
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
