// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::ProcessorConfig;
use crate::errors::ProcessorFactoryError;
use crate::processors::{fan_out_by_attribute, remote_put, FanOutByAttribute, RemotePut};
use crate::traits::Processor;
use crate::transfer::GrpcTransferClient;

/// Factory for creating processor instances from configuration.
pub struct ProcessorFactory;

impl ProcessorFactory {
    /// Create a processor instance from configuration.
    ///
    /// The `processor` field in the config determines which implementation to
    /// create:
    /// - "fan_out_by_attribute" -> FanOutByAttribute
    /// - "remote_put" -> RemotePut with the gRPC transfer client
    pub fn create_processor(
        config: &ProcessorConfig,
    ) -> Result<Arc<dyn Processor>, ProcessorFactoryError> {
        match config.processor.as_str() {
            "fan_out_by_attribute" => Ok(Arc::new(FanOutByAttribute::new())),
            "remote_put" => Ok(Arc::new(RemotePut::new(Arc::new(GrpcTransferClient::new())))),
            _ => Err(ProcessorFactoryError::UnknownProcessor {
                processor_id: config.id.clone(),
                kind: config.processor.clone(),
            }),
        }
    }

    /// Required property names for a processor kind, or `None` when the kind
    /// is unknown. Used by configuration validation before instantiation.
    pub fn required_properties(kind: &str) -> Option<&'static [&'static str]> {
        match kind {
            "fan_out_by_attribute" => Some(fan_out_by_attribute::REQUIRED_PROPERTIES),
            "remote_put" => Some(remote_put::REQUIRED_PROPERTIES),
            _ => None,
        }
    }

    /// List all available processor implementations.
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["fan_out_by_attribute", "remote_put"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(id: &str, kind: &str) -> ProcessorConfig {
        ProcessorConfig {
            id: id.to_string(),
            processor: kind.to_string(),
            properties: HashMap::new(),
        }
    }

    #[test]
    fn creates_known_processors() {
        for kind in ProcessorFactory::list_available_implementations() {
            let processor = ProcessorFactory::create_processor(&config("test", kind))
                .unwrap_or_else(|e| panic!("failed to create '{}': {}", kind, e));
            assert_eq!(processor.name(), kind);
            assert!(!processor.relationships().is_empty());
        }
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let result = ProcessorFactory::create_processor(&config("test", "does_not_exist"));
        let error = result.err().expect("expected factory error");
        assert!(error.to_string().contains("does_not_exist"));
    }

    #[test]
    fn required_properties_cover_every_implementation() {
        for kind in ProcessorFactory::list_available_implementations() {
            let required = ProcessorFactory::required_properties(kind)
                .unwrap_or_else(|| panic!("no required properties for '{}'", kind));
            assert!(!required.is_empty());
        }
        assert!(ProcessorFactory::required_properties("does_not_exist").is_none());
    }
}
