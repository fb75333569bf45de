// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main configuration structure for a flow.
///
/// This struct represents a set of processor instances and the properties
/// each runs with. It is typically loaded from a YAML configuration file.
///
/// # Fields
/// * `processors` - Vector of processor configurations
///
/// # Example
/// ```yaml
/// processors:
///   - id: "fan_out"
///     processor: fan_out_by_attribute
///     properties:
///       source_attribute: list_of_things
///       output_attribute: thing
/// ```
#[derive(Debug, Deserialize)]
pub struct FlowConfig {
    pub processors: Vec<ProcessorConfig>,
}

/// Configuration for a single processor instance.
///
/// # Fields
/// * `id` - Unique identifier for this processor instance
/// * `processor` - Implementation name resolved by the processor factory
/// * `properties` - Property values; may contain `${attribute}` expressions
///   evaluated against the unit being processed
///
/// # Example
/// ```yaml
/// id: "put_remote"
/// processor: remote_put
/// properties:
///   remote_url: "http://${destination}:8080"
///   remote_port_name: intake
///   use_compression: "true"
/// ```
#[derive(Debug, Deserialize)]
pub struct ProcessorConfig {
    pub id: String,
    pub processor: String,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

/// Load a flow config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FlowConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let cfg: FlowConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a flow config from a YAML file
///
/// This function loads the configuration and validates every processor entry
/// (known implementation, required properties present and non-empty) before
/// anything is instantiated.
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
) -> Result<FlowConfig, Box<dyn std::error::Error>> {
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_flow_config(&cfg) {
        let error_messages: Vec<String> =
            validation_errors.iter().map(|e| e.to_string()).collect();
        let combined_error = format!(
            "Configuration validation failed:\n{}",
            error_messages.join("\n")
        );
        return Err(combined_error.into());
    }

    Ok(cfg)
}
