// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Host adapter: drives one processor over an in-memory unit queue.
//!
//! `FlowRunner` owns what the surrounding pipeline engine would otherwise
//! provide: the inbound queue, the process context built from configured
//! properties, and the session whose buffered emissions it commits after each
//! invocation. It validates the processor's required properties up front, so
//! configuration errors surface before any unit is processed. The same
//! adapter backs the CLI demo and the integration tests.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::ValidationError;
use crate::flowfile::{FlowUnit, Relationship};
use crate::session::{ProcessContext, ProcessSession, Transmission};
use crate::traits::Processor;

pub struct FlowRunner {
    processor: Arc<dyn Processor>,
    context: ProcessContext,
    session: ProcessSession,
}

impl FlowRunner {
    /// Build a runner for one processor with the given property values.
    ///
    /// Fails with the full list of validation errors when a required
    /// property is missing or blank.
    pub fn new(
        processor: Arc<dyn Processor>,
        properties: HashMap<String, String>,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        for &property in processor.required_properties() {
            match properties.get(property) {
                None => errors.push(ValidationError::MissingRequiredProperty {
                    processor_id: processor.name().to_string(),
                    property: property.to_string(),
                }),
                Some(value) if value.trim().is_empty() => {
                    errors.push(ValidationError::EmptyRequiredProperty {
                        processor_id: processor.name().to_string(),
                        property: property.to_string(),
                    })
                }
                Some(_) => {}
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            processor,
            context: ProcessContext::new(properties),
            session: ProcessSession::new(),
        })
    }

    /// Make a unit available for the next invocation.
    pub fn enqueue(&mut self, content: impl Into<Vec<u8>>, attributes: HashMap<String, String>) {
        self.session
            .enqueue(FlowUnit::new(content.into(), attributes));
    }

    /// Trigger the processor once and commit whatever it emitted.
    pub async fn run_once(&mut self) {
        self.processor
            .on_trigger(&self.context, &mut self.session)
            .await;
        self.session.commit();
    }

    /// Trigger the processor until the inbound queue is drained.
    pub async fn run(&mut self) {
        while self.session.queued() > 0 {
            let before = self.session.queued();
            self.run_once().await;
            if self.session.queued() >= before {
                break; // the processor is not consuming; avoid spinning
            }
        }
    }

    pub fn processor(&self) -> &Arc<dyn Processor> {
        &self.processor
    }

    /// Committed units routed to the given relationship, in emission order.
    pub fn transferred(&self, relationship: Relationship) -> Vec<&FlowUnit> {
        self.session.transferred(relationship)
    }

    pub fn transfer_count(&self, relationship: Relationship) -> usize {
        self.session.transfer_count(relationship)
    }

    /// All committed emissions, in emission order.
    pub fn transmissions(&self) -> &[Transmission] {
        self.session.committed()
    }

    /// Drain the committed emissions, handing them to the caller.
    pub fn take_transmissions(&mut self) -> Vec<Transmission> {
        self.session.take_committed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::fan_out_by_attribute::{self, FanOutByAttribute};

    fn properties(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_required_property_fails_construction() {
        let result = FlowRunner::new(
            Arc::new(FanOutByAttribute::new()),
            properties(&[("source_attribute", "list_of_things")]),
        );
        let errors = result.err().expect("construction should fail");
        assert_eq!(
            errors,
            vec![ValidationError::MissingRequiredProperty {
                processor_id: "fan_out_by_attribute".to_string(),
                property: "output_attribute".to_string(),
            }]
        );
    }

    #[test]
    fn blank_required_property_fails_construction() {
        let result = FlowRunner::new(
            Arc::new(FanOutByAttribute::new()),
            properties(&[("source_attribute", "list_of_things"), ("output_attribute", " ")]),
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn run_drains_the_queue() {
        let mut runner = FlowRunner::new(
            Arc::new(FanOutByAttribute::new()),
            properties(&[
                ("source_attribute", "list_of_things"),
                ("output_attribute", "thing"),
            ]),
        )
        .unwrap();

        for value in ["a,b", "c"] {
            runner.enqueue(
                b"content".to_vec(),
                properties(&[("list_of_things", value)]),
            );
        }
        runner.run().await;

        assert_eq!(
            runner.transfer_count(fan_out_by_attribute::REL_DERIVED_SUCCESS),
            3
        );
        assert_eq!(runner.transfer_count(fan_out_by_attribute::REL_ORIGINAL), 2);
    }

    #[tokio::test]
    async fn run_on_empty_queue_is_a_no_op() {
        let mut runner = FlowRunner::new(
            Arc::new(FanOutByAttribute::new()),
            properties(&[
                ("source_attribute", "list_of_things"),
                ("output_attribute", "thing"),
            ]),
        )
        .unwrap();

        runner.run().await;
        assert!(runner.transmissions().is_empty());
    }
}
