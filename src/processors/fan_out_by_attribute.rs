// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fan-out-by-attribute processor.
//!
//! Duplicates, clones or fans a unit out according to a comma-separated list
//! held in one of its attributes. Combined with attribute expressions in the
//! configuration this can address units to multiple destinations named in a
//! dynamic attribute, a query result set, etc.

use async_trait::async_trait;

use crate::flowfile::Relationship;
use crate::observability::messages::processor::{
    FanOutCompleted, ListAttributeUnparseable, MissingSourceAttribute,
};
use crate::observability::messages::StructuredLog;
use crate::record;
use crate::session::{ProcessContext, ProcessSession};
use crate::traits::Processor;

/// Name of the attribute holding the delimited list. Supports attribute
/// expressions. Required.
pub const PROP_SOURCE_ATTRIBUTE: &str = "source_attribute";

/// Name of the attribute written on each derived unit. Supports attribute
/// expressions. Required.
pub const PROP_OUTPUT_ATTRIBUTE: &str = "output_attribute";

pub const REL_DERIVED_SUCCESS: Relationship = Relationship {
    name: "derived-success",
    description: "One derived unit per list element is routed to this relationship",
};

pub const REL_ORIGINAL: Relationship = Relationship {
    name: "original",
    description: "The original unit is routed here, unmodified, after a successful fan-out",
};

pub const REL_FAILURE: Relationship = Relationship {
    name: "failure",
    description: "Units whose list attribute is absent or cannot be parsed are routed here",
};

pub const RELATIONSHIPS: &[Relationship] = &[REL_DERIVED_SUCCESS, REL_ORIGINAL, REL_FAILURE];

pub const REQUIRED_PROPERTIES: &[&str] = &[PROP_SOURCE_ATTRIBUTE, PROP_OUTPUT_ATTRIBUTE];

/// Fans one unit out into N derived units, one per element of a
/// delimited-list attribute value.
///
/// Each derived unit shares the original's content, drops the source
/// attribute and carries the output attribute set to its element. Derived
/// units are emitted in element order on `derived-success`; the original
/// follows, untouched, on `original`. A malformed list value or an absent
/// source attribute routes the original, untouched, to `failure` with zero
/// derived units. An attribute that is present but empty parses to zero
/// elements: no derived units, original still succeeds.
pub struct FanOutByAttribute;

impl FanOutByAttribute {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FanOutByAttribute {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Processor for FanOutByAttribute {
    async fn on_trigger(&self, context: &ProcessContext, session: &mut ProcessSession) {
        let Some(unit) = session.get() else {
            return;
        };

        let source_attribute = context
            .evaluated_property(PROP_SOURCE_ATTRIBUTE, &unit)
            .unwrap_or_default();
        let output_attribute = context
            .evaluated_property(PROP_OUTPUT_ATTRIBUTE, &unit)
            .unwrap_or_default();

        let raw = unit.attribute(&source_attribute).map(str::to_owned);
        let elements = match raw {
            None => {
                MissingSourceAttribute {
                    processor_id: self.name(),
                    attribute: &source_attribute,
                }
                .log();
                session.transfer(unit, REL_FAILURE);
                return;
            }
            Some(raw) => match record::parse_record_set(&raw) {
                Ok(elements) => elements,
                Err(error) => {
                    ListAttributeUnparseable {
                        processor_id: self.name(),
                        attribute: &source_attribute,
                        value: &raw,
                        error: &error,
                    }
                    .log();
                    session.transfer(unit, REL_FAILURE);
                    return;
                }
            },
        };

        let derived = elements.len();
        for element in elements {
            let mut copy = session.clone_unit(&unit);
            copy.remove_attribute(&source_attribute);
            copy.put_attribute(output_attribute.clone(), element);
            session.transfer(copy, REL_DERIVED_SUCCESS);
        }

        FanOutCompleted {
            processor_id: self.name(),
            attribute: &source_attribute,
            derived,
        }
        .log();

        session.transfer(unit, REL_ORIGINAL);
    }

    fn name(&self) -> &'static str {
        "fan_out_by_attribute"
    }

    fn relationships(&self) -> &'static [Relationship] {
        RELATIONSHIPS
    }

    fn required_properties(&self) -> &'static [&'static str] {
        REQUIRED_PROPERTIES
    }
}
