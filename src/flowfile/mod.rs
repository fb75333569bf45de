// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Flow unit data model.
//!
//! A [`FlowUnit`] is one discrete record moving through the pipeline: an
//! immutable binary payload plus a mutable string-to-string attribute map.
//! Units have identity distinct from their content; two units may carry the
//! same bytes while remaining separately routable entities. Content is never
//! copied when a unit is duplicated, only the attribute map is.
//!
//! A [`Relationship`] is a named output label a processor emits units on. The
//! host wires downstream consumers against a processor's declared
//! relationship set.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_UNIT_ID: AtomicU64 = AtomicU64::new(1);

/// A named routing label a processor emits units on.
///
/// Each processor declares a constant set of relationships. Equality is by
/// name and description, both of which are `'static` so relationship sets can
/// live in consts next to the processor that owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relationship {
    pub name: &'static str,
    pub description: &'static str,
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// One discrete record flowing through the pipeline.
///
/// The content buffer is shared between a unit and any copies derived from
/// it; no component mutates content after creation, so sharing is safe. The
/// attribute map is owned per unit and independently mutable.
#[derive(Debug)]
pub struct FlowUnit {
    id: u64,
    content: Arc<[u8]>,
    attributes: HashMap<String, String>,
    penalized: bool,
}

impl FlowUnit {
    /// Create a unit with fresh identity from raw content and attributes.
    pub fn new(content: impl Into<Arc<[u8]>>, attributes: HashMap<String, String>) -> Self {
        Self {
            id: NEXT_UNIT_ID.fetch_add(1, Ordering::Relaxed),
            content: content.into(),
            attributes,
            penalized: false,
        }
    }

    /// Derive a copy of this unit: fresh identity, shared content buffer,
    /// deep-copied attribute map. The copy is independently mutable.
    pub fn derived_copy(&self) -> Self {
        Self {
            id: NEXT_UNIT_ID.fetch_add(1, Ordering::Relaxed),
            content: Arc::clone(&self.content),
            attributes: self.attributes.clone(),
            penalized: false,
        }
    }

    /// Process-unique identifier for this unit.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Handle to the shared content buffer.
    pub fn content_handle(&self) -> &Arc<[u8]> {
        &self.content
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    pub fn put_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Whether the unit has been penalized (its retry should be delayed by
    /// the host's redelivery policy).
    pub fn is_penalized(&self) -> bool {
        self.penalized
    }

    pub(crate) fn penalize(&mut self) {
        self.penalized = true;
    }
}
