// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Process session: the transactional boundary between a processor and the
//! host pipeline.
//!
//! A session owns the inbound unit queue and buffers every emission a
//! processor makes during one invocation. Nothing becomes visible downstream
//! until [`ProcessSession::commit`] runs; [`ProcessSession::rollback`]
//! discards units cloned during the invocation and returns polled originals
//! to the queue. This keeps processors side-effect-free up to commit and
//! rules out a partially visible mix of outcomes for a single input unit.

mod context;

pub use context::ProcessContext;

use std::collections::{HashSet, VecDeque};

use crate::flowfile::{FlowUnit, Relationship};
use crate::observability::messages::session::{SessionCommitted, SessionRolledBack};
use crate::observability::messages::StructuredLog;

/// One routed emission: a unit bound for a named relationship.
#[derive(Debug)]
pub struct Transmission {
    pub unit: FlowUnit,
    pub relationship: Relationship,
}

/// Transactional unit queue and emission buffer for processor invocations.
#[derive(Debug, Default)]
pub struct ProcessSession {
    input: VecDeque<FlowUnit>,
    pending: Vec<Transmission>,
    committed: Vec<Transmission>,
    cloned_ids: HashSet<u64>,
}

impl ProcessSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a unit available for processing.
    pub fn enqueue(&mut self, unit: FlowUnit) {
        self.input.push_back(unit);
    }

    /// Number of units waiting to be processed.
    pub fn queued(&self) -> usize {
        self.input.len()
    }

    /// Non-blocking poll for the next unit. `None` means an idle tick.
    pub fn get(&mut self) -> Option<FlowUnit> {
        self.input.pop_front()
    }

    /// Produce a derived unit: shared content, independent attribute copy,
    /// fresh identity. The clone is tracked so a rollback can discard it.
    pub fn clone_unit(&mut self, unit: &FlowUnit) -> FlowUnit {
        let copy = unit.derived_copy();
        self.cloned_ids.insert(copy.id());
        copy
    }

    /// Mark a unit so the host's redelivery policy delays its retry.
    pub fn penalize(&mut self, mut unit: FlowUnit) -> FlowUnit {
        unit.penalize();
        unit
    }

    /// Route a unit to a relationship. The unit is terminal once emitted;
    /// taking it by value enforces that no further mutation can occur.
    pub fn transfer(&mut self, unit: FlowUnit, relationship: Relationship) {
        self.pending.push(Transmission { unit, relationship });
    }

    /// Make all buffered emissions of this invocation visible, in emission
    /// order.
    pub fn commit(&mut self) {
        if !self.pending.is_empty() {
            SessionCommitted {
                transmissions: self.pending.len(),
            }
            .log();
        }
        self.committed.append(&mut self.pending);
        self.cloned_ids.clear();
    }

    /// Abort the invocation: derived clones are dropped, polled originals
    /// return to the head of the queue in their original order.
    pub fn rollback(&mut self) {
        let mut requeued = 0usize;
        let mut discarded = 0usize;
        for transmission in self.pending.drain(..).rev() {
            if self.cloned_ids.contains(&transmission.unit.id()) {
                discarded += 1;
            } else {
                self.input.push_front(transmission.unit);
                requeued += 1;
            }
        }
        self.cloned_ids.clear();
        SessionRolledBack {
            requeued,
            discarded,
        }
        .log();
    }

    /// All committed emissions so far, in emission order.
    pub fn committed(&self) -> &[Transmission] {
        &self.committed
    }

    /// Committed units routed to the given relationship, in emission order.
    pub fn transferred(&self, relationship: Relationship) -> Vec<&FlowUnit> {
        self.committed
            .iter()
            .filter(|t| t.relationship == relationship)
            .map(|t| &t.unit)
            .collect()
    }

    pub fn transfer_count(&self, relationship: Relationship) -> usize {
        self.committed
            .iter()
            .filter(|t| t.relationship == relationship)
            .count()
    }

    /// Drain the committed emissions, handing them to the host.
    pub fn take_committed(&mut self) -> Vec<Transmission> {
        std::mem::take(&mut self.committed)
    }
}
