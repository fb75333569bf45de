// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor implementations.
//!
//! Two processors ship with the crate:
//!
//! - [`FanOutByAttribute`] duplicates a unit once per element of a
//!   comma-separated list held in one of its attributes, with three-way
//!   outcome routing (`derived-success` / `original` / `failure`).
//! - [`RemotePut`] streams a unit's content and attributes to a remote
//!   endpoint through a [`crate::transfer::TransferClient`], routing to
//!   `success` or `failure`.
//!
//! Instances are created from configuration through [`ProcessorFactory`].

pub mod factory;
pub mod fan_out_by_attribute;
pub mod remote_put;

#[cfg(test)]
mod integration_tests;

pub use factory::ProcessorFactory;
pub use fan_out_by_attribute::FanOutByAttribute;
pub use remote_put::RemotePut;
