// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // flow configuration + validation
pub mod errors;     // error handling
pub mod expression; // attribute expression evaluation
pub mod flowfile;   // flow unit model
pub mod observability;
pub mod processors; // processor implementations
pub mod proto;      // wire types for the transfer protocol
pub mod record;     // delimited record parsing
pub mod runner;     // host adapter
pub mod session;    // process session + context
pub mod traits;     // unified abstractions
pub mod transfer;   // remote transfer client

pub use flowfile::{FlowUnit, Relationship};
pub use runner::FlowRunner;
pub use traits::Processor;
