// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the crate. Message types follow a struct-based
//! pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::processor` - processor execution and routing events
//! * `messages::session` - session commit/rollback events
//! * `messages::transfer` - remote transfer lifecycle events
//! * `messages::validation` - configuration validation errors
//!
//! # Usage
//!
//! ```
//! use flowunit::observability::messages::session::SessionCommitted;
//! use flowunit::observability::messages::StructuredLog;
//!
//! let msg = SessionCommitted { transmissions: 4 };
//! msg.log();
//! ```

pub mod messages;
