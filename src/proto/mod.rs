// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Hand-maintained wire module for the flowunit.v1 transfer protocol.
// Kept in sync with proto/flowunit.proto.
pub mod flowunit_v1;

// Re-export the types for easier access
pub use flowunit_v1::{
    CompletionAck, CompletionRequest, SiteTransferClient, TransferConfirmation, TransferRequest,
};
