// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Remote transfer client abstraction.
//!
//! A [`TransferClient`] streams one unit's content and attributes to a remote
//! endpoint in a single transactional exchange: send the payload, require the
//! remote side's confirmation, then complete the transaction. The trait hides
//! the transport so processors stay testable without a live endpoint; the one
//! shipped implementation speaks gRPC ([`grpc::GrpcTransferClient`]).

pub mod grpc;

pub use grpc::GrpcTransferClient;

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Where one transfer exchange is addressed, as evaluated for the unit being
/// processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTarget {
    /// Endpoint address of the remote instance.
    pub url: String,
    /// Name of the remote input channel the unit is addressed to.
    pub port_name: String,
    /// Compress the exchange in both directions.
    pub use_compression: bool,
    /// Optional PEM trust material handed to the transport unchanged.
    pub tls_ca_certificate: Option<PathBuf>,
}

/// Errors from one transfer exchange.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The configured endpoint address could not be used as-is.
    #[error("invalid endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// The trust material path could not be read.
    #[error("could not read trust material '{path}': {source}")]
    TrustMaterial {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote endpoint could not be reached.
    #[error("failed to connect to '{url}': {source}")]
    Connect {
        url: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// The remote side declined to confirm the payload.
    #[error("transfer to port '{port_name}' was not confirmed: {message}")]
    Unconfirmed { port_name: String, message: String },

    /// The exchange failed at the RPC layer.
    #[error("transfer rpc failed: {0}")]
    Rpc(#[from] tonic::Status),
}

/// One transactional send/confirm/complete exchange.
#[async_trait]
pub trait TransferClient: Send + Sync {
    async fn transfer(
        &self,
        target: &TransferTarget,
        content: &[u8],
        attributes: &HashMap<String, String>,
    ) -> Result<(), TransferError>;
}
