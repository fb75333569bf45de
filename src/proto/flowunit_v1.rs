// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wire types and client for the `flowunit.v1.SiteTransfer` service.
//!
//! The exchange is transactional from the caller's point of view: `Send`
//! carries the unit's content and attributes and returns a confirmation with
//! a transaction id, and `Complete` finalizes that transaction. A payload the
//! remote side does not confirm must not be completed.

use tonic::codegen::http::uri::PathAndQuery;
use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;

/// One unit addressed to a remote input channel.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferRequest {
    /// Name of the remote input channel the unit is addressed to.
    #[prost(string, tag = "1")]
    pub port_name: String,
    /// The unit's binary content, verbatim.
    #[prost(bytes = "vec", tag = "2")]
    pub content: Vec<u8>,
    /// The unit's full attribute map.
    #[prost(map = "string, string", tag = "3")]
    pub attributes: std::collections::HashMap<String, String>,
}

/// The remote side's answer to a `Send`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferConfirmation {
    #[prost(string, tag = "1")]
    pub transaction_id: String,
    #[prost(bool, tag = "2")]
    pub accepted: bool,
    /// Diagnostic detail when `accepted` is false.
    #[prost(string, tag = "3")]
    pub message: String,
}

/// Finalizes a confirmed transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompletionRequest {
    #[prost(string, tag = "1")]
    pub transaction_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompletionAck {}

/// Client for the `flowunit.v1.SiteTransfer` service.
#[derive(Debug, Clone)]
pub struct SiteTransferClient {
    inner: tonic::client::Grpc<Channel>,
}

impl SiteTransferClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    /// Compress requests with the given encoding.
    pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
        self.inner = self.inner.send_compressed(encoding);
        self
    }

    /// Accept responses compressed with the given encoding.
    pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
        self.inner = self.inner.accept_compressed(encoding);
        self
    }

    pub async fn send(
        &mut self,
        request: TransferRequest,
    ) -> Result<tonic::Response<TransferConfirmation>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::new(tonic::Code::Unknown, format!("transport not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static("/flowunit.v1.SiteTransfer/Send");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn complete(
        &mut self,
        request: CompletionRequest,
    ) -> Result<tonic::Response<CompletionAck>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::new(tonic::Code::Unknown, format!("transport not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static("/flowunit.v1.SiteTransfer/Complete");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }
}
