// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use tonic::codec::CompressionEncoding;
use tonic::transport::{Certificate, ClientTlsConfig, Endpoint};

use super::{TransferClient, TransferError, TransferTarget};
use crate::proto::{CompletionRequest, SiteTransferClient, TransferRequest};

/// gRPC-backed transfer client.
///
/// A fresh channel is established per exchange because the target address is
/// evaluated per unit and may differ between invocations.
pub struct GrpcTransferClient;

impl GrpcTransferClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GrpcTransferClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransferClient for GrpcTransferClient {
    async fn transfer(
        &self,
        target: &TransferTarget,
        content: &[u8],
        attributes: &HashMap<String, String>,
    ) -> Result<(), TransferError> {
        let mut endpoint =
            Endpoint::from_shared(target.url.clone()).map_err(|e| TransferError::InvalidEndpoint {
                url: target.url.clone(),
                source: e,
            })?;

        if let Some(path) = &target.tls_ca_certificate {
            let pem = tokio::fs::read(path)
                .await
                .map_err(|e| TransferError::TrustMaterial {
                    path: path.clone(),
                    source: e,
                })?;
            let tls = ClientTlsConfig::new().ca_certificate(Certificate::from_pem(pem));
            endpoint = endpoint
                .tls_config(tls)
                .map_err(|e| TransferError::InvalidEndpoint {
                    url: target.url.clone(),
                    source: e,
                })?;
        }

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| TransferError::Connect {
                url: target.url.clone(),
                source: e,
            })?;

        let mut client = SiteTransferClient::new(channel);
        if target.use_compression {
            client = client
                .send_compressed(CompressionEncoding::Gzip)
                .accept_compressed(CompressionEncoding::Gzip);
        }

        let request = TransferRequest {
            port_name: target.port_name.clone(),
            content: content.to_vec(),
            attributes: attributes.clone(),
        };

        let confirmation = client.send(request).await?.into_inner();
        if !confirmation.accepted {
            return Err(TransferError::Unconfirmed {
                port_name: target.port_name.clone(),
                message: confirmation.message,
            });
        }

        client
            .complete(CompletionRequest {
                transaction_id: confirmation.transaction_id,
            })
            .await?;

        Ok(())
    }
}
