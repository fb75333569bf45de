// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Remote put processor.
//!
//! Streams a unit's content and attributes to a remote endpoint named via
//! properties or unit attributes, within one transactional
//! send/confirm/complete exchange.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::flowfile::Relationship;
use crate::observability::messages::transfer::{
    TransferCompleted, TransferFailed, TransferStarted,
};
use crate::observability::messages::StructuredLog;
use crate::session::{ProcessContext, ProcessSession};
use crate::traits::Processor;
use crate::transfer::{TransferClient, TransferTarget};

/// Endpoint address of the remote instance. Supports attribute expressions.
/// Required.
pub const PROP_REMOTE_URL: &str = "remote_url";

/// Name of the remote input channel. Supports attribute expressions.
/// Required.
pub const PROP_REMOTE_PORT_NAME: &str = "remote_port_name";

/// Whether the exchange should be compressed. Defaults to false.
pub const PROP_USE_COMPRESSION: &str = "use_compression";

/// Optional path to PEM trust material for the transport.
pub const PROP_TLS_CA_CERTIFICATE: &str = "tls_ca_certificate";

pub const REL_SUCCESS: Relationship = Relationship {
    name: "success",
    description: "Any unit that is successfully transferred is routed to this relationship",
};

pub const REL_FAILURE: Relationship = Relationship {
    name: "failure",
    description: "Any unit that fails to be transferred is routed to this relationship",
};

pub const RELATIONSHIPS: &[Relationship] = &[REL_SUCCESS, REL_FAILURE];

pub const REQUIRED_PROPERTIES: &[&str] = &[PROP_REMOTE_URL, PROP_REMOTE_PORT_NAME];

/// Sends one unit per trigger through a [`TransferClient`]. The unit is
/// routed to `success` when the exchange is confirmed and completed, and
/// penalized and routed to `failure` otherwise. Content and attributes of the
/// routed unit are unchanged either way.
pub struct RemotePut {
    client: Arc<dyn TransferClient>,
}

impl RemotePut {
    pub fn new(client: Arc<dyn TransferClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Processor for RemotePut {
    async fn on_trigger(&self, context: &ProcessContext, session: &mut ProcessSession) {
        let Some(unit) = session.get() else {
            return;
        };

        let target = TransferTarget {
            url: context
                .evaluated_property(PROP_REMOTE_URL, &unit)
                .unwrap_or_default(),
            port_name: context
                .evaluated_property(PROP_REMOTE_PORT_NAME, &unit)
                .unwrap_or_default(),
            use_compression: context.boolean_property(PROP_USE_COMPRESSION, false),
            tls_ca_certificate: context.property(PROP_TLS_CA_CERTIFICATE).map(PathBuf::from),
        };

        TransferStarted {
            url: &target.url,
            port_name: &target.port_name,
            bytes: unit.content().len(),
        }
        .log();

        let started = Instant::now();
        match self
            .client
            .transfer(&target, unit.content(), unit.attributes())
            .await
        {
            Ok(()) => {
                TransferCompleted {
                    url: &target.url,
                    port_name: &target.port_name,
                    bytes: unit.content().len(),
                    duration: started.elapsed(),
                }
                .log();
                session.transfer(unit, REL_SUCCESS);
            }
            Err(error) => {
                TransferFailed {
                    url: &target.url,
                    port_name: &target.port_name,
                    error: &error,
                }
                .log();
                let unit = session.penalize(unit);
                session.transfer(unit, REL_FAILURE);
            }
        }
    }

    fn name(&self) -> &'static str {
        "remote_put"
    }

    fn relationships(&self) -> &'static [Relationship] {
        RELATIONSHIPS
    }

    fn required_properties(&self) -> &'static [&'static str] {
        REQUIRED_PROPERTIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::flowfile::FlowUnit;
    use crate::transfer::TransferError;

    /// Records what it is asked to transfer; fails on demand.
    struct RecordingClient {
        fail: bool,
        seen: Mutex<Vec<(TransferTarget, Vec<u8>, HashMap<String, String>)>>,
    }

    impl RecordingClient {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TransferClient for RecordingClient {
        async fn transfer(
            &self,
            target: &TransferTarget,
            content: &[u8],
            attributes: &HashMap<String, String>,
        ) -> Result<(), TransferError> {
            self.seen.lock().unwrap().push((
                target.clone(),
                content.to_vec(),
                attributes.clone(),
            ));
            if self.fail {
                Err(TransferError::Unconfirmed {
                    port_name: target.port_name.clone(),
                    message: "remote declined".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn context() -> ProcessContext {
        ProcessContext::new(HashMap::from([
            (
                PROP_REMOTE_URL.to_string(),
                "http://remote.example:8080".to_string(),
            ),
            (PROP_REMOTE_PORT_NAME.to_string(), "intake".to_string()),
        ]))
    }

    fn unit() -> FlowUnit {
        FlowUnit::new(
            b"some content".to_vec(),
            HashMap::from([("k".to_string(), "v".to_string())]),
        )
    }

    #[tokio::test]
    async fn confirmed_transfer_routes_to_success() {
        let client = Arc::new(RecordingClient::new(false));
        let processor = RemotePut::new(client.clone());
        let mut session = ProcessSession::new();
        session.enqueue(unit());

        processor.on_trigger(&context(), &mut session).await;
        session.commit();

        assert_eq!(session.transfer_count(REL_SUCCESS), 1);
        assert_eq!(session.transfer_count(REL_FAILURE), 0);
        let routed = session.transferred(REL_SUCCESS)[0];
        assert!(!routed.is_penalized());
        assert_eq!(routed.content(), b"some content");

        let seen = client.seen.lock().unwrap();
        let (target, content, attributes) = &seen[0];
        assert_eq!(target.url, "http://remote.example:8080");
        assert_eq!(target.port_name, "intake");
        assert_eq!(content, b"some content");
        assert_eq!(attributes.get("k").map(String::as_str), Some("v"));
    }

    #[tokio::test]
    async fn failed_transfer_penalizes_and_routes_to_failure() {
        let processor = RemotePut::new(Arc::new(RecordingClient::new(true)));
        let mut session = ProcessSession::new();
        session.enqueue(unit());

        processor.on_trigger(&context(), &mut session).await;
        session.commit();

        assert_eq!(session.transfer_count(REL_SUCCESS), 0);
        assert_eq!(session.transfer_count(REL_FAILURE), 1);
        let routed = session.transferred(REL_FAILURE)[0];
        assert!(routed.is_penalized());
        assert_eq!(routed.content(), b"some content");
        assert_eq!(routed.attribute("k"), Some("v"));
    }

    #[tokio::test]
    async fn target_is_evaluated_against_unit_attributes() {
        let client = Arc::new(RecordingClient::new(false));
        let processor = RemotePut::new(client.clone());
        let context = ProcessContext::new(HashMap::from([
            (
                PROP_REMOTE_URL.to_string(),
                "http://${destination}:8080".to_string(),
            ),
            (PROP_REMOTE_PORT_NAME.to_string(), "intake".to_string()),
        ]));

        let mut session = ProcessSession::new();
        session.enqueue(FlowUnit::new(
            b"payload".to_vec(),
            HashMap::from([("destination".to_string(), "ingest-2".to_string())]),
        ));

        processor.on_trigger(&context, &mut session).await;
        session.commit();

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen[0].0.url, "http://ingest-2:8080");
    }

    #[tokio::test]
    async fn idle_tick_transfers_nothing() {
        let client = Arc::new(RecordingClient::new(false));
        let processor = RemotePut::new(client.clone());
        let mut session = ProcessSession::new();

        processor.on_trigger(&context(), &mut session).await;
        session.commit();

        assert!(session.committed().is_empty());
        assert!(client.seen.lock().unwrap().is_empty());
    }
}
