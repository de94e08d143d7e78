//! # Health Probe
//!
//! `GET /health` has no collection semantics, so it gets its own small actor and
//! client pair instead of a [`ResourceClient`](crate::ResourceClient).

use crate::envelope::HealthEnvelope;
use crate::error::ApiError;
use crate::message::Response;
use crate::transport::HttpTransport;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// A single health probe request.
#[derive(Debug)]
pub struct HealthRequest {
    pub respond_to: Response<HealthEnvelope>,
}

/// Cloneable handle for probing the API.
#[derive(Clone)]
pub struct HealthClient {
    sender: mpsc::Sender<HealthRequest>,
}

impl HealthClient {
    pub fn new(sender: mpsc::Sender<HealthRequest>) -> Self {
        Self { sender }
    }

    pub async fn check(&self) -> Result<HealthEnvelope, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(HealthRequest { respond_to })
            .await
            .map_err(|_| ApiError::ActorClosed)?;
        response.await.map_err(|_| ApiError::ActorDropped)?
    }
}

/// Actor answering [`HealthRequest`]s with `GET /health`.
pub struct HealthActor {
    receiver: mpsc::Receiver<HealthRequest>,
    transport: HttpTransport,
}

impl HealthActor {
    pub fn new(transport: HttpTransport, buffer_size: usize) -> (Self, HealthClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (
            Self {
                receiver,
                transport,
            },
            HealthClient::new(sender),
        )
    }

    pub async fn run(mut self) {
        info!(resource = "health", "Actor started");
        while let Some(HealthRequest { respond_to }) = self.receiver.recv().await {
            let result: Result<HealthEnvelope, ApiError> =
                self.transport.get_json(&["health"], None).await;
            match &result {
                Ok(envelope) => debug!(success = ?envelope.success, "Health probed"),
                Err(e) => warn!(error = %e, "Health probe failed"),
            }
            let _ = respond_to.send(result);
        }
        info!(resource = "health", "Shutdown");
    }
}
