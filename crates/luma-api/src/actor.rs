//! # Resource Actor
//!
//! This module defines the `ResourceActor`, the gateway task that owns the HTTP
//! transport for one REST collection. It is the "server" half of a
//! [`ResourceClient`]: requests arrive over an mpsc channel, are executed one at a
//! time against the API and answered over oneshot channels.

use crate::client::ResourceClient;
use crate::entity::{ApiEntity, ResourceAction};
use crate::envelope::{ItemEnvelope, ListEnvelope};
use crate::error::ApiError;
use crate::message::ResourceRequest;
use crate::transport::HttpTransport;
use reqwest::Method;
use std::marker::PhantomData;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Gateway actor for one resource collection.
///
/// **Concurrency Model**:
/// Each actor processes its own requests sequentially; different resources run in
/// parallel because every collection gets its own actor task. The transport is a
/// cheap clone of a shared `reqwest::Client`, so all actors share one connection
/// pool.
///
/// # Usage Pattern
///
/// ```rust,no_run
/// use luma_api::{ApiEntity, HttpTransport, NoAction, ResourceActor};
/// use serde::{Deserialize, Serialize};
/// use std::time::Duration;
///
/// #[derive(Clone, Debug, Deserialize)]
/// struct Doctor {
///     #[serde(rename = "_id")]
///     id: Option<String>,
///     name: Option<String>,
/// }
///
/// #[derive(Debug, Serialize)]
/// struct DoctorCreate { name: String }
///
/// impl ApiEntity for Doctor {
///     const RESOURCE: &'static str = "doctors";
///     type Create = DoctorCreate;
///     type Update = DoctorCreate;
///     type Action = NoAction;
///     fn id(&self) -> Option<&str> { self.id.as_deref() }
/// }
///
/// #[tokio::main]
/// async fn main() -> Result<(), luma_api::ApiError> {
///     let transport = HttpTransport::new("http://localhost:3002/api", Duration::from_secs(10))?;
///     let (actor, client) = ResourceActor::<Doctor>::new(transport, 32);
///     tokio::spawn(actor.run());
///
///     let doctors = client.get_all(None).await?;
///     println!("{} doctors", doctors.into_items().len());
///     Ok(())
/// }
/// ```
pub struct ResourceActor<T: ApiEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    transport: HttpTransport,
    _entity: PhantomData<fn() -> T>,
}

impl<T: ApiEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full,
    /// callers wait for room.
    pub fn new(transport: HttpTransport, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            transport,
            _entity: PhantomData,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self) {
        let resource = T::RESOURCE;
        info!(resource, "Actor started");

        let mut served: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            let kind = msg.kind();
            served += 1;
            match msg {
                ResourceRequest::List { query, respond_to } => {
                    debug!(resource, ?query, "List");
                    let result: Result<ListEnvelope<T>, ApiError> =
                        self.transport.get_json(&[resource], query.as_ref()).await;
                    if let Ok(envelope) = &result {
                        debug!(
                            resource,
                            items = envelope.data.as_ref().map_or(0, Vec::len),
                            count = ?envelope.count,
                            "Listed"
                        );
                    }
                    let _ = respond_to.send(log_failure(resource, kind, result));
                }
                ResourceRequest::Get { id, respond_to } => {
                    debug!(resource, %id, "Get");
                    let result = self.fetch_item(Method::GET, &id, None::<&()>).await;
                    let _ = respond_to.send(log_failure(resource, kind, result));
                }
                ResourceRequest::Create {
                    payload,
                    respond_to,
                } => {
                    debug!(resource, ?payload, "Create");
                    let result: Result<ItemEnvelope<T>, ApiError> = self
                        .transport
                        .send_json(Method::POST, &[resource], Some(&payload))
                        .await;
                    let result = result.and_then(unwrap_item::<T>);
                    if let Ok(item) = &result {
                        info!(resource, id = item.id().unwrap_or("-"), "Created");
                    }
                    let _ = respond_to.send(log_failure(resource, kind, result));
                }
                ResourceRequest::Update {
                    id,
                    payload,
                    respond_to,
                } => {
                    debug!(resource, %id, ?payload, "Update");
                    let result = self.fetch_item(Method::PUT, &id, Some(&payload)).await;
                    if result.is_ok() {
                        info!(resource, %id, "Updated");
                    }
                    let _ = respond_to.send(log_failure(resource, kind, result));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(resource, %id, "Delete");
                    let result = self
                        .transport
                        .send_empty(Method::DELETE, &[resource, id.as_str()])
                        .await;
                    if result.is_ok() {
                        info!(resource, %id, "Deleted");
                    }
                    let _ = respond_to.send(log_failure(resource, kind, result));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(resource, %id, ?action, "Action");
                    let result = self
                        .transport
                        .send_empty(Method::PUT, &[resource, id.as_str(), action.path_segment()])
                        .await;
                    if result.is_ok() {
                        info!(resource, %id, "Action ok");
                    }
                    let _ = respond_to.send(log_failure(resource, kind, result));
                }
            }
        }

        info!(resource, served, "Shutdown");
    }

    async fn fetch_item<B: serde::Serialize>(
        &self,
        method: Method,
        id: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let envelope: ItemEnvelope<T> = self
            .transport
            .send_json(method, &[T::RESOURCE, id], body)
            .await?;
        unwrap_item(envelope)
    }
}

fn unwrap_item<T: ApiEntity>(envelope: ItemEnvelope<T>) -> Result<T, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::MissingData(T::RESOURCE.to_string()))
}

fn log_failure<R>(resource: &str, kind: &str, result: Result<R, ApiError>) -> Result<R, ApiError> {
    if let Err(e) = &result {
        warn!(resource, kind, error = %e, "Request failed");
    }
    result
}
