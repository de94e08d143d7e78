//! # Generic Client
//!
//! This module defines the generic client for talking to a resource actor.

use crate::entity::ApiEntity;
use crate::envelope::{ListEnvelope, ListQuery};
use crate::error::ApiError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type‑safe, async API over one REST collection.
/// It forwards requests over a Tokio mpsc channel to a [`ResourceActor`](crate::ResourceActor)
/// (or a [`MockClient`](crate::mock::MockClient) in tests) and waits for the answer on a
/// oneshot channel.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Bounded** – every call ends with the actor's answer or an [`ApiError`]; the
///   transport timeout bounds the wait.
pub struct ResourceClient<T: ApiEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ApiEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ApiEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn send<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, ApiError>>) -> ResourceRequest<T>,
    ) -> Result<R, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ApiError::ActorClosed)?;
        response.await.map_err(|_| ApiError::ActorDropped)?
    }

    pub async fn get_all(&self, query: Option<ListQuery>) -> Result<ListEnvelope<T>, ApiError> {
        self.send(|respond_to| ResourceRequest::List { query, respond_to })
            .await
    }

    pub async fn get_by_id(&self, id: impl Into<String>) -> Result<T, ApiError> {
        let id = id.into();
        self.send(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn create(&self, payload: T::Create) -> Result<T, ApiError> {
        self.send(|respond_to| ResourceRequest::Create {
            payload,
            respond_to,
        })
        .await
    }

    pub async fn update(&self, id: impl Into<String>, payload: T::Update) -> Result<T, ApiError> {
        let id = id.into();
        self.send(|respond_to| ResourceRequest::Update {
            id,
            payload,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<(), ApiError> {
        let id = id.into();
        self.send(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: impl Into<String>,
        action: T::Action,
    ) -> Result<(), ApiError> {
        let id = id.into();
        self.send(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
