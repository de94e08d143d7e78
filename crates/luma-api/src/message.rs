//! # Resource Messages
//!
//! Requests travelling from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor). Each variant maps to one REST call and
//! carries a oneshot sender for the answer.

use crate::entity::ApiEntity;
use crate::envelope::{ListEnvelope, ListQuery};
use crate::error::ApiError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, ApiError>>;

/// One REST operation on a resource collection.
///
/// - **List**: `GET /{resource}` with optional query parameters.
/// - **Get**: `GET /{resource}/{id}`.
/// - **Create**: `POST /{resource}`.
/// - **Update**: `PUT /{resource}/{id}`.
/// - **Delete**: `DELETE /{resource}/{id}`.
/// - **Action**: `PUT /{resource}/{id}/{segment}` for resource-specific commands.
#[derive(Debug)]
pub enum ResourceRequest<T: ApiEntity> {
    List {
        query: Option<ListQuery>,
        respond_to: Response<ListEnvelope<T>>,
    },
    Get {
        id: String,
        respond_to: Response<T>,
    },
    Create {
        payload: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: String,
        payload: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
    Action {
        id: String,
        action: T::Action,
        respond_to: Response<()>,
    },
}

impl<T: ApiEntity> ResourceRequest<T> {
    /// Short verb used in log lines and mock diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRequest::List { .. } => "list",
            ResourceRequest::Get { .. } => "get",
            ResourceRequest::Create { .. } => "create",
            ResourceRequest::Update { .. } => "update",
            ResourceRequest::Delete { .. } => "delete",
            ResourceRequest::Action { .. } => "action",
        }
    }
}
