//! # ApiEntity Trait
//!
//! The `ApiEntity` trait is the contract every REST resource (users, kids, doctors, …)
//! implements so it can be served by the generic [`ResourceActor`](crate::ResourceActor).
//! Associated types pin each resource to its own create/update payloads and custom
//! actions: a `DoctorCreate` can never be posted to `/users`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A record type exposed by the REST API under `/{RESOURCE}`.
pub trait ApiEntity: Clone + Debug + DeserializeOwned + Send + Sync + 'static {
    /// Path segment of the collection, e.g. `"game-progress"`.
    const RESOURCE: &'static str;

    /// Body of `POST /{RESOURCE}`.
    type Create: Serialize + Debug + Send + Sync + 'static;

    /// Body of `PUT /{RESOURCE}/{id}`.
    type Update: Serialize + Debug + Send + Sync + 'static;

    /// Resource-specific commands (`PUT /{RESOURCE}/{id}/{segment}`).
    /// Use [`NoAction`] when the resource has none.
    type Action: ResourceAction;

    /// Server-assigned identifier (`_id`), if the record carries one.
    fn id(&self) -> Option<&str>;
}

/// A custom command on a single record.
pub trait ResourceAction: Debug + Send + Sync + 'static {
    /// Trailing path segment, e.g. `"read"` for `PUT /feedback/{id}/read`.
    fn path_segment(&self) -> &'static str;
}

/// Action type for resources without custom commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAction {}

impl ResourceAction for NoAction {
    fn path_segment(&self) -> &'static str {
        match *self {}
    }
}
