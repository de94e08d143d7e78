//! # ApiClient Trait
//!
//! Common surface for resource-specific clients: list, fetch, create, update and
//! delete come for free once a wrapper exposes its inner [`ResourceClient`].
use crate::{ApiEntity, ApiError, ListEnvelope, ListQuery, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard CRUD operations.
///
/// # Example
///
/// ```rust
/// use luma_api::{ApiClient, ApiEntity, NoAction, ResourceClient};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Deserialize)]
/// struct Article { title: Option<String> }
/// #[derive(Debug, Serialize)] struct ArticleCreate { title: String }
///
/// impl ApiEntity for Article {
///     const RESOURCE: &'static str = "articles";
///     type Create = ArticleCreate;
///     type Update = ArticleCreate;
///     type Action = NoAction;
///     fn id(&self) -> Option<&str> { None }
/// }
///
/// struct ArticleClient { inner: ResourceClient<Article> }
///
/// impl ApiClient<Article> for ArticleClient {
///     fn inner(&self) -> &ResourceClient<Article> { &self.inner }
/// }
///
/// async fn usage(client: ArticleClient) {
///     // list(), get(), create(), update() and delete() are provided automatically.
///     let _ = client.list(None).await;
///     let _ = client.delete("a1".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ApiClient<T: ApiEntity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch the collection, optionally filtered.
    #[tracing::instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn list(&self, query: Option<ListQuery>) -> Result<ListEnvelope<T>, ApiError> {
        tracing::debug!("Sending request");
        self.inner().get_all(query).await
    }

    /// Fetch one record by id.
    #[tracing::instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn get(&self, id: String) -> Result<T, ApiError> {
        tracing::debug!("Sending request");
        self.inner().get_by_id(id).await
    }

    /// Create a record; returns the server's copy.
    #[tracing::instrument(skip(self, payload), fields(resource = T::RESOURCE))]
    async fn create(&self, payload: T::Create) -> Result<T, ApiError> {
        tracing::debug!(?payload, "Sending request");
        self.inner().create(payload).await
    }

    /// Replace a record; returns the server's copy.
    #[tracing::instrument(skip(self, payload), fields(resource = T::RESOURCE))]
    async fn update(&self, id: String, payload: T::Update) -> Result<T, ApiError> {
        tracing::debug!(?payload, "Sending request");
        self.inner().update(id, payload).await
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn delete(&self, id: String) -> Result<(), ApiError> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await
    }
}
