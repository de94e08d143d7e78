//! # Luma API
//!
//! Typed data access for the Luma REST API (users, kids, doctors, articles, feedback,
//! events, game progress, community posts and the health probe).
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ApiEntity`]) - the record type, its collection path and
//!    its create/update payloads.
//! 2. **Gateway Layer** ([`ResourceActor`], [`HealthActor`]) - one Tokio task per
//!    collection that owns the [`HttpTransport`] and executes requests.
//! 3. **Interface Layer** ([`ResourceClient`], [`HealthClient`], [`ApiClient`]) -
//!    cloneable handles that send typed requests to the gateway.
//!
//! Every call resolves to `Result<_, ApiError>`. The request timeout configured on
//! the transport bounds every call, so nothing waits forever on a dead server.
//!
//! ## Envelopes
//!
//! The API wraps its payloads (`{ data, count? }`, `{ success }`). Those shapes are
//! modelled with optional fields in [`ListEnvelope`], [`ItemEnvelope`] and
//! [`HealthEnvelope`]; deciding what a missing field means is left to the caller.
//!
//! ## Testing
//!
//! [`mock::MockClient`] and [`mock::MockHealth`] answer requests from an in-memory
//! expectation queue and expose the same client types, so code built on
//! `ResourceClient<T>` is tested without a server.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod health;
pub mod message;
pub mod mock;
pub mod transport;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ApiClient;
pub use entity::{ApiEntity, NoAction, ResourceAction};
pub use envelope::{HealthEnvelope, ItemEnvelope, ListEnvelope, ListQuery};
pub use error::ApiError;
pub use health::{HealthActor, HealthClient, HealthRequest};
pub use message::{ResourceRequest, Response};
pub use transport::HttpTransport;
