//! # Mock Clients & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered
//! from an in-memory expectation queue instead of an HTTP actor. [`MockHealth`] does
//! the same for the health probe. Code under test cannot tell the difference.
//!
//! ## When to use Mocks vs a stub server
//!
//! | Feature | MockClient | ResourceActor + stub server |
//! |---------|------------|-----------------------------|
//! | **Speed** | Instant (in-memory) | Real sockets |
//! | **Determinism** | Fully deterministic | Subject to the scheduler |
//! | **Error Injection** | `return_err(..)` | Needs a failing route |
//! | **Use Case** | Aggregation and page logic | The HTTP gateway itself |
//!
//! ## Example
//!
//! ```rust
//! use luma_api::mock::MockClient;
//! use luma_api::{ApiEntity, ApiError, ListEnvelope, NoAction};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, PartialEq, Deserialize)]
//! struct Event { name: String }
//! #[derive(Debug, Serialize)] struct EventCreate { name: String }
//!
//! impl ApiEntity for Event {
//!     const RESOURCE: &'static str = "events";
//!     type Create = EventCreate;
//!     type Update = EventCreate;
//!     type Action = NoAction;
//!     fn id(&self) -> Option<&str> { None }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Event>::new();
//!     mock.expect_list()
//!         .return_ok(ListEnvelope::new(vec![Event { name: "Picnic".into() }]).with_count(12));
//!     mock.expect_list()
//!         .return_err(ApiError::Transport("connection refused".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.get_all(None).await.unwrap().count, Some(12));
//!     assert!(client.get_all(None).await.is_err());
//!
//!     // Ensures every expectation was consumed and nothing unexpected arrived.
//!     mock.verify();
//! }
//! ```
//!
//! ## Raw channel access
//!
//! When a test needs to decide *when* each answer is delivered (to force a specific
//! interleaving), use [`create_mock_client`] and the `expect_*` helper functions: they
//! hand back the request together with its responder.

use crate::client::ResourceClient;
use crate::entity::ApiEntity;
use crate::envelope::{HealthEnvelope, ListEnvelope, ListQuery};
use crate::error::ApiError;
use crate::health::{HealthClient, HealthRequest};
use crate::message::{Response, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the answer to give it.
enum Expectation<T: ApiEntity> {
    List {
        response: Result<ListEnvelope<T>, ApiError>,
    },
    Get {
        id: String,
        response: Result<T, ApiError>,
    },
    Create {
        response: Result<T, ApiError>,
    },
    Update {
        id: String,
        response: Result<T, ApiError>,
    },
    Delete {
        id: String,
        response: Result<(), ApiError>,
    },
    Action {
        id: String,
        response: Result<(), ApiError>,
    },
}

impl<T: ApiEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::List { .. } => "list",
            Expectation::Get { .. } => "get",
            Expectation::Create { .. } => "create",
            Expectation::Update { .. } => "update",
            Expectation::Delete { .. } => "delete",
            Expectation::Action { .. } => "action",
        }
    }
}

/// A request as the mock saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub kind: &'static str,
    pub id: Option<String>,
    pub query: Option<ListQuery>,
    pub payload: Option<serde_json::Value>,
}

type Queue<E> = Arc<Mutex<VecDeque<E>>>;

/// A mock resource client with expectation tracking.
pub struct MockClient<T: ApiEntity> {
    client: ResourceClient<T>,
    expectations: Queue<Expectation<T>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ApiEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ApiEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<Expectation<T>> = Arc::new(Mutex::new(VecDeque::new()));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));

        let exps = expectations.clone();
        let seen = requests.clone();
        let bad = mismatches.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                seen.lock().unwrap().push(record(&request));
                let expectation = exps.lock().unwrap().pop_front();
                if let Err(reason) = answer(request, expectation) {
                    bad.lock().unwrap().push(reason);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            requests,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, ListEnvelope<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_get(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, T> {
        let id = id.into();
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, T> {
        let id = id.into();
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, ()> {
        let id = id.into();
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, ()> {
        let id = id.into();
        self.builder(move |response| Expectation::Action { id, response })
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, ApiError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of received requests of the given kind (`"list"`, `"create"`, …).
    pub fn count(&self, kind: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.kind == kind)
            .count()
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("{} unexpected request(s): {:?}", mismatches.len(), *mismatches);
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<_> = exps.iter().map(Expectation::kind).collect();
            panic!("Not all expectations were met. Remaining: {:?}", pending);
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T: ApiEntity, R> {
    make: Box<dyn FnOnce(Result<R, ApiError>) -> Expectation<T> + Send>,
    expectations: Queue<Expectation<T>>,
}

impl<T: ApiEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, ApiError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

fn record<T: ApiEntity>(request: &ResourceRequest<T>) -> RecordedRequest {
    let (id, query, payload) = match request {
        ResourceRequest::List { query, .. } => (None, query.clone(), None),
        ResourceRequest::Get { id, .. } | ResourceRequest::Delete { id, .. } => {
            (Some(id.clone()), None, None)
        }
        ResourceRequest::Create { payload, .. } => (None, None, serde_json::to_value(payload).ok()),
        ResourceRequest::Update { id, payload, .. } => {
            (Some(id.clone()), None, serde_json::to_value(payload).ok())
        }
        ResourceRequest::Action { id, action, .. } => (
            Some(id.clone()),
            None,
            Some(serde_json::Value::String(format!("{:?}", action))),
        ),
    };
    RecordedRequest {
        kind: request.kind(),
        id,
        query,
        payload,
    }
}

/// Pairs a request with the next expectation. On mismatch the caller still gets an
/// answer (an error) so it never hangs; the mismatch is reported by `verify()`.
fn answer<T: ApiEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Result<(), String> {
    match (request, expectation) {
        (ResourceRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
            Ok(())
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
            Ok(())
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            check_id(&id, &want, respond_to, response)
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => check_id(&id, &want, respond_to, response),
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => check_id(&id, &want, respond_to, response),
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) => check_id(&id, &want, respond_to, response),
        (request, expectation) => {
            let reason = format!(
                "{} {} while expecting {}",
                T::RESOURCE,
                request.kind(),
                expectation.as_ref().map_or("nothing", Expectation::kind)
            );
            reject(request, &reason);
            Err(reason)
        }
    }
}

fn check_id<R>(
    id: &str,
    want: &str,
    respond_to: Response<R>,
    response: Result<R, ApiError>,
) -> Result<(), String> {
    if id == want {
        let _ = respond_to.send(response);
        Ok(())
    } else {
        let reason = format!("expected id {want}, got {id}");
        let _ = respond_to.send(Err(ApiError::Transport(reason.clone())));
        Err(reason)
    }
}

fn reject<T: ApiEntity>(request: ResourceRequest<T>, reason: &str) {
    match request {
        ResourceRequest::List { respond_to, .. } => {
            let _ = respond_to.send(mock_err(reason));
        }
        ResourceRequest::Get { respond_to, .. }
        | ResourceRequest::Create { respond_to, .. }
        | ResourceRequest::Update { respond_to, .. } => {
            let _ = respond_to.send(mock_err(reason));
        }
        ResourceRequest::Delete { respond_to, .. } | ResourceRequest::Action { respond_to, .. } => {
            let _ = respond_to.send(mock_err(reason));
        }
    }
}

fn mock_err<R>(reason: &str) -> Result<R, ApiError> {
    Err(ApiError::Transport(format!("mock: {reason}")))
}

// =============================================================================
// HEALTH
// =============================================================================

/// Mock for the health probe.
pub struct MockHealth {
    client: HealthClient,
    expectations: Queue<Result<HealthEnvelope, ApiError>>,
    probes: Arc<Mutex<usize>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockHealth {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealth {
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<HealthRequest>(100);
        let expectations: Queue<Result<HealthEnvelope, ApiError>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let probes = Arc::new(Mutex::new(0));

        let exps = expectations.clone();
        let seen = probes.clone();
        let handle = tokio::spawn(async move {
            while let Some(HealthRequest { respond_to }) = receiver.recv().await {
                *seen.lock().unwrap() += 1;
                let response = exps
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or_else(|| Err(ApiError::Transport("mock: unexpected health probe".into())));
                let _ = respond_to.send(response);
            }
        });

        Self {
            client: HealthClient::new(sender),
            expectations,
            probes,
            _handle: handle,
        }
    }

    pub fn client(&self) -> HealthClient {
        self.client.clone()
    }

    /// Queues `{ success }` as the next answer.
    pub fn expect_check(&mut self, success: bool) {
        self.push(Ok(HealthEnvelope::new(success)));
    }

    /// Queues a failed probe.
    pub fn expect_check_err(&mut self, error: ApiError) {
        self.push(Err(error));
    }

    pub fn probes(&self) -> usize {
        *self.probes.lock().unwrap()
    }

    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("{} health probe(s) expected but not made", exps.len());
        }
    }

    fn push(&mut self, response: Result<HealthEnvelope, ApiError>) {
        self.expectations.lock().unwrap().push_back(response);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests with the `expect_*` helpers below and
/// answers them whenever it wants.
pub fn create_mock_client<T: ApiEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request.
pub async fn expect_list<T: ApiEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Option<ListQuery>, Response<ListEnvelope<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: ApiEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create {
            payload,
            respond_to,
        }) => Some((payload, respond_to)),
        _ => None,
    }
}
