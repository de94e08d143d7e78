use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use luma_api::{
    ApiEntity, ApiError, HealthActor, HttpTransport, ListQuery, ResourceAction, ResourceActor,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct Note {
    #[serde(rename = "_id")]
    id: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Serialize)]
struct NoteDraft {
    title: String,
}

#[derive(Debug, Clone, Copy)]
enum NoteAction {
    Archive,
}

impl ResourceAction for NoteAction {
    fn path_segment(&self) -> &'static str {
        match self {
            NoteAction::Archive => "archive",
        }
    }
}

impl ApiEntity for Note {
    const RESOURCE: &'static str = "notes";
    type Create = NoteDraft;
    type Update = NoteDraft;
    type Action = NoteAction;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

async fn list_notes(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("owner") {
        Some(owner) => Json(json!({ "data": [{ "_id": "n9", "title": owner }] })),
        None => Json(json!({
            "data": [{ "_id": "n1", "title": "first" }, { "_id": "n2" }],
            "count": 42
        })),
    }
}

async fn create_note(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["title"] == "dup" {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": "Title already exists" })),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({ "data": { "_id": "n3", "title": body["title"] } })),
    )
}

async fn get_note(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "missing" {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })));
    }
    if id == "hollow" {
        return (StatusCode::OK, Json(json!({})));
    }
    (StatusCode::OK, Json(json!({ "data": { "_id": id, "title": "found" } })))
}

async fn update_note(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "data": { "_id": id, "title": body["title"] } }))
}

async fn delete_note(Path(_id): Path<String>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn archive_note(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "data": { "_id": id } }))
}

async fn slow_health() -> Json<Value> {
    tokio::time::sleep(Duration::from_millis(500)).await;
    Json(json!({ "success": true }))
}

async fn spawn_stub(health_slow: bool) -> String {
    let mut app = Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/api/notes/{id}/archive", put(archive_note));
    app = if health_slow {
        app.route("/api/health", get(slow_health))
    } else {
        app.route("/api/health", get(|| async { Json(json!({ "success": true })) }))
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// Gateway logs for failing runs: `RUST_LOG=luma_api=debug cargo test`.
/// Captured per test by the harness; only the first call installs it.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_test_writer()
        .try_init();
}

fn transport(base_url: &str, timeout: Duration) -> HttpTransport {
    init_tracing();
    HttpTransport::new(base_url, timeout).unwrap()
}

#[tokio::test]
async fn test_list_decodes_envelope_and_query() {
    let base = spawn_stub(false).await;
    let (actor, client) = ResourceActor::<Note>::new(transport(&base, Duration::from_secs(5)), 8);
    let handle = tokio::spawn(actor.run());

    let envelope = client.get_all(None).await.unwrap();
    assert_eq!(envelope.count, Some(42));
    let items = envelope.into_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].title, None);

    let filtered = client
        .get_all(Some(ListQuery::new().param("owner", "u7")))
        .await
        .unwrap();
    assert_eq!(filtered.count, None);
    assert_eq!(filtered.into_items()[0].title.as_deref(), Some("u7"));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_crud_round_trip_through_actor() {
    let base = spawn_stub(false).await;
    let (actor, client) = ResourceActor::<Note>::new(transport(&base, Duration::from_secs(5)), 8);
    tokio::spawn(actor.run());

    let created = client
        .create(NoteDraft {
            title: "hello".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id(), Some("n3"));
    assert_eq!(created.title.as_deref(), Some("hello"));

    let fetched = client.get_by_id("n1").await.unwrap();
    assert_eq!(fetched.title.as_deref(), Some("found"));

    let updated = client
        .update(
            "n1",
            NoteDraft {
                title: "renamed".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title.as_deref(), Some("renamed"));

    client.delete("n1").await.unwrap();
    client.perform_action("n1", NoteAction::Archive).await.unwrap();
}

#[tokio::test]
async fn test_error_statuses_carry_server_message() {
    let base = spawn_stub(false).await;
    let (actor, client) = ResourceActor::<Note>::new(transport(&base, Duration::from_secs(5)), 8);
    tokio::spawn(actor.run());

    let err = client
        .create(NoteDraft {
            title: "dup".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 409,
            message: Some("Title already exists".into()),
        }
    );
    assert_eq!(err.alert_text("Error saving note"), "Title already exists");

    let err = client.get_by_id("missing").await.unwrap_err();
    assert_eq!(err.server_message(), Some("Not found"));

    let err = client.get_by_id("hollow").await.unwrap_err();
    assert_eq!(err, ApiError::MissingData("notes".into()));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = format!("http://{addr}/api");
    let (actor, client) = ResourceActor::<Note>::new(transport(&base, Duration::from_secs(5)), 8);
    tokio::spawn(actor.run());

    let err = client.get_all(None).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_health_probe_and_timeout() {
    let base = spawn_stub(false).await;
    let (actor, health) = HealthActor::new(transport(&base, Duration::from_secs(5)), 4);
    tokio::spawn(actor.run());
    assert!(health.check().await.unwrap().is_healthy());

    let slow = spawn_stub(true).await;
    let timeout = Duration::from_millis(50);
    let (actor, health) = HealthActor::new(transport(&slow, timeout), 4);
    tokio::spawn(actor.run());
    assert_eq!(health.check().await.unwrap_err(), ApiError::Timeout(timeout));
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (actor, client) =
        ResourceActor::<Note>::new(transport("http://127.0.0.1:9/api", Duration::from_secs(1)), 1);
    drop(actor);
    assert_eq!(client.get_all(None).await.unwrap_err(), ApiError::ActorClosed);
}
