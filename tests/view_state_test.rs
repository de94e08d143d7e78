mod common;

use async_trait::async_trait;
use common::{doctor, feedback, MockApi};
use luma_admin::aggregation::{Aggregate, Aggregation, StatsSnapshot};
use luma_admin::clients::{
    ArticleClient, DoctorClient, FeedbackClient, KidClient, UserClient,
};
use luma_admin::forms::{DoctorDraft, DoctorField, FeedbackField, KidDraft, KidField, UserField};
use luma_admin::model::{Doctor, Kid, User};
use luma_admin::view::{
    AdminDashboard, BannerKind, Dashboard, DoctorsPage, FeedbackForm, KidsPage, ListPage,
    OverviewController, PageLabels, Refresh, RefreshOutcome, RefreshTask, Tab, UsersPage,
};
use luma_admin::AdminError;
use luma_api::{ApiError, ListEnvelope, ListQuery};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

fn aggregation(users: u64) -> Aggregation {
    Aggregation {
        snapshot: StatsSnapshot {
            users,
            ..StatsSnapshot::default()
        },
        ..Aggregation::default()
    }
}

/// Each call waits on its own gate, so the test decides completion order.
struct GatedAggregate {
    gates: Mutex<VecDeque<oneshot::Receiver<Aggregation>>>,
    started: mpsc::UnboundedSender<()>,
}

#[async_trait]
impl Aggregate for GatedAggregate {
    async fn run_aggregation(&self) -> Aggregation {
        let gate = self.gates.lock().unwrap().pop_front().expect("no gate left");
        let _ = self.started.send(());
        gate.await.expect("gate dropped")
    }
}

/// Answers immediately, numbering its cycles.
#[derive(Default)]
struct CountingAggregate {
    calls: AtomicU64,
}

#[async_trait]
impl Aggregate for CountingAggregate {
    async fn run_aggregation(&self) -> Aggregation {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        aggregation(n)
    }
}

fn gated(n: usize) -> (Arc<GatedAggregate>, Vec<oneshot::Sender<Aggregation>>, mpsc::UnboundedReceiver<()>) {
    let (started, started_rx) = mpsc::unbounded_channel();
    let mut senders = Vec::new();
    let mut gates = VecDeque::new();
    for _ in 0..n {
        let (tx, rx) = oneshot::channel();
        senders.push(tx);
        gates.push_back(rx);
    }
    let engine = Arc::new(GatedAggregate {
        gates: Mutex::new(gates),
        started,
    });
    (engine, senders, started_rx)
}

// =============================================================================
// OVERVIEW GENERATION GUARD
// =============================================================================

#[tokio::test]
async fn test_older_refresh_cannot_overwrite_newer() {
    let (engine, mut gates, mut started) = gated(2);
    let controller = Arc::new(OverviewController::new(engine));

    let c1 = controller.clone();
    let first = tokio::spawn(async move { c1.refresh().await });
    started.recv().await.unwrap();
    let c2 = controller.clone();
    let second = tokio::spawn(async move { c2.refresh().await });
    started.recv().await.unwrap();

    let newer = gates.pop().unwrap();
    let older = gates.pop().unwrap();

    newer.send(aggregation(2)).unwrap();
    assert_eq!(second.await.unwrap(), RefreshOutcome::Applied);
    let state = controller.state().await;
    assert_eq!(state.snapshot.users, 2);
    assert!(!state.loading);

    older.send(aggregation(1)).unwrap();
    assert_eq!(first.await.unwrap(), RefreshOutcome::Stale);
    let state = controller.state().await;
    assert_eq!(state.snapshot.users, 2);
    assert_eq!(state.generation, 2);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_loading_clears_only_with_latest_cycle() {
    let (engine, mut gates, mut started) = gated(2);
    let controller = Arc::new(OverviewController::new(engine));

    let c1 = controller.clone();
    let first = tokio::spawn(async move { c1.refresh().await });
    started.recv().await.unwrap();
    let c2 = controller.clone();
    let second = tokio::spawn(async move { c2.refresh().await });
    started.recv().await.unwrap();

    let newer = gates.pop().unwrap();
    let older = gates.pop().unwrap();

    older.send(aggregation(1)).unwrap();
    assert_eq!(first.await.unwrap(), RefreshOutcome::Applied);
    let state = controller.state().await;
    assert_eq!(state.snapshot.users, 1);
    assert!(state.loading, "newer cycle still running");

    newer.send(aggregation(2)).unwrap();
    assert_eq!(second.await.unwrap(), RefreshOutcome::Applied);
    let state = controller.state().await;
    assert_eq!(state.snapshot.users, 2);
    assert!(!state.loading);
    assert!(state.last_refreshed_at.is_some());
}

#[tokio::test]
async fn test_completion_after_detach_is_dropped() {
    let (engine, mut gates, mut started) = gated(1);
    let controller = Arc::new(OverviewController::new(engine));

    let c1 = controller.clone();
    let cycle = tokio::spawn(async move { c1.refresh().await });
    started.recv().await.unwrap();

    controller.detach();
    gates.pop().unwrap().send(aggregation(9)).unwrap();
    assert_eq!(cycle.await.unwrap(), RefreshOutcome::Detached);

    let state = controller.state().await;
    assert_eq!(state.generation, 0);
    assert_eq!(state.snapshot, StatsSnapshot::default());
    assert!(state.last_refreshed_at.is_none());
    assert!(!state.loading, "latest cycle finished, loading settles");
}

#[tokio::test]
async fn test_detached_older_cycle_leaves_loading_to_newest() {
    let (engine, mut gates, mut started) = gated(2);
    let controller = Arc::new(OverviewController::new(engine));

    let c1 = controller.clone();
    let first = tokio::spawn(async move { c1.refresh().await });
    started.recv().await.unwrap();
    let c2 = controller.clone();
    let second = tokio::spawn(async move { c2.refresh().await });
    started.recv().await.unwrap();
    controller.detach();

    let newer = gates.pop().unwrap();
    let older = gates.pop().unwrap();

    older.send(aggregation(1)).unwrap();
    assert_eq!(first.await.unwrap(), RefreshOutcome::Detached);
    assert!(controller.state().await.loading);

    newer.send(aggregation(2)).unwrap();
    assert_eq!(second.await.unwrap(), RefreshOutcome::Detached);
    let state = controller.state().await;
    assert!(!state.loading);
    assert_eq!(state.generation, 0);
}

// =============================================================================
// INTERVAL REFRESH
// =============================================================================

#[derive(Default)]
struct CountingRefresh {
    cycles: AtomicU64,
}

#[async_trait]
impl Refresh for CountingRefresh {
    async fn run_cycle(&self) {
        self.cycles.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test(start_paused = true)]
async fn test_refresh_task_runs_immediately_then_every_period() {
    let target = Arc::new(CountingRefresh::default());
    let task = RefreshTask::start(target.clone(), Duration::from_secs(30));
    assert!(task.is_running());

    // Cycles at t = 0, 30 and 60.
    tokio::time::sleep(Duration::from_secs(65)).await;
    assert_eq!(target.cycles.load(Ordering::SeqCst), 3);

    task.stop().await;
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(target.cycles.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_refresh_task_cancels_it() {
    let target = Arc::new(CountingRefresh::default());
    let task = RefreshTask::start(target.clone(), Duration::from_secs(30));
    tokio::time::sleep(Duration::from_secs(1)).await;
    drop(task);

    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_eq!(target.cycles.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_refreshes_while_mounted() {
    let engine = Arc::new(CountingAggregate::default());
    let mut dashboard = Dashboard::new(engine.clone(), Duration::from_secs(30));
    dashboard.mount();
    dashboard.mount();

    tokio::time::sleep(Duration::from_secs(1)).await;
    let state = dashboard.state().await;
    assert_eq!(state.snapshot.users, 1);
    assert!(!state.loading);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(dashboard.state().await.snapshot.users, 2);

    dashboard.unmount().await;
    assert!(!dashboard.is_mounted());
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
    assert_eq!(dashboard.state().await.generation, 2);
}

// =============================================================================
// ADMIN TABS
// =============================================================================

fn admin(api: &MockApi, engine: Arc<CountingAggregate>) -> AdminDashboard<CountingAggregate> {
    AdminDashboard::new(
        engine,
        DoctorClient::new(api.doctors.client()),
        ArticleClient::new(api.articles.client()),
        FeedbackClient::new(api.feedback.client()),
    )
}

#[tokio::test]
async fn test_tab_change_fetches_only_that_tab() {
    let mut api = MockApi::new();
    let engine = Arc::new(CountingAggregate::default());
    let mut page = admin(&api, engine.clone());

    page.mount().await;
    assert_eq!(page.active_tab(), Tab::Overview);
    assert_eq!(engine.calls.load(Ordering::SeqCst), 1);
    assert_eq!(page.overview().await.snapshot.users, 1);

    api.doctors
        .expect_list()
        .return_ok(ListEnvelope::new(vec![doctor("d1", "Dr. Ali")]));
    assert!(page.select_tab(Tab::Doctors).await);
    assert_eq!(api.doctors.count("list"), 1);
    assert_eq!(page.doctors.items().len(), 1);
    assert_eq!(engine.calls.load(Ordering::SeqCst), 1);

    // Re-selecting the active tab does nothing.
    assert!(!page.select_tab(Tab::Doctors).await);
    assert_eq!(api.doctors.count("list"), 1);

    api.doctors.expect_list().return_ok(ListEnvelope::new(vec![]));
    page.reload().await;
    assert_eq!(api.doctors.count("list"), 2);
    assert!(page.doctors.items().is_empty());

    assert!(page.select_tab(Tab::Overview).await);
    assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
    assert_eq!(api.articles.count("list"), 0);
    assert_eq!(api.feedback.count("list"), 0);
    api.verify();
}

#[tokio::test]
async fn test_feedback_mark_as_read_refetches() {
    let mut api = MockApi::new();
    let mut page = admin(&api, Arc::new(CountingAggregate::default()));

    api.feedback
        .expect_list()
        .return_ok(ListEnvelope::new(vec![feedback("f1")]));
    page.select_tab(Tab::Feedback).await;

    api.feedback.expect_action("f1").return_ok(());
    api.feedback.expect_list().return_ok(ListEnvelope::new(vec![]));
    page.feedback.mark_as_read("f1").await.unwrap();

    assert_eq!(api.feedback.count("action"), 1);
    assert_eq!(api.feedback.count("list"), 2);
    let action = &api.feedback.requests()[1];
    assert_eq!(action.id.as_deref(), Some("f1"));
    api.verify();
}

// =============================================================================
// MUTATION THEN REFETCH
// =============================================================================

fn doctors_page(api: &MockApi) -> DoctorsPage {
    ListPage::new(DoctorClient::new(api.doctors.client()), PageLabels::DOCTORS)
}

#[tokio::test]
async fn test_create_success_refetches_once_and_closes_modal() {
    let mut api = MockApi::new();
    api.doctors.expect_create().return_ok(doctor("d1", "Dr. Ali"));
    api.doctors
        .expect_list()
        .return_ok(ListEnvelope::new(vec![doctor("d1", "Dr. Ali")]));

    let mut page = doctors_page(&api);
    page.open_create();
    page.edit(|d| d.with(DoctorField::Name, "Dr. Ali"));
    page.edit(|d| d.with(DoctorField::Specialty, "Pediatrics"));
    page.submit().await.unwrap();

    assert_eq!(api.doctors.count("create"), 1);
    assert_eq!(api.doctors.count("list"), 1);
    assert!(!page.modal().open);
    assert_eq!(page.modal().editing, None);
    assert_eq!(page.draft(), &DoctorDraft::default());
    assert_eq!(page.items().len(), 1);
    assert_eq!(page.alert(), None);

    let payload = api.doctors.requests()[0].payload.clone().unwrap();
    assert_eq!(payload["name"], "Dr. Ali");
    assert_eq!(payload["specialty"], "Pediatrics");
    api.verify();
}

#[tokio::test]
async fn test_create_failure_keeps_modal_and_skips_refetch() {
    let mut api = MockApi::new();
    api.doctors.expect_create().return_err(ApiError::Status {
        status: 409,
        message: Some("Doctor already exists".into()),
    });

    let mut page = doctors_page(&api);
    page.open_create();
    page.edit(|d| {
        d.with(DoctorField::Name, "Dr. Ali")
            .with(DoctorField::Specialty, "Pediatrics")
    });
    let err = page.submit().await.unwrap_err();

    assert!(matches!(err, AdminError::Api(_)));
    assert_eq!(api.doctors.count("list"), 0);
    assert!(page.modal().open);
    assert_eq!(page.draft().name, "Dr. Ali");
    assert_eq!(page.alert(), Some("Doctor already exists"));
    api.verify();
}

#[tokio::test]
async fn test_failure_without_server_message_uses_fallback() {
    let mut api = MockApi::new();
    api.doctors
        .expect_create()
        .return_err(ApiError::Transport("connection reset".into()));
    api.doctors
        .expect_delete("d1")
        .return_err(ApiError::Timeout(Duration::from_secs(10)));

    let mut page = doctors_page(&api);
    page.open_create();
    page.edit(|d| d.with(DoctorField::Name, "Dr. Ali").with(DoctorField::Specialty, "ENT"));
    assert!(page.submit().await.is_err());
    assert_eq!(page.alert(), Some("Error saving doctor"));

    assert!(page.delete("d1").await.is_err());
    assert_eq!(page.alert(), Some("Error deleting item"));
    assert_eq!(api.doctors.count("list"), 0);
    api.verify();
}

#[tokio::test]
async fn test_invalid_draft_sends_nothing() {
    let api = MockApi::new();
    let mut page = doctors_page(&api);
    page.open_create();
    page.edit(|d| d.with(DoctorField::Name, "Dr. Ali"));

    let err = page.submit().await.unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));
    assert_eq!(page.alert(), Some("specialty is required"));
    assert!(page.modal().open);
    assert!(api.doctors.requests().is_empty());
}

#[tokio::test]
async fn test_edit_updates_by_id_then_refetches() {
    let mut api = MockApi::new();
    let existing = Doctor {
        phone: Some("71 000 000".into()),
        ..doctor("d7", "Dr. Trabelsi")
    };
    api.doctors.expect_update("d7").return_ok(existing.clone());
    api.doctors
        .expect_list()
        .return_ok(ListEnvelope::new(vec![existing.clone()]));

    let mut page = doctors_page(&api);
    page.open_edit(&existing);
    assert_eq!(page.modal().editing.as_deref(), Some("d7"));
    assert_eq!(page.draft().phone, "71 000 000");

    page.edit(|d| d.with(DoctorField::City, "Sfax"));
    page.submit().await.unwrap();

    let update = &api.doctors.requests()[0];
    assert_eq!(update.kind, "update");
    assert_eq!(update.payload.as_ref().unwrap()["city"], "Sfax");
    assert!(!page.modal().open);
    api.verify();
}

#[tokio::test]
async fn test_delete_success_refetches() {
    let mut api = MockApi::new();
    api.doctors.expect_delete("d1").return_ok(());
    api.doctors.expect_list().return_ok(ListEnvelope::new(vec![]));

    let mut page = doctors_page(&api);
    page.delete("d1").await.unwrap();
    assert_eq!(api.doctors.count("list"), 1);
    api.verify();
}

#[tokio::test]
async fn test_failed_load_keeps_items_and_alerts() {
    let mut api = MockApi::new();
    api.users
        .expect_list()
        .return_ok(ListEnvelope::new(vec![User::located(Some("Tunis"), None)]));
    api.users.expect_list().return_err(ApiError::ActorClosed);

    let mut page = UsersPage::users(UserClient::new(api.users.client()));
    page.load().await;
    assert_eq!(page.items().len(), 1);
    assert_eq!(page.alert(), None);

    page.load().await;
    assert_eq!(page.items().len(), 1);
    assert_eq!(page.alert(), Some("Error fetching users"));
    assert!(!page.is_loading());
    api.verify();
}

#[tokio::test]
async fn test_user_create_validates_email() {
    let api = MockApi::new();
    let mut page = UsersPage::users(UserClient::new(api.users.client()));
    page.open_create();
    page.edit(|d| d.with(UserField::FirstName, "Amira").with(UserField::LastName, "B."));
    assert!(page.submit().await.is_err());
    assert_eq!(page.alert(), Some("email is required"));
    assert!(api.users.requests().is_empty());
}

// =============================================================================
// KIDS FILTER
// =============================================================================

#[tokio::test]
async fn test_kids_filter_by_parent() {
    let mut api = MockApi::new();
    let parent = User {
        id: Some("u1".into()),
        first_name: Some("Amira".into()),
        ..User::default()
    };
    api.users.expect_list().return_ok(ListEnvelope::new(vec![parent]));
    api.kids.expect_list().return_ok(ListEnvelope::new(vec![Kid::default(); 3]));
    api.kids.expect_list().return_ok(ListEnvelope::new(vec![Kid::default()]));

    let mut page = KidsPage::new(KidClient::new(api.kids.client()), UserClient::new(api.users.client()));
    page.mount().await;
    assert_eq!(page.parents().len(), 1);
    assert_eq!(page.list.items().len(), 3);

    page.select_parent(Some("u1".into())).await;
    assert_eq!(page.list.items().len(), 1);
    assert_eq!(page.selected_parent(), Some("u1"));
    let filtered = &api.kids.requests()[1];
    assert_eq!(filtered.query, Some(ListQuery::new().param("userId", "u1")));

    // Same filter again: no refetch.
    page.select_parent(Some("u1".into())).await;
    assert_eq!(api.kids.count("list"), 2);

    page.open_create();
    assert_eq!(page.list.draft(), &KidDraft::for_parent("u1"));
    page.list.edit(|d| d.with(KidField::Name, "Yassine"));
    assert_eq!(page.list.draft().user_id, "u1");
    api.verify();
}

// =============================================================================
// FEEDBACK FORM
// =============================================================================

#[tokio::test]
async fn test_feedback_form_success_and_failure() {
    let mut api = MockApi::new();
    api.feedback.expect_create().return_err(ApiError::Status {
        status: 500,
        message: Some("db down".into()),
    });
    api.feedback.expect_create().return_ok(feedback("f9"));

    let mut form = FeedbackForm::new(FeedbackClient::new(api.feedback.client()));
    form.edit(|d| {
        d.with(FeedbackField::Subject, "Games")
            .with(FeedbackField::Message, "My son loves them")
            .with_rating(5)
    });

    assert!(form.submit().await.is_err());
    let banner = form.banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.text, "Failed to submit feedback. Please try again.");
    assert_eq!(form.draft().subject, "Games");
    assert!(!form.is_submitting());

    form.submit().await.unwrap();
    let banner = form.banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(
        banner.text,
        "Thank you for your feedback! We appreciate your input."
    );
    assert_eq!(form.draft().subject, "");
    assert_eq!(form.draft().rating, 0);
    assert!(!form.is_submitting());
    api.verify();
}
