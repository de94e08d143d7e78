//! # Overview Controller
//!
//! Holds the overview state (`loading`, snapshot, rollups, last refresh time) and
//! runs aggregation cycles into it.
//!
//! Cycles may overlap: the interval keeps ticking while a slow cycle is still in
//! flight, and the user can refresh by hand. Each cycle takes a generation number
//! when it starts. A completion is applied only if nothing newer has been applied
//! yet, and `loading` clears only when the most recently started cycle finishes.
//! After [`detach`](OverviewController::detach) every completion is dropped; only
//! `loading` still settles, so a detached page never reads as loading forever.

use crate::aggregation::{Aggregate, LocationRollup, StatsSnapshot};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// What the presentation layer reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewState {
    pub loading: bool,
    pub snapshot: StatsSnapshot,
    pub by_country: LocationRollup,
    pub by_city: LocationRollup,
    pub last_refreshed_at: Option<DateTime<Utc>>,
    /// Generation of the cycle that produced `snapshot`; `0` before the first one.
    pub generation: u64,
}

/// How a finished cycle was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer cycle had already been applied.
    Stale,
    /// The page went away while the cycle was running.
    Detached,
}

pub struct OverviewController<A: Aggregate> {
    engine: Arc<A>,
    state: RwLock<OverviewState>,
    started: AtomicU64,
    attached: AtomicBool,
}

impl<A: Aggregate> OverviewController<A> {
    pub fn new(engine: Arc<A>) -> Self {
        Self {
            engine,
            state: RwLock::new(OverviewState::default()),
            started: AtomicU64::new(0),
            attached: AtomicBool::new(true),
        }
    }

    /// A copy of the current state.
    pub async fn state(&self) -> OverviewState {
        self.state.read().await.clone()
    }

    /// Runs one aggregation cycle and applies it unless it has been overtaken.
    pub async fn refresh(&self) -> RefreshOutcome {
        let generation = self.started.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.loading = true;
        debug!(generation, "Refresh started");

        let aggregation = self.engine.run_aggregation().await;

        let mut state = self.state.write().await;
        if generation == self.started.load(Ordering::SeqCst) {
            state.loading = false;
        }

        if !self.attached.load(Ordering::SeqCst) {
            debug!(generation, "Refresh finished after detach, dropped");
            return RefreshOutcome::Detached;
        }

        if generation <= state.generation {
            debug!(generation, applied = state.generation, "Stale refresh dropped");
            return RefreshOutcome::Stale;
        }

        state.snapshot = aggregation.snapshot;
        state.by_country = aggregation.by_country;
        state.by_city = aggregation.by_city;
        state.last_refreshed_at = Some(Utc::now());
        state.generation = generation;
        info!(
            generation,
            users = state.snapshot.users,
            api_status = %state.snapshot.api_status,
            "Snapshot applied"
        );
        RefreshOutcome::Applied
    }

    /// Stops applying results; in-flight cycles finish but change nothing.
    pub fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
    }

    /// Resumes applying results after a [`detach`](Self::detach).
    pub fn attach(&self) {
        self.attached.store(true, Ordering::SeqCst);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }
}
