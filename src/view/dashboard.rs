use super::overview::{OverviewController, OverviewState};
use super::refresh::RefreshTask;
use crate::aggregation::Aggregate;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// The main dashboard: the overview kept fresh on an interval while mounted.
pub struct Dashboard<A: Aggregate> {
    controller: Arc<OverviewController<A>>,
    interval: Duration,
    task: Option<RefreshTask>,
}

impl<A: Aggregate> Dashboard<A> {
    pub fn new(engine: Arc<A>, interval: Duration) -> Self {
        Self {
            controller: Arc::new(OverviewController::new(engine)),
            interval,
            task: None,
        }
    }

    /// Starts the refresh loop; the first cycle runs immediately.
    /// Mounting an already mounted dashboard does nothing.
    pub fn mount(&mut self) {
        if self.task.is_some() {
            return;
        }
        info!(interval_secs = self.interval.as_secs(), "Dashboard mounted");
        self.controller.attach();
        self.task = Some(RefreshTask::start(self.controller.clone(), self.interval));
    }

    /// Stops the loop and drops any cycle still in flight.
    pub async fn unmount(&mut self) {
        self.controller.detach();
        if let Some(task) = self.task.take() {
            task.stop().await;
            info!("Dashboard unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.task.is_some()
    }

    pub async fn state(&self) -> OverviewState {
        self.controller.state().await
    }

    /// Manual refresh, alongside the interval.
    pub fn controller(&self) -> &Arc<OverviewController<A>> {
        &self.controller
    }
}
