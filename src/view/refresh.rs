//! # Interval Refresh
//!
//! [`RefreshTask`] owns the polling loop behind the dashboard. The first cycle runs
//! as soon as the task starts, then one per period. [`stop`](RefreshTask::stop)
//! lets a running cycle finish and waits for the loop to exit; dropping the handle
//! aborts the loop instead.

use super::overview::OverviewController;
use crate::aggregation::Aggregate;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Something the interval drives.
#[async_trait]
pub trait Refresh: Send + Sync + 'static {
    async fn run_cycle(&self);
}

#[async_trait]
impl<A: Aggregate> Refresh for OverviewController<A> {
    async fn run_cycle(&self) {
        let outcome = self.refresh().await;
        debug!(?outcome, "Interval refresh done");
    }
}

/// Handle to a running polling loop.
pub struct RefreshTask {
    stop: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTask {
    /// Spawns the loop. Must be called from within a Tokio runtime.
    pub fn start<R: Refresh>(target: Arc<R>, period: Duration) -> Self {
        let (stop, mut stopped) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(period_secs = period.as_secs_f64(), "Refresh task started");

            let mut cycles: u64 = 0;
            loop {
                tokio::select! {
                    biased;
                    _ = &mut stopped => break,
                    _ = ticker.tick() => {
                        cycles += 1;
                        target.run_cycle().await;
                    }
                }
            }
            info!(cycles, "Refresh task stopped");
        });

        Self {
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Signals the loop and waits for it to exit. No cycle starts afterwards.
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Refresh task ended abnormally");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
