//! Auto-poll clipboard monitor

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::domain::capture::{CaptureResult, CaptureTrigger};
use crate::domain::schedule::Interval;

use super::capture::{CaptureError, ClipboardCaptureService};
use super::ports::{Clipboard, ClipboardError, Notifier, SelectionCopier, StorageRoot};

/// Outcome of one dispatched auto capture
pub type CaptureOutcome = Result<CaptureResult, CaptureError>;

/// Watches the clipboard change counter and captures every change.
///
/// The counter is the only state kept between ticks. Captures run on
/// their own tasks so the tick cadence never waits on a write.
pub struct ClipboardMonitor<C, P, S, N>
where
    C: Clipboard,
    P: SelectionCopier,
    S: StorageRoot,
    N: Notifier,
{
    service: Arc<ClipboardCaptureService<C, P, S, N>>,
    interval: Interval,
    last_seen: Option<u64>,
    shutdown: Arc<AtomicBool>,
}

impl<C, P, S, N> ClipboardMonitor<C, P, S, N>
where
    C: Clipboard + 'static,
    P: SelectionCopier + 'static,
    S: StorageRoot + 'static,
    N: Notifier + 'static,
{
    pub fn new(service: Arc<ClipboardCaptureService<C, P, S, N>>, interval: Interval) -> Self {
        Self {
            service,
            interval,
            last_seen: None,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops [`run`](Self::run) at the next tick once set
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    pub fn last_seen(&self) -> Option<u64> {
        self.last_seen
    }

    /// Record the current counter so content already on the clipboard is
    /// not captured.
    pub async fn prime(&mut self) -> Result<(), ClipboardError> {
        let count = self.service.clipboard().change_count().await?;
        debug!(count, "clipboard baseline taken");
        self.last_seen = Some(count);
        Ok(())
    }

    /// Compare the counter once and dispatch a capture if it moved.
    ///
    /// The first reading without a baseline only sets the baseline.
    pub async fn poll_once(&mut self) -> Option<JoinHandle<CaptureOutcome>> {
        let count = match self.service.clipboard().change_count().await {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "could not read clipboard change counter");
                return None;
            }
        };

        let previous = self.last_seen.replace(count);
        match previous {
            Some(previous) if previous != count => {
                debug!(previous, count, "clipboard changed");
                Some(self.dispatch())
            }
            _ => None,
        }
    }

    fn dispatch(&self) -> JoinHandle<CaptureOutcome> {
        let service = Arc::clone(&self.service);
        tokio::spawn(async move { service.capture(CaptureTrigger::AutoPoll, None).await })
    }

    /// Poll until the shutdown flag is set, handing each capture outcome
    /// to `on_result`. Captures still running at shutdown are awaited.
    pub async fn run<F>(&mut self, on_result: F)
    where
        F: Fn(CaptureOutcome) + Send + Sync + 'static,
    {
        if self.last_seen.is_none() {
            if let Err(e) = self.prime().await {
                warn!(error = %e, "clipboard baseline unavailable, first change may be missed");
            }
        }

        let on_result = Arc::new(on_result);
        let mut in_flight = JoinSet::new();
        let mut ticker = tokio::time::interval(self.interval.as_std());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if self.shutdown.load(Ordering::SeqCst) {
                debug!("monitor stopping");
                break;
            }

            while in_flight.try_join_next().is_some() {}

            if let Some(task) = self.poll_once().await {
                let on_result = Arc::clone(&on_result);
                in_flight.spawn(async move {
                    match task.await {
                        Ok(outcome) => on_result(outcome),
                        Err(e) => warn!(error = %e, "capture task failed"),
                    }
                });
            }
        }

        if !in_flight.is_empty() {
            debug!(pending = in_flight.len(), "waiting for captures in progress");
        }
        while in_flight.join_next().await.is_some() {}
    }
}
