use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::debug;

use crate::action::Action;

/// Simulated backend round-trip for a submission: a single delayed
/// `SubmissionDone` on the action channel. There is no failure variant; an
/// aborted task simply never reports.
pub struct SubmissionService {
    tx: UnboundedSender<Action>,
    pending: Option<JoinHandle<()>>,
}

impl SubmissionService {
    pub fn new(tx: UnboundedSender<Action>) -> Self {
        Self { tx, pending: None }
    }

    /// Start the delay timer. A still-pending task is aborted first so the
    /// service can never fire twice for one submission; the session's phase
    /// gating makes that path unreachable in practice.
    pub fn schedule(&mut self, delay: Duration) {
        self.abort();
        debug!(delay_ms = delay.as_millis() as u64, "submission scheduled");
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Action::SubmissionDone);
        }));
    }

    /// Cancel the pending completion, if any. Called on reset and on app
    /// shutdown so a late timer cannot fire into a torn-down UI.
    pub fn abort(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!("pending submission aborted");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for SubmissionService {
    fn drop(&mut self) {
        self.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{self, error::TryRecvError};

    #[tokio::test(start_paused = true)]
    async fn fires_exactly_once_after_the_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut service = SubmissionService::new(tx);
        service.schedule(Duration::from_millis(1500));
        // Let the spawned task register its sleep before moving the clock.
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1499)).await;
        tokio::task::yield_now().await;
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

        tokio::time::advance(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(rx.try_recv(), Ok(Action::SubmissionDone));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn aborted_submission_never_reports() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut service = SubmissionService::new(tx);
        service.schedule(Duration::from_millis(1500));
        service.abort();
        assert!(!service.is_pending());

        tokio::time::advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_replaces_the_pending_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut service = SubmissionService::new(tx);
        service.schedule(Duration::from_millis(1500));
        service.schedule(Duration::from_millis(1500));
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1501)).await;
        tokio::task::yield_now().await;
        assert_eq!(rx.try_recv(), Ok(Action::SubmissionDone));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }
}
