//! Scoped background tasks.
//!
//! A [`Subscription`] owns one spawned task together with the
//! `watch::channel(false)` used to stop it. The task lives exactly as long as
//! its owner: dropping the subscription signals shutdown and aborts the task,
//! [`Subscription::shutdown`] does the same but waits for the task to finish.

use std::future::Future;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::message::Message;

/// How long [`Subscription::shutdown`] waits for a task before aborting it
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Handle to a running background task
#[derive(Debug)]
pub struct Subscription {
    name: &'static str,
    shutdown_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    /// Spawn `task` with a shutdown receiver. The task should return once the
    /// receiver flips to `true` (or its sender goes away).
    pub fn spawn<F, Fut>(name: &'static str, task: F) -> Self
    where
        F: FnOnce(watch::Receiver<bool>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        // Create the channel outside the task so both ends exist before it runs
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(task(shutdown_rx));
        debug!("Subscription '{}' started", name);
        Self {
            name,
            shutdown_tx,
            handle: Some(handle),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the task has already returned
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Signal the task to stop and wait for it, aborting after a grace period
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(mut handle) = self.handle.take() {
            match tokio::time::timeout(SHUTDOWN_GRACE, &mut handle).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) if e.is_cancelled() => {}
                Ok(Err(e)) => warn!("Subscription '{}' panicked: {}", self.name, e),
                Err(_) => {
                    warn!(
                        "Subscription '{}' did not stop within {:?}, aborting",
                        self.name, SHUTDOWN_GRACE
                    );
                    handle.abort();
                }
            }
        }
        debug!("Subscription '{}' shut down", self.name);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.shutdown_tx.send(true);
            handle.abort();
            debug!("Subscription '{}' dropped", self.name);
        }
    }
}

/// Spawn the carousel auto-advance timer.
///
/// Sends [`Message::AutoAdvance`] every `period`, first after one full period.
/// Manual navigation does not reset the schedule. The task stops on shutdown
/// or when the receiver side of `tx` is gone.
pub fn spawn_auto_advance(period: Duration, tx: mpsc::Sender<Message>) -> Subscription {
    Subscription::spawn("auto-advance", move |mut shutdown| async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = ticker.tick() => {
                    if tx.send(Message::AutoAdvance).await.is_err() {
                        // Event loop is gone
                        break;
                    }
                }
            }
        }
    })
}
