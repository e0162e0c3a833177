//! Cancellable periodic poll loop

use std::future::Future;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{self, Either};

/// Stops the poll loop when stopped or dropped
#[derive(Debug)]
pub struct PollHandle {
    stop: Option<oneshot::Sender<()>>,
}

impl PollHandle {
    /// Create a handle and the receiver the loop listens on
    pub fn new() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { stop: Some(tx) }, rx)
    }

    /// End the loop before its next tick
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop.take() {
            log::debug!("Stopping poll loop");
            let _ = tx.send(());
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_none()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sleep, then tick, until `stop` fires or its sender goes away.
///
/// `sleep` is injected so the loop runs under any executor.
pub async fn run_poll_loop<S, SF, T, TF>(
    interval: Duration,
    mut stop: oneshot::Receiver<()>,
    mut sleep: S,
    mut tick: T,
) where
    S: FnMut(Duration) -> SF,
    SF: Future<Output = ()>,
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
{
    loop {
        let delay = Box::pin(sleep(interval));
        if let Either::Left(_) = future::select(&mut stop, delay).await {
            break;
        }

        // A stop may land while the sleep completes in the same turn
        if !matches!(stop.try_recv(), Ok(None)) {
            break;
        }

        tick().await;
    }
    log::debug!("Poll loop finished");
}

/// Spawn the loop on the browser event loop
#[cfg(target_arch = "wasm32")]
pub fn start<T, TF>(interval: Duration, tick: T) -> PollHandle
where
    T: FnMut() -> TF + 'static,
    TF: Future<Output = ()> + 'static,
{
    let (handle, stop) = PollHandle::new();
    log::info!("Polling every {}s", interval.as_secs());
    leptos::spawn_local(run_poll_loop(
        interval,
        stop,
        gloo_timers::future::sleep,
        tick,
    ));
    handle
}
