//! A trailing-edge debounce scheduler.
//!
//! Runs as a background tokio task that waits for calls on a channel; each
//! call restarts the quiet period, and only the last value in a burst is
//! handed to the action. The pending call can be cancelled or flushed early,
//! and dropping the scheduler cancels it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{timeout_at, Instant};

enum Msg<T> {
    Call(T),
    Cancel,
    Flush,
}

/// Debounced invocation of one action.
pub struct Debounce<T> {
    tx: mpsc::UnboundedSender<Msg<T>>,
}

impl<T: Send + 'static> Debounce<T> {
    /// Spawn the scheduler. Must be called within a tokio runtime.
    pub fn new(delay: Duration, action: impl Fn(T) + Send + 'static) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(delay, rx, action));
        Self { tx }
    }

    /// Schedule the action with `value`, restarting the quiet period.
    pub fn call(&self, value: T) {
        let _ = self.tx.send(Msg::Call(value));
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        let _ = self.tx.send(Msg::Cancel);
    }

    /// Run the pending call immediately instead of waiting out the quiet
    /// period. No-op when nothing is pending.
    pub fn flush(&self) {
        let _ = self.tx.send(Msg::Flush);
    }
}

async fn run<T>(delay: Duration, mut rx: mpsc::UnboundedReceiver<Msg<T>>, action: impl Fn(T)) {
    let mut pending: Option<T> = None;
    let mut deadline: Option<Instant> = None;
    loop {
        let msg = match deadline {
            Some(at) => match timeout_at(at, rx.recv()).await {
                Ok(msg) => msg,
                Err(_) => {
                    deadline = None;
                    if let Some(value) = pending.take() {
                        action(value);
                    }
                    continue;
                }
            },
            None => rx.recv().await,
        };
        // channel closed: the handle was dropped, pending work is abandoned
        let Some(msg) = msg else { break };
        match msg {
            Msg::Call(value) => {
                pending = Some(value);
                deadline = Some(Instant::now() + delay);
            }
            Msg::Cancel => {
                pending = None;
                deadline = None;
            }
            Msg::Flush => {
                deadline = None;
                if let Some(value) = pending.take() {
                    action(value);
                }
            }
        }
    }
}
