//! Change notification for shared UI state.
//!
//! Every registry mutates synchronously, so a read after a write always sees
//! the new value. Subscribers additionally receive a wakeup signal so a render
//! loop can block while idle and re-read the effective state when something
//! changed.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

const CHANNEL_CAPACITY: usize = 16;

/// Receiving end of a registry subscription.
#[derive(Debug)]
pub struct Subscription {
    rx: mpsc::Receiver<()>,
}

impl Subscription {
    /// Wait for the next change signal.
    ///
    /// Returns `None` once the registry and all its handles are dropped.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Check for a pending change signal without waiting.
    pub fn try_recv(&mut self) -> bool {
        self.rx.try_recv().is_ok()
    }

    /// Drain all pending change signals, returning how many were buffered.
    ///
    /// Multiple buffered signals collapse into a single re-read.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

/// Fan-out of change signals to every live subscription.
#[derive(Debug, Default, Clone)]
pub struct Notifier {
    subscribers: Arc<Mutex<Vec<mpsc::Sender<()>>>>,
}

impl Notifier {
    /// Create a notifier with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        Subscription { rx }
    }

    /// Signal every subscriber.
    ///
    /// Never blocks. A full channel already holds a pending wakeup, so the
    /// signal is dropped; a closed channel is pruned.
    pub fn notify(&self) {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|tx| !matches!(tx.try_send(()), Err(TrySendError::Closed(_))));
    }

    /// Number of subscribers that have not been dropped yet.
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }
}
