//! Screen lifetime tracking.
//!
//! A screen owns one [`ScreenLifetime`]. Long-running effects hold a
//! [`LifetimeHandle`] and stop when the screen is torn down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

pub struct ScreenLifetime {
    ended: Arc<AtomicBool>,
    notify: Arc<Notify>,
    name: &'static str,
}

impl ScreenLifetime {
    pub fn new(name: &'static str) -> Self {
        Self {
            ended: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
            name,
        }
    }

    /// Tear the screen down. Idempotent.
    pub fn end(&self) {
        if !self.ended.swap(true, Ordering::SeqCst) {
            tracing::debug!(screen = self.name, "screen torn down");
            self.notify.notify_waiters();
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Create a handle for sharing with tasks.
    pub fn handle(&self) -> LifetimeHandle {
        LifetimeHandle {
            ended: Arc::clone(&self.ended),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Drop for ScreenLifetime {
    fn drop(&mut self) {
        self.end();
    }
}

/// Lightweight handle for observing a screen's lifetime.
#[derive(Clone)]
pub struct LifetimeHandle {
    ended: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl LifetimeHandle {
    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }

    /// Resolve once the screen has been torn down.
    pub async fn ended(&self) {
        // Register before checking the flag so an `end()` between the
        // check and the await is not lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_ended() {
            return;
        }
        notified.await;
    }
}
