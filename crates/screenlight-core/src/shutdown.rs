//! Bridges external termination signals into the dispatch thread.
//!
//! The OS delivers console control events on a thread it owns. The
//! coordinator running there only flips an atomic flag and pokes the
//! dispatch thread through a notifier; it never touches window state.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::log_info;

/// How long the signal thread waits for the dispatch thread to tear down.
pub const GRACE_PERIOD: Duration = Duration::from_secs(1);

/// A one-shot, process-wide shutdown request.
///
/// Clones share the same flag. Only the signal thread writes it.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    requested: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag. Returns `true` only for the call that set it first.
    pub fn request(&self) -> bool {
        !self.requested.swap(true, Ordering::SeqCst)
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

/// An external termination signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Ctrl+C.
    Interrupt,
    /// Ctrl+Break.
    Break,
    /// The console window was closed.
    ConsoleClose,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interrupt => "interrupt",
            Self::Break => "break",
            Self::ConsoleClose => "console close",
        };
        f.write_str(name)
    }
}

type Notifier = Box<dyn Fn() + Send + Sync>;

/// Handles termination signals on the OS signal thread.
pub struct ShutdownCoordinator {
    signal: ShutdownSignal,
    notify: Notifier,
    grace: Duration,
}

impl ShutdownCoordinator {
    /// Creates a coordinator that sets `signal` and then calls `notify`,
    /// which should wake the dispatch thread (e.g. post a message).
    pub fn new(signal: ShutdownSignal, notify: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            signal,
            notify: Box::new(notify),
            grace: GRACE_PERIOD,
        }
    }

    /// Overrides the grace period.
    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    pub fn signal(&self) -> &ShutdownSignal {
        &self.signal
    }

    /// Runs on the signal thread. Always reports the signal as handled.
    ///
    /// The first signal sets the flag and notifies the dispatch thread.
    /// Every call then blocks for the grace period so teardown can finish
    /// before the OS ends the process.
    pub fn on_signal(&self, kind: SignalKind) -> bool {
        log_info!("Shutdown signal received ({kind}). Shutting down gracefully.");
        if self.signal.request() {
            (self.notify)();
        }
        if !self.grace.is_zero() {
            thread::sleep(self.grace);
        }
        true
    }
}
