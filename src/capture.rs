//! Recording test double for the `tracing` subscriber surface.
//!
//! # Data Flow
//! ```text
//! code under test emits tracing events
//!     → RecordingLayer::on_event (convert to LogRecord)
//!     → shared in-memory history
//!     → CapturedLogs verification methods read the history
//! ```
//!
//! # Design Decisions
//! - Installed per test via `set_default` (thread-scoped), never globally,
//!   so parallel tests each see only their own history
//! - All levels are recorded; filtering happens at verification time
//! - Lock poisoning is absorbed so a panicking test cannot wedge the
//!   assertions that run after it

use std::sync::{Arc, Mutex, PoisonError};

use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

use crate::record::LogRecord;

type History = Arc<Mutex<Vec<LogRecord>>>;

/// A `tracing_subscriber` layer that appends every observed event to an
/// in-memory ordered history.
pub struct RecordingLayer {
    history: History,
}

impl RecordingLayer {
    /// Creates a layer together with the handle that reads its history.
    ///
    /// Use this form to compose the layer into a subscriber of your own;
    /// most tests want [`capture`] instead.
    pub fn new() -> (Self, CapturedLogs) {
        let history = History::default();
        (
            Self {
                history: Arc::clone(&history),
            },
            CapturedLogs { history },
        )
    }
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let record = LogRecord::from_event(event);
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

/// Cloneable handle over the recorded call history.
///
/// Verification methods live in [`crate::verify`].
#[derive(Clone, Debug)]
pub struct CapturedLogs {
    history: History,
}

impl CapturedLogs {
    /// Returns a snapshot of the history, in recording order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards the recorded history.
    pub fn clear(&self) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Keeps the recording subscriber installed for the current thread.
/// Recording stops when the guard is dropped.
pub struct CaptureGuard {
    _guard: DefaultGuard,
}

/// Installs a fresh recording subscriber for the current test and returns
/// the handle to its history.
///
/// The subscriber is thread-scoped: it only sees events emitted on the
/// calling thread while the guard is alive.
pub fn capture() -> (CapturedLogs, CaptureGuard) {
    let (layer, logs) = RecordingLayer::new();
    let subscriber = Registry::default().with(layer);
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, CaptureGuard { _guard: guard })
}
