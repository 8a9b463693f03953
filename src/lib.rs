//! Assertion helpers for verifying that code under test emitted specific
//! `tracing` log calls, by severity level, message substring, and count.
//!
//! A test installs a recording subscriber with [`capture`], exercises the
//! code under test, then asserts against the recorded history:
//!
//! ```
//! use tracing_verify::capture;
//!
//! let (logs, _guard) = capture();
//!
//! tracing::warn!("disk usage at 93%");
//!
//! logs.verify_at_least_one_warn_log_contains("disk usage").unwrap();
//! logs.verify_warn_log_contains("disk usage", 1).unwrap();
//! ```

pub mod capture;
pub mod record;
pub mod verify;

pub use capture::{capture, CaptureGuard, CapturedLogs, RecordingLayer};
pub use record::LogRecord;
pub use verify::{Expectation, VerificationError, VerificationResult};
