//! Verification of recorded log calls.
//!
//! # Responsibilities
//! - Match recorded calls against an expectation (level + message substring)
//! - Assert at-least-one and exact-count occurrence requirements
//! - Provide level-bound convenience wrappers for the common severities
//!
//! # Design Decisions
//! - Matching runs over the rendered message (message plus structured
//!   fields), case-sensitive, exact containment, no regex
//! - An empty needle matches every record at the given level
//! - Methods return the handle on success so verifications chain
//! - A failed verification is an error, never recovered or retried

use std::fmt;

use thiserror::Error;
use tracing::Level;

use crate::capture::CapturedLogs;
use crate::record::LogRecord;

/// What a verification call expects to find in the history.
#[derive(Debug, Clone)]
pub struct Expectation {
    /// Required severity; `None` matches any level.
    pub level: Option<Level>,
    /// Substring the rendered message must contain.
    pub needle: String,
}

impl Expectation {
    fn new(level: Option<Level>, needle: &str) -> Self {
        Self {
            level,
            needle: needle.to_string(),
        }
    }

    /// Returns true if `record` satisfies this expectation.
    pub fn matches(&self, record: &LogRecord) -> bool {
        self.level.map_or(true, |level| record.level == level)
            && record.rendered.contains(&self.needle)
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Some(level) => write!(f, "{level} log containing {:?}", self.needle),
            None => write!(f, "log at any level containing {:?}", self.needle),
        }
    }
}

/// Errors raised when the recorded history does not satisfy an expectation.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// No recorded call matched an at-least-one expectation.
    #[error("expected at least one {expectation}, found none among {recorded} recorded calls")]
    NoMatchingCall {
        /// The unmet expectation.
        expectation: Expectation,
        /// Total number of recorded calls inspected.
        recorded: usize,
    },

    /// The number of matching calls differed from the required count.
    #[error("expected exactly {expected} calls matching {expectation}, found {actual}")]
    CallCountMismatch {
        /// The expectation that was counted.
        expectation: Expectation,
        /// Required number of matching calls.
        expected: usize,
        /// Matching calls actually recorded.
        actual: usize,
    },
}

/// Result type for verification calls. Success carries the handle back so
/// verifications chain.
pub type VerificationResult<'a> = Result<&'a CapturedLogs, VerificationError>;

impl CapturedLogs {
    fn count_matching(&self, expectation: &Expectation) -> usize {
        self.records()
            .iter()
            .filter(|record| expectation.matches(record))
            .count()
    }

    /// Verifies that at least one recorded call matches `(level, needle)`.
    /// A `None` level matches any severity.
    pub fn verify_at_least_one(&self, level: Option<Level>, needle: &str) -> VerificationResult<'_> {
        let expectation = Expectation::new(level, needle);
        if self.count_matching(&expectation) >= 1 {
            Ok(self)
        } else {
            Err(VerificationError::NoMatchingCall {
                expectation,
                recorded: self.len(),
            })
        }
    }

    /// Verifies that exactly `count` recorded calls match `(level, needle)`.
    /// A `None` level matches any severity; `count == 0` succeeds only when
    /// nothing matches.
    pub fn verify_count(
        &self,
        level: Option<Level>,
        needle: &str,
        count: usize,
    ) -> VerificationResult<'_> {
        let expectation = Expectation::new(level, needle);
        let actual = self.count_matching(&expectation);
        if actual == count {
            Ok(self)
        } else {
            Err(VerificationError::CallCountMismatch {
                expectation,
                expected: count,
                actual,
            })
        }
    }

    /// Verifies that at least one log at any level contains the message.
    pub fn verify_log_contains(&self, needle: &str) -> VerificationResult<'_> {
        self.verify_at_least_one(None, needle)
    }

    /// Verifies that exactly `count` logs at any level contain the message.
    pub fn verify_log_contains_times(&self, needle: &str, count: usize) -> VerificationResult<'_> {
        self.verify_count(None, needle, count)
    }

    /// Verifies that at least one debug log contains the message.
    pub fn verify_at_least_one_debug_log_contains(&self, needle: &str) -> VerificationResult<'_> {
        self.verify_at_least_one(Some(Level::DEBUG), needle)
    }

    /// Verifies that at least one info log contains the message.
    pub fn verify_at_least_one_info_log_contains(&self, needle: &str) -> VerificationResult<'_> {
        self.verify_at_least_one(Some(Level::INFO), needle)
    }

    /// Verifies that at least one warn log contains the message.
    pub fn verify_at_least_one_warn_log_contains(&self, needle: &str) -> VerificationResult<'_> {
        self.verify_at_least_one(Some(Level::WARN), needle)
    }

    /// Verifies that at least one error log contains the message.
    pub fn verify_at_least_one_error_log_contains(&self, needle: &str) -> VerificationResult<'_> {
        self.verify_at_least_one(Some(Level::ERROR), needle)
    }

    /// Verifies that exactly `count` debug logs contain the message.
    pub fn verify_debug_log_contains(&self, needle: &str, count: usize) -> VerificationResult<'_> {
        self.verify_count(Some(Level::DEBUG), needle, count)
    }

    /// Verifies that exactly `count` info logs contain the message.
    pub fn verify_info_log_contains(&self, needle: &str, count: usize) -> VerificationResult<'_> {
        self.verify_count(Some(Level::INFO), needle, count)
    }

    /// Verifies that exactly `count` warn logs contain the message.
    pub fn verify_warn_log_contains(&self, needle: &str, count: usize) -> VerificationResult<'_> {
        self.verify_count(Some(Level::WARN), needle, count)
    }

    /// Verifies that exactly `count` error logs contain the message.
    pub fn verify_error_log_contains(&self, needle: &str, count: usize) -> VerificationResult<'_> {
        self.verify_count(Some(Level::ERROR), needle, count)
    }
}
