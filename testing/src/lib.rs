//! # Parking Testing
//!
//! Testing utilities and helpers for the parking facility workspace.
//!
//! This crate provides:
//! - Deterministic implementations of the environment traits
//! - A controllable clock for stepping through parking sessions
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```
//! use parking_testing::{MockClock, SequentialIdGenerator, test_clock};
//! use parking_core::environment::{Clock, IdGenerator};
//! use chrono::Duration;
//!
//! let clock = MockClock::new(test_clock().now());
//! let start = clock.now();
//! clock.advance(Duration::minutes(90));
//! assert_eq!(clock.now() - start, Duration::minutes(90));
//!
//! let ids = SequentialIdGenerator::new("T");
//! assert_eq!(ids.next_id(), "T-0001");
//! ```

use chrono::{DateTime, Utc};
use parking_core::environment::{Clock, IdGenerator};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use parking_testing::mocks::FixedClock;
    /// use parking_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock that only moves when a test tells it to
    ///
    /// Resolution is one millisecond. Share it behind an `Arc` so the test
    /// keeps a handle while the service under test reads from it.
    #[derive(Debug)]
    pub struct MockClock {
        millis: AtomicI64,
    }

    impl MockClock {
        /// Create a clock frozen at `start`
        #[must_use]
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                millis: AtomicI64::new(start.timestamp_millis()),
            }
        }

        /// Move the clock forward (or backward, for a negative duration)
        pub fn advance(&self, by: chrono::Duration) {
            self.millis
                .fetch_add(by.num_milliseconds(), Ordering::SeqCst);
        }

        /// Jump to an absolute instant
        pub fn set(&self, to: DateTime<Utc>) {
            self.millis.store(to.timestamp_millis(), Ordering::SeqCst);
        }
    }

    impl Clock for MockClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst))
                .unwrap_or_default()
        }
    }

    /// Predictable identifiers: `{prefix}-0001`, `{prefix}-0002`, ...
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        prefix: String,
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id ends in `0001`
        #[must_use]
        pub fn new(prefix: impl Into<String>) -> Self {
            Self {
                prefix: prefix.into(),
                next: AtomicU64::new(1),
            }
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            format!("{}-{n:04}", self.prefix)
        }
    }

    /// Generator that hands out the same id forever
    ///
    /// Useful for exercising duplicate-key handling.
    #[derive(Debug, Clone)]
    pub struct ConstantIdGenerator(pub String);

    impl IdGenerator for ConstantIdGenerator {
        fn next_id(&self) -> String {
            self.0.clone()
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Milliseconds in one billable hour
    pub const HOUR_MS: i64 = 3_600_000;

    /// Licence plates shaped like `AB-1234`
    pub fn plate() -> impl Strategy<Value = String> {
        "[A-Z]{2}-[0-9]{4}"
    }

    /// Positive stay lengths from one millisecond up to a week
    pub fn stay_millis() -> impl Strategy<Value = i64> {
        1..=7 * 24 * HOUR_MS
    }
}

// Re-export commonly used items
pub use mocks::{ConstantIdGenerator, FixedClock, MockClock, SequentialIdGenerator, test_clock};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn mock_clock_advances_by_millisecond() {
        let clock = MockClock::new(test_clock().now());
        let start = clock.now();
        clock.advance(Duration::milliseconds(1));
        assert_eq!((clock.now() - start).num_milliseconds(), 1);
    }

    #[test]
    fn mock_clock_set_jumps() {
        let clock = MockClock::new(test_clock().now());
        let later = test_clock().now() + Duration::hours(5);
        clock.set(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn sequential_ids_are_padded_and_increasing() {
        let ids = SequentialIdGenerator::new("T");
        assert_eq!(ids.next_id(), "T-0001");
        assert_eq!(ids.next_id(), "T-0002");
    }

    #[test]
    fn constant_ids_repeat() {
        let ids = ConstantIdGenerator("dup".to_string());
        assert_eq!(ids.next_id(), ids.next_id());
    }
}
