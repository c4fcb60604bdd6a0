//! # Parking Core
//!
//! Injected dependencies shared by the parking facility crates.
//!
//! Domain code never reads the wall clock or mints identifiers directly. It asks
//! an environment for them, so tests can swap in deterministic implementations
//! (see `parking-testing`).
//!
//! ## Example
//!
//! ```
//! use parking_core::environment::{Clock, IdGenerator, SystemClock, UuidGenerator};
//!
//! let clock = SystemClock;
//! let ids = UuidGenerator;
//!
//! let issued_at = clock.now();
//! let ticket = ids.next_id();
//! assert!(!ticket.is_empty());
//! assert!(clock.now() >= issued_at);
//! ```

/// Environment module - Dependency injection traits
///
/// All sources of non-determinism (time, identifiers) are abstracted behind
/// traits and injected into services through an environment struct.
pub mod environment {
    use chrono::{DateTime, SubsecRound, Utc};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - uses system clock
    /// struct SystemClock;
    /// impl Clock for SystemClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         Utc::now()
    ///     }
    /// }
    ///
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Wall-clock time source, truncated to millisecond resolution
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now().trunc_subsecs(3)
        }
    }

    /// Source of opaque, collision-resistant identifiers
    pub trait IdGenerator: Send + Sync {
        /// Produce the next identifier
        fn next_id(&self) -> String;
    }

    /// Random UUID v4 identifiers
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> String {
            Uuid::new_v4().to_string()
        }
    }
}
