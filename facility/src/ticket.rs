//! Parking tickets: one record per active session.

use crate::types::{SpotId, TicketId, Vehicle};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Where a spot lives inside a facility
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotLocation {
    /// Position of the floor in addition order (0-based)
    pub floor: usize,
    /// Position of the spot on its floor (0-based)
    pub slot: usize,
    /// Identifier of the spot
    pub spot_id: SpotId,
}

/// An open (or just closed) parking session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket identifier
    pub id: TicketId,
    /// Parked vehicle
    pub vehicle: Vehicle,
    /// Spot the vehicle occupies
    pub spot: SpotLocation,
    /// When the vehicle checked in
    pub started_at: DateTime<Utc>,
    /// When the vehicle checked out, once it has
    pub ended_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Opens a ticket
    #[must_use]
    pub const fn new(
        id: TicketId,
        vehicle: Vehicle,
        spot: SpotLocation,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            vehicle,
            spot,
            started_at,
            ended_at: None,
        }
    }

    /// Stamps the end of the session
    pub fn close(&mut self, ended_at: DateTime<Utc>) {
        self.ended_at = Some(ended_at);
    }

    /// True once [`close`](Self::close) has been called
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.ended_at.is_some()
    }

    /// Billable hours, rounding any partial hour up
    ///
    /// Any positive stay, however short, bills at least one hour. Zero while
    /// the ticket is open, and zero if the clock went backwards.
    #[must_use]
    pub fn duration_hours(&self) -> u64 {
        let Some(ended_at) = self.ended_at else {
            return 0;
        };
        let elapsed = ended_at - self.started_at;
        if elapsed <= TimeDelta::zero() {
            return 0;
        }
        let whole = elapsed.num_hours();
        let partial = elapsed > TimeDelta::hours(whole);
        u64::try_from(whole).map_or(0, |hours| hours + u64::from(partial))
    }
}
