//! Allocation service: check-in and check-out.
//!
//! Each ticket moves through a tiny state machine:
//!
//! ```text
//! (no ticket) ── check_in ──► CHECKED_IN ── check_out ──► CHECKED_OUT (discarded)
//! ```
//!
//! Both operations are all-or-nothing. A failed check-in claims no spot and
//! registers no ticket; a failed check-out leaves the ticket open and the spot
//! occupied.

use crate::error::{ParkingError, Result};
use crate::facility::{Facility, FloorAvailability};
use crate::fee::FeeSchedule;
use crate::ticket::Ticket;
use crate::types::{Money, SpotId, TicketId, Vehicle};
use parking_core::environment::{Clock, IdGenerator, SystemClock, UuidGenerator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Environment dependencies for the allocation service
#[derive(Clone)]
pub struct ParkingEnvironment {
    /// Clock for ticket timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of ticket identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl ParkingEnvironment {
    /// Creates a new `ParkingEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Wall clock and random UUID ticket ids
    #[must_use]
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UuidGenerator))
    }
}

impl std::fmt::Debug for ParkingEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParkingEnvironment").finish_non_exhaustive()
    }
}

/// What the caller gets back when a vehicle leaves
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    /// Plate of the departing vehicle
    pub plate: String,
    /// Billable hours
    pub duration_hours: u64,
    /// Amount charged
    pub fee: Money,
    /// Spot the vehicle vacated
    pub spot_id: SpotId,
}

/// Orchestrates spot allocation and the ticket lifecycle for one facility
#[derive(Debug)]
pub struct ParkingService {
    facility: Facility,
    fees: FeeSchedule,
    env: ParkingEnvironment,
}

impl ParkingService {
    /// Creates a service that owns `facility`
    #[must_use]
    pub const fn new(facility: Facility, fees: FeeSchedule, env: ParkingEnvironment) -> Self {
        Self { facility, fees, env }
    }

    /// Read access to the facility
    #[must_use]
    pub const fn facility(&self) -> &Facility {
        &self.facility
    }

    /// Rate table in use
    #[must_use]
    pub const fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Open ticket with this id
    #[must_use]
    pub fn ticket(&self, id: &TicketId) -> Option<&Ticket> {
        self.facility.get_ticket(id)
    }

    /// Free and total spot counts per floor
    #[must_use]
    pub fn availability(&self) -> Vec<FloorAvailability> {
        self.facility.list_availability()
    }

    /// Parks `vehicle` in the first matching free spot and opens a ticket
    ///
    /// # Errors
    ///
    /// - [`ParkingError::NoAvailableSpot`] if no floor has a spot for this vehicle.
    /// - [`ParkingError::DuplicateTicket`] if the id generator repeats an active id.
    pub fn check_in(&mut self, vehicle: Vehicle) -> Result<Ticket> {
        let no_spot = || ParkingError::NoAvailableSpot {
            plate: vehicle.plate().to_string(),
            category: vehicle.category(),
        };

        let location = self.facility.find_spot(&vehicle).ok_or_else(no_spot)?;

        let id = TicketId::new(self.env.ids.next_id());
        if self.facility.get_ticket(&id).is_some() {
            return Err(ParkingError::DuplicateTicket(id));
        }

        let ticket = Ticket::new(id, vehicle.clone(), location.clone(), self.env.clock.now());

        let spot = self.facility.spot_mut(&location).ok_or_else(no_spot)?;
        spot.assign(vehicle)?;
        self.facility.add_ticket(ticket.clone())?;

        tracing::debug!(
            ticket_id = %ticket.id,
            plate = ticket.vehicle.plate(),
            category = %ticket.vehicle.category(),
            spot_id = %ticket.spot.spot_id,
            floor = ticket.spot.floor + 1,
            "vehicle checked in"
        );

        Ok(ticket)
    }

    /// Closes the ticket, frees its spot, and charges for the stay
    ///
    /// # Errors
    ///
    /// - [`ParkingError::InvalidTicket`] if the id is unknown or already checked out.
    /// - [`ParkingError::UnknownCategory`] if the fee table has no rate for the
    ///   vehicle; the ticket stays open.
    pub fn check_out(&mut self, ticket_id: &TicketId) -> Result<CheckoutReceipt> {
        let mut ticket = self
            .facility
            .get_ticket(ticket_id)
            .cloned()
            .ok_or_else(|| ParkingError::InvalidTicket(ticket_id.clone()))?;

        ticket.close(self.env.clock.now());
        let duration_hours = ticket.duration_hours();
        let fee = self
            .fees
            .calculate(ticket.vehicle.category(), duration_hours)?;

        if let Some(spot) = self.facility.spot_mut(&ticket.spot) {
            spot.release();
        }
        self.facility.close_ticket(ticket_id);

        tracing::debug!(
            ticket_id = %ticket.id,
            plate = ticket.vehicle.plate(),
            spot_id = %ticket.spot.spot_id,
            duration_hours,
            fee = %fee,
            "vehicle checked out"
        );

        Ok(CheckoutReceipt {
            plate: ticket.vehicle.plate().to_string(),
            duration_hours,
            fee,
            spot_id: ticket.spot.spot_id,
        })
    }
}
