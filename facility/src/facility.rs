//! Facility directory: ordered floors plus the active-ticket map.

use crate::error::{ParkingError, Result};
use crate::floor::Floor;
use crate::spot::Spot;
use crate::ticket::{SpotLocation, Ticket};
use crate::types::{TicketId, Vehicle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occupancy snapshot of one floor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorAvailability {
    /// 1-based position of the floor in addition order
    pub floor: usize,
    /// Free spots
    pub available: usize,
    /// All spots
    pub total: usize,
}

/// All floors of one parking facility and the tickets currently open in it
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Facility {
    floors: Vec<Floor>,
    active_tickets: HashMap<TicketId, Ticket>,
}

impl Facility {
    /// Creates a facility with no floors
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`add_floor`](Self::add_floor)
    #[must_use]
    pub fn with_floor(mut self, floor: Floor) -> Self {
        self.add_floor(floor);
        self
    }

    /// Appends a floor; floors are searched in the order they were added
    pub fn add_floor(&mut self, floor: Floor) {
        self.floors.push(floor);
    }

    /// Floors in search order
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// First free spot `vehicle` may use, searching floors in order
    #[must_use]
    pub fn find_spot(&self, vehicle: &Vehicle) -> Option<SpotLocation> {
        self.floors.iter().enumerate().find_map(|(floor, level)| {
            level.find_available_slot(vehicle).and_then(|slot| {
                level.spot(slot).map(|spot| SpotLocation {
                    floor,
                    slot,
                    spot_id: spot.id().clone(),
                })
            })
        })
    }

    /// Spot at `location`
    #[must_use]
    pub fn spot(&self, location: &SpotLocation) -> Option<&Spot> {
        self.floors
            .get(location.floor)
            .and_then(|floor| floor.spot(location.slot))
    }

    pub(crate) fn spot_mut(&mut self, location: &SpotLocation) -> Option<&mut Spot> {
        self.floors
            .get_mut(location.floor)
            .and_then(|floor| floor.spot_mut(location.slot))
    }

    /// Registers an open ticket
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::DuplicateTicket`] if a ticket with the same id
    /// is already active; the existing ticket is kept.
    pub fn add_ticket(&mut self, ticket: Ticket) -> Result<()> {
        if self.active_tickets.contains_key(&ticket.id) {
            return Err(ParkingError::DuplicateTicket(ticket.id));
        }
        self.active_tickets.insert(ticket.id.clone(), ticket);
        Ok(())
    }

    /// Open ticket with this id
    #[must_use]
    pub fn get_ticket(&self, id: &TicketId) -> Option<&Ticket> {
        self.active_tickets.get(id)
    }

    /// Removes and returns the open ticket with this id
    pub fn close_ticket(&mut self, id: &TicketId) -> Option<Ticket> {
        self.active_tickets.remove(id)
    }

    /// Number of open tickets
    #[must_use]
    pub fn active_tickets(&self) -> usize {
        self.active_tickets.len()
    }

    /// Whether a vehicle with this plate holds an open ticket
    #[must_use]
    pub fn is_parked(&self, plate: &str) -> bool {
        self.active_tickets
            .values()
            .any(|ticket| ticket.vehicle.plate() == plate)
    }

    /// Free and total spot counts per floor
    #[must_use]
    pub fn list_availability(&self) -> Vec<FloorAvailability> {
        self.floors
            .iter()
            .enumerate()
            .map(|(position, floor)| FloorAvailability {
                floor: position + 1,
                available: floor.available_count(),
                total: floor.spots().len(),
            })
            .collect()
    }
}
