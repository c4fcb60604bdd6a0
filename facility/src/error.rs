//! Error types for spot allocation and the ticket lifecycle.

use crate::types::{SpotId, TicketId, VehicleCategory};
use thiserror::Error;

/// Result type alias for parking operations.
pub type Result<T> = std::result::Result<T, ParkingError>;

/// Every way a parking operation can fail.
///
/// Failures are returned to the immediate caller and never retried here. A
/// failed operation leaves the facility exactly as it found it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParkingError {
    // ═══════════════════════════════════════════════════════════
    // Construction Errors
    // ═══════════════════════════════════════════════════════════

    /// Spot type name is not one of the recognized types.
    #[error("Invalid spot type: {0}")]
    InvalidSpotType(String),

    /// Vehicle category name is not one of the recognized categories.
    #[error("Invalid vehicle category: {0}")]
    InvalidVehicleCategory(String),

    // ═══════════════════════════════════════════════════════════
    // Runtime Errors
    // ═══════════════════════════════════════════════════════════

    /// No floor has a free spot this vehicle may use. Recoverable.
    #[error("No available spot for {category} {plate}")]
    NoAvailableSpot {
        /// Plate of the rejected vehicle
        plate: String,
        /// Category of the rejected vehicle
        category: VehicleCategory,
    },

    /// Ticket id is unknown or was already checked out.
    #[error("Invalid ticket ID: {0}")]
    InvalidTicket(TicketId),

    /// Spot already holds a vehicle.
    #[error("Spot {0} is already occupied")]
    SpotAlreadyOccupied(SpotId),

    /// Ticket id is already registered as active.
    #[error("Ticket {0} is already active")]
    DuplicateTicket(TicketId),

    // ═══════════════════════════════════════════════════════════
    // Configuration Errors
    // ═══════════════════════════════════════════════════════════

    /// Fee table has no rate for a category in use.
    #[error("Unknown vehicle category for fee calculation: {0}")]
    UnknownCategory(VehicleCategory),
}
