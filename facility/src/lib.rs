//! Parking facility: spot allocation and the ticket lifecycle.
//!
//! Vehicles check in, receive the first free spot that suits them, and check
//! out with a fee based on how many (rounded-up) hours they stayed.
//!
//! # Architecture
//!
//! ```text
//! ParkingService ──► Facility ──► Floor ──► Spot
//!       │               │
//!       │               └─ active tickets
//!       └─► FeeSchedule
//! ```
//!
//! - [`Spot`]: one bay with a fixed [`SpotType`] and an optional occupant
//! - [`Floor`]: ordered spots plus the preference search
//! - [`Facility`]: ordered floors plus the active-ticket map
//! - [`FeeSchedule`]: hourly rate per [`VehicleCategory`]
//! - [`ParkingService`]: check-in / check-out orchestration
//!
//! # Quick Start
//!
//! ```
//! use parking_facility::{
//!     Facility, FeeSchedule, Floor, ParkingEnvironment, ParkingService, Spot, SpotType, Vehicle,
//! };
//!
//! # fn main() -> Result<(), parking_facility::ParkingError> {
//! let facility = Facility::new().with_floor(Floor::new(
//!     1,
//!     vec![
//!         Spot::new("M1", SpotType::Medium),
//!         Spot::new("H1", SpotType::Handicapped),
//!     ],
//! ));
//! let mut service =
//!     ParkingService::new(facility, FeeSchedule::default(), ParkingEnvironment::system());
//!
//! let ticket = service.check_in(Vehicle::car("D-1234", true))?;
//! assert_eq!(ticket.spot.spot_id.as_str(), "H1");
//!
//! let receipt = service.check_out(&ticket.id)?;
//! assert_eq!(receipt.spot_id.as_str(), "H1");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod facility;
pub mod fee;
pub mod floor;
pub mod service;
pub mod spot;
pub mod ticket;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{ParkingError, Result};
pub use facility::{Facility, FloorAvailability};
pub use fee::FeeSchedule;
pub use floor::Floor;
pub use service::{CheckoutReceipt, ParkingEnvironment, ParkingService};
pub use spot::Spot;
pub use ticket::{SpotLocation, Ticket};
pub use types::{Money, SpotId, SpotType, TicketId, Vehicle, VehicleCategory};
