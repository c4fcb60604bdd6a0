//! Individual parking spots and their occupancy.

use crate::error::{ParkingError, Result};
use crate::types::{SpotId, SpotType, Vehicle};
use serde::{Deserialize, Serialize};

/// A single parking spot
///
/// Occupancy is the presence of a vehicle; there is no separate flag that
/// could drift out of sync with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    id: SpotId,
    kind: SpotType,
    vehicle: Option<Vehicle>,
}

impl Spot {
    /// Creates an empty spot
    #[must_use]
    pub fn new(id: impl Into<SpotId>, kind: SpotType) -> Self {
        Self {
            id: id.into(),
            kind,
            vehicle: None,
        }
    }

    /// Creates an empty spot from a spot type name
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::InvalidSpotType`] if `kind` is not a recognized type.
    pub fn parse(id: impl Into<SpotId>, kind: &str) -> Result<Self> {
        Ok(Self::new(id, kind.parse()?))
    }

    /// Spot identifier
    #[must_use]
    pub const fn id(&self) -> &SpotId {
        &self.id
    }

    /// Spot type
    #[must_use]
    pub const fn kind(&self) -> SpotType {
        self.kind
    }

    /// Vehicle currently parked here, if any
    #[must_use]
    pub const fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// True when no vehicle is parked here
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.vehicle.is_none()
    }

    /// Parks `vehicle` in this spot
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::SpotAlreadyOccupied`] if another vehicle is
    /// already here; the current occupant is left in place.
    pub fn assign(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.vehicle.is_some() {
            return Err(ParkingError::SpotAlreadyOccupied(self.id.clone()));
        }
        self.vehicle = Some(vehicle);
        Ok(())
    }

    /// Empties the spot, handing back whoever was parked (`None` if vacant)
    pub fn release(&mut self) -> Option<Vehicle> {
        self.vehicle.take()
    }
}
