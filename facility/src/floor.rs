//! Per-floor spot search.
//!
//! A floor tries each spot type from the vehicle's preference list in turn and
//! takes the first free spot of that type, in the order the spots were added.
//! Not finding one is an ordinary outcome, reported as `None`.

use crate::spot::Spot;
use crate::types::{SpotType, Vehicle, VehicleCategory};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered spot types tried for one vehicle
pub type PreferenceList = SmallVec<[SpotType; 5]>;

/// Builds the ordered list of spot types to try for `vehicle`
///
/// Accessible spots come first for disabled drivers, then chargers for
/// electric cars, then the category's size fallbacks.
///
/// ```
/// use parking_facility::{floor::preference_list, SpotType, Vehicle};
///
/// let prefs = preference_list(&Vehicle::electric("E-1", true));
/// assert_eq!(
///     prefs.as_slice(),
///     &[SpotType::Handicapped, SpotType::Charging, SpotType::Medium, SpotType::Large]
/// );
/// ```
#[must_use]
pub fn preference_list(vehicle: &Vehicle) -> PreferenceList {
    let mut preferences = PreferenceList::new();
    if vehicle.is_disabled() {
        preferences.push(SpotType::Handicapped);
    }
    if vehicle.category() == VehicleCategory::Electric {
        preferences.push(SpotType::Charging);
    }
    preferences.extend_from_slice(vehicle.category().fallback_spot_types());
    preferences
}

/// One level of the facility
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    index: u32,
    spots: Vec<Spot>,
}

impl Floor {
    /// Creates a floor; `spots` order is the scan order
    #[must_use]
    pub const fn new(index: u32, spots: Vec<Spot>) -> Self {
        Self { index, spots }
    }

    /// Floor number given at construction
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Spots in scan order
    #[must_use]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Spot at `slot`, if the slot exists
    #[must_use]
    pub fn spot(&self, slot: usize) -> Option<&Spot> {
        self.spots.get(slot)
    }

    pub(crate) fn spot_mut(&mut self, slot: usize) -> Option<&mut Spot> {
        self.spots.get_mut(slot)
    }

    /// Number of spots currently free
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.spots.iter().filter(|spot| spot.is_available()).count()
    }

    /// Position of the spot `vehicle` should take on this floor
    #[must_use]
    pub fn find_available_slot(&self, vehicle: &Vehicle) -> Option<usize> {
        preference_list(vehicle).into_iter().find_map(|wanted| {
            self.spots
                .iter()
                .position(|spot| spot.kind() == wanted && spot.is_available())
        })
    }

    /// The spot `vehicle` should take on this floor
    #[must_use]
    pub fn find_available_spot(&self, vehicle: &Vehicle) -> Option<&Spot> {
        self.find_available_slot(vehicle)
            .and_then(|slot| self.spots.get(slot))
    }
}
