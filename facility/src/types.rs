//! Domain types for the parking facility.
//!
//! Identifiers, the closed spot-type and vehicle-category sets, vehicles, and
//! money. Category-specific behaviour is keyed off [`VehicleCategory`] through
//! lookup tables rather than a type hierarchy.

use crate::error::ParkingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a single parking spot (e.g. `"M1"`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotId(String);

impl SpotId {
    /// Creates a `SpotId` from any string-like value
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpotId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SpotId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque identifier of a parking ticket
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(String);

impl TicketId {
    /// Creates a `TicketId` from any string-like value
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// ============================================================================
// Spot types and vehicle categories
// ============================================================================

/// Physical kind of a parking spot, fixed when the spot is created
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotType {
    /// Motorcycle-sized bay
    Small,
    /// Regular car bay
    Medium,
    /// Bus or oversized bay
    Large,
    /// Accessible bay
    Handicapped,
    /// Bay with an EV charger
    Charging,
}

impl SpotType {
    /// Every recognized spot type
    pub const ALL: [Self; 5] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Handicapped,
        Self::Charging,
    ];

    /// Lowercase name used for parsing and display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Handicapped => "handicapped",
            Self::Charging => "charging",
        }
    }
}

impl fmt::Display for SpotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpotType {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParkingError::InvalidSpotType(s.to_string()))
    }
}

/// Vehicle category; drives spot preference and fee rate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    /// Standard car
    Car,
    /// Electric car
    Electric,
    /// Motorcycle
    Motorcycle,
    /// Bus
    Bus,
}

impl VehicleCategory {
    /// Every recognized vehicle category
    pub const ALL: [Self; 4] = [Self::Car, Self::Electric, Self::Motorcycle, Self::Bus];

    /// Lowercase name used for parsing, display and configuration keys
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Electric => "electric",
            Self::Motorcycle => "motorcycle",
            Self::Bus => "bus",
        }
    }

    /// Spot types this category falls back to, smallest first
    #[must_use]
    pub const fn fallback_spot_types(self) -> &'static [SpotType] {
        match self {
            Self::Motorcycle => &[SpotType::Small, SpotType::Medium, SpotType::Large],
            Self::Car | Self::Electric => &[SpotType::Medium, SpotType::Large],
            Self::Bus => &[SpotType::Large],
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParkingError::InvalidVehicleCategory(s.to_string()))
    }
}

// ============================================================================
// Vehicle
// ============================================================================

/// A vehicle asking for a spot
///
/// Built through the category constructors; fields are read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    category: VehicleCategory,
    plate: String,
    is_disabled: bool,
    needs_charging: bool,
}

impl Vehicle {
    fn with_category(category: VehicleCategory, plate: impl Into<String>, is_disabled: bool) -> Self {
        Self {
            category,
            plate: plate.into(),
            is_disabled,
            needs_charging: category == VehicleCategory::Electric,
        }
    }

    /// A standard car
    #[must_use]
    pub fn car(plate: impl Into<String>, is_disabled: bool) -> Self {
        Self::with_category(VehicleCategory::Car, plate, is_disabled)
    }

    /// An electric car; always flagged as needing a charger
    #[must_use]
    pub fn electric(plate: impl Into<String>, is_disabled: bool) -> Self {
        Self::with_category(VehicleCategory::Electric, plate, is_disabled)
    }

    /// A motorcycle
    #[must_use]
    pub fn motorcycle(plate: impl Into<String>, is_disabled: bool) -> Self {
        Self::with_category(VehicleCategory::Motorcycle, plate, is_disabled)
    }

    /// A bus
    #[must_use]
    pub fn bus(plate: impl Into<String>, is_disabled: bool) -> Self {
        Self::with_category(VehicleCategory::Bus, plate, is_disabled)
    }

    /// Category tag
    #[must_use]
    pub const fn category(&self) -> VehicleCategory {
        self.category
    }

    /// Licence plate
    #[must_use]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Whether the driver needs an accessible spot
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Whether the vehicle wants a charging spot
    #[must_use]
    pub const fn needs_charging(&self) -> bool {
        self.needs_charging
    }
}

// ============================================================================
// Money
// ============================================================================

/// Money amount in minor units (cents, paise) to keep fees exact
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates a new `Money` amount from minor units
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Creates a `Money` amount from whole major units
    #[must_use]
    pub const fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(100))
    }

    /// Returns the amount in minor units
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.0
    }

    /// Multiplies by a whole number, saturating at `u64::MAX`
    #[must_use]
    pub const fn times(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Checks if this amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_type_parses_case_insensitively() {
        assert_eq!("Medium".parse::<SpotType>().ok(), Some(SpotType::Medium));
        assert_eq!(" charging ".parse::<SpotType>().ok(), Some(SpotType::Charging));
    }

    #[test]
    fn unknown_spot_type_is_rejected() {
        let err = "valet".parse::<SpotType>().unwrap_err();
        assert_eq!(err, ParkingError::InvalidSpotType("valet".to_string()));
    }

    #[test]
    fn vehicle_category_round_trips_through_its_name() {
        for category in VehicleCategory::ALL {
            assert_eq!(category.as_str().parse::<VehicleCategory>().ok(), Some(category));
        }
        assert!(matches!(
            "tram".parse::<VehicleCategory>(),
            Err(ParkingError::InvalidVehicleCategory(_))
        ));
    }

    #[test]
    fn only_electric_vehicles_need_charging() {
        assert!(Vehicle::electric("E-1", false).needs_charging());
        assert!(!Vehicle::car("C-1", false).needs_charging());
        assert!(!Vehicle::motorcycle("M-1", true).needs_charging());
        assert!(!Vehicle::bus("B-1", false).needs_charging());
    }

    #[test]
    fn electric_constructor_keeps_disabled_flag() {
        let vehicle = Vehicle::electric("E-5678", true);
        assert_eq!(vehicle.category(), VehicleCategory::Electric);
        assert!(vehicle.is_disabled());
        assert_eq!(vehicle.plate(), "E-5678");
    }

    #[test]
    fn fallback_tables_match_vehicle_size() {
        assert_eq!(
            VehicleCategory::Motorcycle.fallback_spot_types(),
            &[SpotType::Small, SpotType::Medium, SpotType::Large]
        );
        assert_eq!(
            VehicleCategory::Car.fallback_spot_types(),
            &[SpotType::Medium, SpotType::Large]
        );
        assert_eq!(
            VehicleCategory::Electric.fallback_spot_types(),
            &[SpotType::Medium, SpotType::Large]
        );
        assert_eq!(VehicleCategory::Bus.fallback_spot_types(), &[SpotType::Large]);
    }

    #[test]
    fn money_display() {
        assert_eq!(Money::from_minor(2000).to_string(), "20.00");
        assert_eq!(Money::from_minor(1050).to_string(), "10.50");
        assert_eq!(Money::from_major(42).to_string(), "42.00");
    }

    #[test]
    fn money_times_saturates() {
        assert_eq!(Money::from_minor(u64::MAX).times(2), Money::from_minor(u64::MAX));
        assert!(Money::from_minor(500).times(0).is_zero());
    }
}
