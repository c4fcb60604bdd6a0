//! Fee policy: hourly rate per vehicle category.

use crate::error::{ParkingError, Result};
use crate::types::{Money, VehicleCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard hourly rates, in minor units
pub const DEFAULT_RATES: [(VehicleCategory, Money); 4] = [
    (VehicleCategory::Car, Money::from_minor(2_000)),
    (VehicleCategory::Electric, Money::from_minor(2_500)),
    (VehicleCategory::Motorcycle, Money::from_minor(1_000)),
    (VehicleCategory::Bus, Money::from_minor(5_000)),
];

/// Rate table mapping each vehicle category to its hourly price
///
/// Categories without a rate are a configuration error surfaced at
/// calculation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    rates: HashMap<VehicleCategory, Money>,
}

impl FeeSchedule {
    /// An empty table; every calculation fails until rates are added
    #[must_use]
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Sets the hourly rate for `category`
    #[must_use]
    pub fn with_rate(mut self, category: VehicleCategory, hourly: Money) -> Self {
        self.rates.insert(category, hourly);
        self
    }

    /// Hourly rate for `category`, if configured
    #[must_use]
    pub fn rate(&self, category: VehicleCategory) -> Option<Money> {
        self.rates.get(&category).copied()
    }

    /// Fee for parking `hours` billable hours
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::UnknownCategory`] if no rate is configured for `category`.
    pub fn calculate(&self, category: VehicleCategory, hours: u64) -> Result<Money> {
        self.rate(category)
            .map(|hourly| hourly.times(hours))
            .ok_or(ParkingError::UnknownCategory(category))
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_covers_every_category() {
        let fees = FeeSchedule::default();
        for category in VehicleCategory::ALL {
            assert!(fees.rate(category).is_some(), "missing rate for {category}");
        }
    }

    #[test]
    fn fee_is_hours_times_rate() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.calculate(VehicleCategory::Car, 3), Ok(Money::from_minor(6_000)));
        assert_eq!(fees.calculate(VehicleCategory::Bus, 1), Ok(Money::from_minor(5_000)));
        assert_eq!(fees.calculate(VehicleCategory::Motorcycle, 0), Ok(Money::default()));
    }

    #[test]
    fn missing_rate_is_unknown_category() {
        let fees = FeeSchedule::new().with_rate(VehicleCategory::Car, Money::from_major(1));
        assert_eq!(
            fees.calculate(VehicleCategory::Electric, 2),
            Err(ParkingError::UnknownCategory(VehicleCategory::Electric))
        );
    }

    #[test]
    fn with_rate_overrides_default() {
        let fees = FeeSchedule::default().with_rate(VehicleCategory::Car, Money::from_major(7));
        assert_eq!(fees.calculate(VehicleCategory::Car, 2), Ok(Money::from_major(14)));
    }
}
