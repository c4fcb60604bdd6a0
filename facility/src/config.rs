//! Configuration for the parking facility.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::fee::{DEFAULT_RATES, FeeSchedule};
use crate::types::{Money, VehicleCategory};
use serde::{Deserialize, Serialize};
use std::env;

/// Facility configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hourly rates
    pub rates: RateConfig,
    /// Log filter directive for the demo binary (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Hourly rates per vehicle category, in minor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Standard car rate
    pub car: u64,
    /// Electric car rate
    pub electric: u64,
    /// Motorcycle rate
    pub motorcycle: u64,
    /// Bus rate
    pub bus: u64,
}

impl RateConfig {
    /// Rate for `category`
    #[must_use]
    pub const fn get(&self, category: VehicleCategory) -> u64 {
        match category {
            VehicleCategory::Car => self.car,
            VehicleCategory::Electric => self.electric,
            VehicleCategory::Motorcycle => self.motorcycle,
            VehicleCategory::Bus => self.bus,
        }
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        let default_for = |category: VehicleCategory| {
            DEFAULT_RATES
                .iter()
                .find(|(c, _)| *c == category)
                .map_or(0, |(_, rate)| rate.minor())
        };
        Self {
            car: default_for(VehicleCategory::Car),
            electric: default_for(VehicleCategory::Electric),
            motorcycle: default_for(VehicleCategory::Motorcycle),
            bus: default_for(VehicleCategory::Bus),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates: RateConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Unset or unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let rate = |key: &str, fallback: u64| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(fallback)
        };

        Self {
            rates: RateConfig {
                car: rate("PARKING_RATE_CAR", defaults.rates.car),
                electric: rate("PARKING_RATE_ELECTRIC", defaults.rates.electric),
                motorcycle: rate("PARKING_RATE_MOTORCYCLE", defaults.rates.motorcycle),
                bus: rate("PARKING_RATE_BUS", defaults.rates.bus),
            },
            log_level: lookup("PARKING_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Fee table built from the configured rates
    #[must_use]
    pub fn fee_schedule(&self) -> FeeSchedule {
        VehicleCategory::ALL
            .into_iter()
            .fold(FeeSchedule::new(), |fees, category| {
                fees.with_rate(category, Money::from_minor(self.rates.get(category)))
            })
    }
}
