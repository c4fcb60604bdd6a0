//! Parking Facility Demo
//!
//! Sets up one floor with every spot type, parks a disabled car and an
//! electric car, waits a moment, then checks both out.
//!
//! # Usage
//!
//! ```bash
//! # Optional: override hourly rates (minor units)
//! echo "PARKING_RATE_CAR=3000" >> .env
//!
//! cargo run --bin demo
//! ```

use parking_facility::{
    Config, Facility, Floor, ParkingEnvironment, ParkingService, Spot, SpotType, Vehicle,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine; defaults apply
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{},parking_facility=debug", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("\n🅿️  ============================================");
    println!("   Parking Facility - Live Demo");
    println!("============================================\n");

    let floor = Floor::new(
        1,
        vec![
            Spot::new("S1", SpotType::Small),
            Spot::new("M1", SpotType::Medium),
            Spot::new("L1", SpotType::Large),
            Spot::new("H1", SpotType::Handicapped),
            Spot::new("C1", SpotType::Charging),
        ],
    );
    let facility = Facility::new().with_floor(floor);
    let mut service = ParkingService::new(facility, config.fee_schedule(), ParkingEnvironment::system());

    let disabled_car = Vehicle::car("D-1234", true);
    let electric_car = Vehicle::electric("E-5678", false);

    let ticket1 = service.check_in(disabled_car)?;
    println!("✅ Disabled car checked in. Spot: {}, Ticket: {}", ticket1.spot.spot_id, ticket1.id);

    let ticket2 = service.check_in(electric_car)?;
    println!("⚡ Electric car checked in. Spot: {}, Ticket: {}", ticket2.spot.spot_id, ticket2.id);

    print_availability(&service);

    // Short stay; still billed as a full hour
    std::thread::sleep(Duration::from_secs(2));

    let result1 = service.check_out(&ticket1.id)?;
    println!(
        "🅿️  Disabled car checked out. Fee: {}, Duration: {}hr",
        result1.fee, result1.duration_hours
    );

    let result2 = service.check_out(&ticket2.id)?;
    println!(
        "🔌 Electric car checked out. Fee: {}, Duration: {}hr",
        result2.fee, result2.duration_hours
    );

    print_availability(&service);

    println!("\n=== Demo Complete ===");
    Ok(())
}

fn print_availability(service: &ParkingService) {
    println!("\nAvailability:");
    for floor in service.availability() {
        println!("  Floor {}: {}/{} free", floor.floor, floor.available, floor.total);
    }
    println!();
}
