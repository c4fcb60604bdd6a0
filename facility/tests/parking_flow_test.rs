//! End-to-end check-in / check-out flows against a whole facility.

use chrono::Duration;
use parking_core::environment::Clock;
use parking_facility::{
    Facility, FeeSchedule, Floor, FloorAvailability, Money, ParkingEnvironment, ParkingError,
    ParkingService, Spot, SpotId, SpotType, Vehicle, VehicleCategory,
};
use parking_testing::{MockClock, SequentialIdGenerator, test_clock};
use std::sync::Arc;

fn demo_floor() -> Floor {
    Floor::new(
        1,
        vec![
            Spot::new("S1", SpotType::Small),
            Spot::new("M1", SpotType::Medium),
            Spot::new("L1", SpotType::Large),
            Spot::new("H1", SpotType::Handicapped),
            Spot::new("C1", SpotType::Charging),
        ],
    )
}

fn service_for(facility: Facility) -> (ParkingService, Arc<MockClock>) {
    let clock = Arc::new(MockClock::new(test_clock().now()));
    let env = ParkingEnvironment::new(clock.clone(), Arc::new(SequentialIdGenerator::new("T")));
    (ParkingService::new(facility, FeeSchedule::default(), env), clock)
}

#[test]
fn demo_scenario_restores_full_availability() {
    let (mut service, clock) = service_for(Facility::new().with_floor(demo_floor()));

    let disabled = service.check_in(Vehicle::car("D-1234", true)).unwrap();
    assert_eq!(disabled.spot.spot_id, SpotId::new("H1"));

    let electric = service.check_in(Vehicle::electric("E-5678", false)).unwrap();
    assert_eq!(electric.spot.spot_id, SpotId::new("C1"));

    assert_eq!(
        service.availability(),
        vec![FloorAvailability { floor: 1, available: 3, total: 5 }]
    );

    clock.advance(Duration::seconds(2));

    let first = service.check_out(&disabled.id).unwrap();
    assert_eq!(first.plate, "D-1234");
    assert_eq!(first.duration_hours, 1);
    assert_eq!(first.fee, Money::from_minor(2_000));

    let second = service.check_out(&electric.id).unwrap();
    assert_eq!(second.plate, "E-5678");
    assert_eq!(second.duration_hours, 1);
    assert_eq!(second.fee, Money::from_minor(2_500));

    assert_eq!(
        service.availability(),
        vec![FloorAvailability { floor: 1, available: 5, total: 5 }]
    );
}

#[test]
fn claimed_spot_is_never_offered_again_until_released() {
    let facility = Facility::new().with_floor(Floor::new(
        1,
        vec![Spot::new("M1", SpotType::Medium), Spot::new("M2", SpotType::Medium)],
    ));
    let (mut service, _clock) = service_for(facility);

    let ticket = service.check_in(Vehicle::car("A-1", false)).unwrap();
    let spot = service.facility().spot(&ticket.spot).unwrap();
    assert!(!spot.is_available());

    let next = service.facility().find_spot(&Vehicle::car("B-2", false)).unwrap();
    assert_ne!(next.spot_id, ticket.spot.spot_id);

    let other = service.check_in(Vehicle::car("B-2", false)).unwrap();
    assert_eq!(other.spot.spot_id, SpotId::new("M2"));
    assert_eq!(service.facility().find_spot(&Vehicle::car("C-3", false)), None);

    service.check_out(&ticket.id).unwrap();
    let freed = service.facility().find_spot(&Vehicle::car("C-3", false)).unwrap();
    assert_eq!(freed.spot_id, ticket.spot.spot_id);
}

#[test]
fn round_trip_returns_and_frees_the_assigned_spot() {
    let (mut service, clock) = service_for(Facility::new().with_floor(demo_floor()));

    let ticket = service.check_in(Vehicle::bus("BUS-9", false)).unwrap();
    clock.advance(Duration::hours(3));
    let receipt = service.check_out(&ticket.id).unwrap();

    assert_eq!(receipt.spot_id, ticket.spot.spot_id);
    assert_eq!(receipt.duration_hours, 3);
    assert_eq!(receipt.fee, Money::from_minor(15_000));
    assert!(service.facility().spot(&ticket.spot).unwrap().is_available());
    assert!(service.ticket(&ticket.id).is_none());
}

#[test]
fn checking_out_twice_fails_the_second_time() {
    let (mut service, _clock) = service_for(Facility::new().with_floor(demo_floor()));
    let ticket = service.check_in(Vehicle::motorcycle("M-1", false)).unwrap();

    service.check_out(&ticket.id).unwrap();
    assert_eq!(
        service.check_out(&ticket.id),
        Err(ParkingError::InvalidTicket(ticket.id.clone()))
    );
}

#[test]
fn unknown_ticket_is_invalid() {
    let (mut service, _clock) = service_for(Facility::new().with_floor(demo_floor()));
    assert!(matches!(
        service.check_out(&"nope".into()),
        Err(ParkingError::InvalidTicket(_))
    ));
}

#[test]
fn billing_boundaries_round_partial_hours_up() {
    for (elapsed_ms, expected_hours) in [(1, 1), (3_600_000, 1), (3_600_001, 2)] {
        let (mut service, clock) = service_for(Facility::new().with_floor(demo_floor()));
        let ticket = service.check_in(Vehicle::car("C-1", false)).unwrap();

        clock.advance(Duration::milliseconds(elapsed_ms));
        let receipt = service.check_out(&ticket.id).unwrap();

        assert_eq!(receipt.duration_hours, expected_hours, "elapsed {elapsed_ms} ms");
    }
}

#[test]
fn motorcycle_is_turned_away_when_only_large_spot_is_taken() {
    let facility = Facility::new().with_floor(Floor::new(1, vec![Spot::new("L1", SpotType::Large)]));
    let (mut service, _clock) = service_for(facility);
    service.check_in(Vehicle::bus("B-1", false)).unwrap();

    assert_eq!(
        service.check_in(Vehicle::motorcycle("M-1", false)),
        Err(ParkingError::NoAvailableSpot {
            plate: "M-1".to_string(),
            category: VehicleCategory::Motorcycle,
        })
    );
    assert_eq!(service.facility().active_tickets(), 1);
}

#[test]
fn vehicles_spill_onto_the_next_floor() {
    let facility = Facility::new()
        .with_floor(Floor::new(1, vec![Spot::new("1-M1", SpotType::Medium)]))
        .with_floor(Floor::new(2, vec![Spot::new("2-M1", SpotType::Medium)]));
    let (mut service, _clock) = service_for(facility);

    let first = service.check_in(Vehicle::car("A-1", false)).unwrap();
    let second = service.check_in(Vehicle::car("B-2", false)).unwrap();

    assert_eq!(first.spot.floor, 0);
    assert_eq!(second.spot.floor, 1);
    assert_eq!(second.spot.spot_id, SpotId::new("2-M1"));
    assert_eq!(
        service.availability(),
        vec![
            FloorAvailability { floor: 1, available: 0, total: 1 },
            FloorAvailability { floor: 2, available: 0, total: 1 },
        ]
    );
}

#[test]
fn ticket_timestamps_come_from_the_injected_clock() {
    let (mut service, clock) = service_for(Facility::new().with_floor(demo_floor()));
    let start = clock.now();

    let ticket = service.check_in(Vehicle::car("C-1", false)).unwrap();
    assert_eq!(ticket.started_at, start);
    assert_eq!(ticket.id.as_str(), "T-0001");
}
