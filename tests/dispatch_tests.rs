use rideshare::api::{DriverAPI, TripAPI, UserAPI, API};
use rideshare::config::Config;
use rideshare::engine::Engine;
use rideshare::entities::{Registration, TripStatus};
use uuid::Uuid;

fn engine() -> Engine {
    Engine::new(&Config {
        seed: Some(2024),
        ..Config::default()
    })
    .expect("default config is valid")
}

fn rider<A: API>(api: &mut A, name: &str) -> Uuid {
    api.register(Registration::Rider {
        name: name.into(),
        phone_number: "201-555-0100".into(),
    })
    .expect("rider registers")
}

fn driver<A: API>(api: &mut A, name: &str) -> Uuid {
    api.register(Registration::Driver {
        name: name.into(),
        phone_number: "201-555-0199".into(),
        vehicle: "Yellow cab".into(),
    })
    .expect("driver registers")
}

#[test]
fn first_available_driver_wins_for_every_registration_order() {
    for busy in 0..4 {
        let mut api = engine();
        let drivers: Vec<Uuid> = (0..4).map(|i| driver(&mut api, &format!("D{}", i))).collect();
        let r1 = rider(&mut api, "R1");

        for id in drivers.iter().take(busy) {
            api.toggle_availability(*id).unwrap();
        }

        let trip = api.request_ride(r1, "Depot", "Harbor").unwrap().unwrap();
        assert_eq!(trip.driver_id(), Some(drivers[busy]));
    }
}

#[test]
fn all_drivers_busy_yields_no_trip() {
    let mut api = engine();
    let d1 = driver(&mut api, "D1");
    let r1 = rider(&mut api, "R1");
    api.toggle_availability(d1).unwrap();

    assert!(api.request_ride(r1, "A", "B").unwrap().is_none());
    assert!(api.list_all_trips().is_empty());
}

#[test]
fn ids_increase_across_riders_and_drivers() {
    let mut api = engine();
    let riders: Vec<Uuid> = (0..3).map(|i| rider(&mut api, &format!("R{}", i))).collect();

    // Nobody to drive yet.
    for id in &riders {
        assert!(api.request_ride(*id, "A", "B").unwrap().is_none());
    }

    let drivers: Vec<Uuid> = (0..3).map(|i| driver(&mut api, &format!("D{}", i))).collect();

    let trips: Vec<_> = riders
        .iter()
        .map(|id| api.request_ride(*id, "A", "B").unwrap().unwrap())
        .collect();

    let ids: Vec<u64> = trips.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    for (trip, driver_id) in trips.iter().zip(&drivers) {
        assert_eq!(trip.driver_id(), Some(*driver_id));
        assert!(!api.find_driver(*driver_id).unwrap().is_available());
    }

    let all: Vec<u64> = api.list_all_trips().iter().map(|t| t.id).collect();
    assert_eq!(all, vec![1, 2, 3]);
}

#[test]
fn lifecycle_end_to_end() {
    let mut api = engine();
    let d1 = driver(&mut api, "D1");
    let r1 = rider(&mut api, "R1");

    let trip = api.request_ride(r1, "A", "B").unwrap().unwrap();
    assert_eq!(trip.status(), TripStatus::Accepted);
    assert!(api.list_available_trips().is_empty());

    api.start_trip(trip.id).unwrap();
    assert!(api.start_trip(trip.id).unwrap_err().is_invalid_state_error());

    let done = api.complete_trip(trip.id).unwrap();
    assert_eq!(done.status(), TripStatus::Completed);
    assert_eq!(done.fare(), trip.fare());
    assert!(api.find_driver(d1).unwrap().is_available());

    let history = api.ride_history(r1).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status(), TripStatus::Completed);

    let driver_trips = api.driver_trips(d1).unwrap();
    assert_eq!(driver_trips.len(), 1);
    assert_eq!(driver_trips[0].id, trip.id);
}

#[test]
fn histories_are_per_rider_in_request_order() {
    let mut api = engine();
    driver(&mut api, "D1");
    let r1 = rider(&mut api, "R1");
    let r2 = rider(&mut api, "R2");

    for (rider_id, from) in [(r1, "A"), (r2, "B"), (r1, "C")] {
        let trip = api.request_ride(rider_id, from, "Z").unwrap().unwrap();
        api.start_trip(trip.id).unwrap();
        api.complete_trip(trip.id).unwrap();
    }

    let r1_starts: Vec<String> = api
        .ride_history(r1)
        .unwrap()
        .into_iter()
        .map(|t| t.start_location)
        .collect();
    assert_eq!(r1_starts, vec!["A", "C"]);

    let r2_ids: Vec<u64> = api.ride_history(r2).unwrap().iter().map(|t| t.id).collect();
    assert_eq!(r2_ids, vec![2]);
}

#[test]
fn custom_fare_range_is_respected() {
    let mut api = Engine::new(&Config {
        fare_min: 100,
        fare_max: 105,
        seed: None,
        ..Config::default()
    })
    .unwrap();
    driver(&mut api, "D1");
    let r1 = rider(&mut api, "R1");

    for _ in 0..20 {
        let trip = api.request_ride(r1, "A", "B").unwrap().unwrap();
        assert!((100..105).contains(&trip.fare()));
        api.start_trip(trip.id).unwrap();
        api.complete_trip(trip.id).unwrap();
    }
}

#[test]
fn invalid_config_is_refused() {
    let config = Config {
        fare_min: 50,
        fare_max: 10,
        ..Config::default()
    };

    assert!(Engine::new(&config).is_err());
}
