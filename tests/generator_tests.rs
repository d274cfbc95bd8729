use matatu_mock_data::data::MockData;
use matatu_mock_data::generate_routes_and_fares;
use matatu_mock_data::location::ROUTE_DEFINITIONS;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generate_with_seed(seed: u64) -> MockData {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_routes_and_fares(&ROUTE_DEFINITIONS, &mut rng)
}

#[test]
fn route_ids_are_dense_and_shared_with_fares() {
    let mock_data = generate_with_seed(1);
    assert_eq!(mock_data.routes.len(), 19);
    assert!(mock_data.check_alignment().is_ok());

    for (index, (route, fare)) in mock_data
        .routes
        .iter()
        .zip(mock_data.fares.iter())
        .enumerate()
    {
        let expected_id = format!("route_{}", index + 1);
        assert_eq!(route.route_id, expected_id);
        assert_eq!(fare.route_id, expected_id);
    }
}

#[test]
fn stages_list_origin_intermediates_and_destination() {
    let mock_data = generate_with_seed(2);
    for (route, definition) in mock_data.routes.iter().zip(ROUTE_DEFINITIONS.iter()) {
        let stages = route.stages.split(',').collect::<Vec<_>>();
        assert_eq!(stages.len(), definition.intermediates.len() + 2);
        assert_eq!(stages.first(), Some(&route.origin.as_str()));
        assert_eq!(stages.last(), Some(&route.destination.as_str()));
        assert_eq!(&stages[1..stages.len() - 1], definition.intermediates);
        assert!(route.is_verified);
    }
}

#[test]
fn westlands_route_matches_reference() {
    let mock_data = generate_with_seed(3);
    let route = &mock_data.routes[0];
    assert_eq!(route.origin, "Nairobi CBD");
    assert_eq!(route.destination, "Westlands");
    assert_eq!(
        route.stages,
        "Nairobi CBD,Uhuru Highway,Museum Hill,Parklands,Sarit Centre,Westlands"
    );
    assert_eq!(mock_data.fares[0].standard_fare, 80);
}

#[test]
fn fares_follow_stage_count_tiers() {
    let mock_data = generate_with_seed(4);
    for (fare, definition) in mock_data.fares.iter().zip(ROUTE_DEFINITIONS.iter()) {
        let expected = match definition.intermediates.len() + 2 {
            0..=5 => 70,
            6..=7 => 80,
            _ => 100,
        };
        assert_eq!(fare.standard_fare, expected, "{}", fare.route_id);
        assert_eq!(fare.peak_hours_starts, "07:00");
        assert_eq!(fare.peak_hours_end, "09:00");
        assert!((1.2..=1.5).contains(&fare.peak_multiplier));
    }

    // Likoni has three intermediates, Thika six
    assert_eq!(mock_data.fares[6].standard_fare, 70);
    assert_eq!(mock_data.fares[3].standard_fare, 100);
}

#[test]
fn only_peak_multipliers_depend_on_the_seed() {
    let first = generate_with_seed(10);
    let second = generate_with_seed(11);

    assert_eq!(first.routes, second.routes);
    for (a, b) in first.fares.iter().zip(second.fares.iter()) {
        assert_eq!(a.route_id, b.route_id);
        assert_eq!(a.standard_fare, b.standard_fare);
        assert_eq!(a.peak_hours_starts, b.peak_hours_starts);
        assert_eq!(a.peak_hours_end, b.peak_hours_end);
    }
}

#[test]
fn same_seed_reproduces_fares() {
    assert_eq!(generate_with_seed(99), generate_with_seed(99));
}
