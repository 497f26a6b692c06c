use ridecompare::estimate::{self, EstimateSource, Estimator, RouteEstimate, RouteTable};

const PAIRS: [(&str, &str); 8] = [
    ("PESU RR", "Reva University"),
    ("Downtown", "Marina"),
    ("Park X", "Lake Y"),
    ("a", "b"),
    ("Current Location", "Airport Terminal 2"),
    ("  Koramangala 5th Block ", "Indiranagar"),
    ("Café Noir", "Gare du Nord"),
    ("x", "a much longer destination name than usual"),
];

#[test]
fn estimates_are_positive() {
    for (source, destination) in PAIRS {
        let estimate = estimate::estimate(source, destination).unwrap();
        assert!(estimate.distance_km() > 0.0, "{source} to {destination}");
        assert!(estimate.duration_minutes() > 0, "{source} to {destination}");
    }
}

#[test]
fn estimates_are_deterministic() {
    for (source, destination) in PAIRS {
        assert_eq!(
            estimate::estimate(source, destination),
            estimate::estimate(source, destination)
        );
    }
}

#[test]
fn curated_routes_are_symmetric() {
    let estimator = Estimator::default();
    for pair in [
        ("PESU RR", "Reva University"),
        ("PESU RR", "Downtown"),
        ("Downtown", "Marina"),
        ("Park View", "Green Park"),
        ("Current Location", "Reva University"),
        ("Current Location", "Downtown"),
    ] {
        let forward = estimator.estimate(pair.0, pair.1).unwrap();
        let reverse = estimator.estimate(pair.1, pair.0).unwrap();
        assert_eq!(forward, reverse);
        assert_eq!(
            estimator.source_of(pair.1, pair.0),
            Ok(EstimateSource::Curated)
        );
    }
}

#[test]
fn curated_downtown_marina() {
    let estimate = estimate::estimate("Downtown", "Marina").unwrap();
    assert_eq!(estimate.distance_km(), 5.7);
    assert_eq!(estimate.duration_minutes(), 15);
}

#[test]
fn curated_lookup_ignores_case_and_padding() {
    let estimate = estimate::estimate("  pesu RR", "REVA UNIVERSITY ").unwrap();
    assert_eq!(estimate, RouteEstimate::new(38.8, 70));
    assert_eq!(estimate.duration.to_display_string(), "1 hr 10 min");
}

#[test]
fn synthetic_park_lake() {
    let estimate = estimate::estimate("Park X", "Lake Y").unwrap();
    assert_eq!(estimate.distance_km(), 12.0);
    assert_eq!(estimate.duration_minutes(), 22);
    assert_eq!(estimate.distance.to_display_string(), "12.0 km");
}

#[test]
fn synthetic_wraps_every_ten_chars() {
    // 5 + 5 chars falls into bucket 0
    let estimate = estimate::estimate("abcde", "vwxyz").unwrap();
    assert_eq!(estimate.distance_km(), 5.0);
    assert_eq!(estimate.duration_minutes(), 9);
    // 4 + 5 chars is the largest bucket
    let estimate = estimate::estimate("abcd", "vwxyz").unwrap();
    assert_eq!(estimate.distance_km(), 36.5);
    assert_eq!(estimate.duration_minutes(), 66);
    assert_eq!(estimate.duration.to_display_string(), "1 hr 6 min");
}

#[test]
fn synthetic_uses_trimmed_length() {
    assert_eq!(
        estimate::estimate("   Park X   ", "Lake Y"),
        estimate::estimate("Park X", "Lake Y")
    );
}

#[test]
fn empty_input_is_rejected() {
    for (source, destination) in [("", "Marina"), ("Downtown", ""), ("   ", "\t"), ("", "")] {
        assert!(matches!(
            estimate::estimate(source, destination),
            Err(estimate::Error::InvalidInput { .. })
        ));
        assert!(!estimate::can_compare(source, destination));
    }
    assert!(estimate::can_compare("Downtown", "Marina"));
}

#[test]
fn empty_table_always_synthesizes() {
    let estimator = Estimator::new(RouteTable::new());
    assert_eq!(
        estimator.source_of("Downtown", "Marina"),
        Ok(EstimateSource::Synthetic)
    );
    // 8 + 6 chars, bucket 4
    let estimate = estimator.estimate("Downtown", "Marina").unwrap();
    assert_eq!(estimate.distance_km(), 19.0);
    assert_eq!(estimate.duration_minutes(), 34);
}

#[test]
fn resolve_reports_estimate_with_origin() {
    let estimator = Estimator::default();
    assert_eq!(
        estimator.resolve("Marina", "downtown"),
        Ok((RouteEstimate::new(5.7, 15), EstimateSource::Curated))
    );
    let (estimate, origin) = estimator.resolve("Park X", "Lake Y").unwrap();
    assert_eq!(origin, EstimateSource::Synthetic);
    assert_eq!(estimator.estimate("Park X", "Lake Y"), Ok(estimate));
    assert!(matches!(
        estimator.resolve(" ", "Lake Y"),
        Err(estimate::Error::InvalidInput { .. })
    ));
}

#[test]
fn routes_from_csv() {
    let data = "from,to,distance_km,duration_minutes\n\
                Airport, MG Road ,34.5,65\n\
                Whitefield,Marathahalli,6.2,20\n";
    let table = RouteTable::from_csv_reader(data.as_bytes()).unwrap();
    assert_eq!(table.len(), 2);
    let estimator = Estimator::new(table);
    assert_eq!(
        estimator.estimate("mg road", "AIRPORT"),
        Ok(RouteEstimate::new(34.5, 65))
    );
}

#[test]
fn routes_from_csv_reject_bad_rows() {
    let data = "from,to,distance_km,duration_minutes\n\
                Airport,MG Road,34.5,65\n\
                Whitefield,Marathahalli,0,20\n";
    assert_eq!(
        RouteTable::from_csv_reader(data.as_bytes()).unwrap_err(),
        estimate::Error::InvalidRoute { line: 3 }
    );

    let data = "from,to,distance_km,duration_minutes\nAirport,,3.0,5\n";
    assert_eq!(
        RouteTable::from_csv_reader(data.as_bytes()).unwrap_err(),
        estimate::Error::InvalidRoute { line: 2 }
    );

    for distance in ["inf", "-inf", "NaN"] {
        let data = format!("from,to,distance_km,duration_minutes\nAirport,Mall,{distance},5\n");
        assert_eq!(
            RouteTable::from_csv_reader(data.as_bytes()).unwrap_err(),
            estimate::Error::InvalidRoute { line: 2 }
        );
    }

    let data = "from,to,distance_km,duration_minutes\nAirport,Mall,far,5\n";
    assert!(matches!(
        RouteTable::from_csv_reader(data.as_bytes()),
        Err(estimate::Error::Csv(_))
    ));
}
