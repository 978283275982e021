use metar_decoder::{ReportType, SkyCoverage};

#[test]
fn full_report_with_remarks() {
    let obs = metar_decoder::parse(
        "METAR KJFK 121851Z 24008KT 10SM FEW250 23/14 A3012 RMK AO2 SLP201 T02330139",
    )
    .unwrap();

    assert_eq!(obs.station_id, "KJFK");
    assert_eq!(obs.report_type, ReportType::Metar);

    let wind = obs.wind.unwrap();
    assert_eq!(wind.direction_degrees, Some(240));
    assert_eq!(wind.speed_value, 8);

    assert_eq!(obs.visibility.unwrap().to_statute_miles(), 10.0);

    assert_eq!(obs.sky_conditions.len(), 1);
    assert_eq!(obs.sky_conditions[0].coverage, SkyCoverage::Few);
    assert_eq!(obs.sky_conditions[0].height_feet, Some(25000));

    let temp = obs.temperature.unwrap();
    assert_eq!(temp.celsius, 23.0);
    assert_eq!(temp.dewpoint_celsius, Some(14.0));

    assert!((obs.pressure.unwrap().to_inches_hg() - 30.12).abs() < 1e-9);

    let remarks = obs.remarks.unwrap();
    assert_eq!(
        remarks.automated_station_type,
        Some(metar_decoder::AutomatedStationType::Ao2)
    );
    assert!((remarks.sea_level_pressure.unwrap().to_hectopascals() - 1020.1).abs() < 1e-9);
    let precise = remarks.precise_temperature.unwrap();
    assert!((precise.celsius - 23.3).abs() < 1e-9);
    assert!((precise.dewpoint_celsius.unwrap() - 13.9).abs() < 1e-9);
}

#[test]
fn speci_report() {
    let obs = metar_decoder::parse("SPECI KJFK 251651Z 19005KT 10SM FEW250").unwrap();
    assert_eq!(obs.report_type, ReportType::Speci);
    let wind = obs.wind.unwrap();
    assert_eq!(wind.direction_degrees, Some(190));
    assert_eq!(wind.speed_value, 5);
}

#[test]
fn invalid_station_type_falls_through_to_free_text() {
    let obs =
        metar_decoder::parse("METAR KJFK 121853Z 28016KT 10SM A3015 RMK AO9 SLP210").unwrap();
    let remarks = obs.remarks.unwrap();
    assert_eq!(remarks.automated_station_type, None);
    assert!((remarks.sea_level_pressure.unwrap().to_hectopascals() - 1021.0).abs() < 1e-9);
    assert!(remarks.free_text.unwrap().contains("AO9"));
}

#[test]
fn sf_cloud_type_does_not_swallow_surface_visibility() {
    let obs = metar_decoder::parse(
        "METAR KJFK 121853Z 28016KT 10SM A3015 RMK SF4 SFC VIS 1 1/2",
    )
    .unwrap();
    let remarks = obs.remarks.unwrap();
    assert_eq!(remarks.cloud_types.len(), 1);
    assert_eq!(remarks.cloud_types[0].code, "SF");
    assert_eq!(remarks.cloud_types[0].oktas, Some(4));
    assert_eq!(remarks.surface_visibility.unwrap().to_statute_miles(), 1.5);
}

#[test]
fn peak_wind_and_wind_shift_combo() {
    let obs = metar_decoder::parse(
        "METAR KJFK 121853Z 28016KT 10SM A3015 RMK PK WND 28045/1528 WSHFT 1530 FROPA",
    )
    .unwrap();
    let remarks = obs.remarks.unwrap();
    let pk = remarks.peak_wind.unwrap();
    assert_eq!(pk.direction_degrees, 280);
    assert_eq!(pk.speed_kt, 45);
    assert_eq!(pk.hour, Some(15));
    assert_eq!(pk.minute, Some(28));

    let shift = remarks.wind_shift.unwrap();
    assert_eq!(shift.hour, Some(15));
    assert_eq!(shift.minute, 30);
    assert!(shift.frontal_passage);
}

#[test]
fn envelope_failures() {
    assert!(metar_decoder::parse("").is_err());
    assert!(metar_decoder::parse("   ").is_err());
    assert!(metar_decoder::parse("TAF KJFK 251651Z 2517/2618").is_err());
}

#[test]
fn can_parse_predicate_matches_parse_success() {
    assert!(metar_decoder::can_parse(
        "METAR KJFK 121851Z 24008KT 10SM FEW250 23/14 A3012"
    ));
    assert!(!metar_decoder::can_parse(""));
    assert!(!metar_decoder::can_parse("TAF KJFK 251651Z 2517/2618"));
}

#[test]
fn can_parse_is_lighter_than_parse() {
    assert!(metar_decoder::can_parse("METAR KJFK"));
    assert!(metar_decoder::can_parse("METAR KJFK 999999Z"));
    assert!(metar_decoder::parse("METAR KJFK 999999Z").is_err());
}
