#[macro_use]
mod common;

use common::{longitude, warsaw_chart, warsaw_instant, warsaw_sample};
use jyotish::ephemeris::{sample_ephemeris, FixedEphemeris};
use jyotish::time::FixedOffsetResolver;
use jyotish::zodiac::normalize_degrees;
use jyotish::{
    build_chart, derive_varga, Ayanamsa, Body, ChartKind, EphemerisError, HouseSystem,
    JyotishError, Sign, ALL_BODIES,
};

#[test]
fn test_primary_chart_has_ten_bodies_and_twelve_houses() {
    let chart = warsaw_chart();
    assert_eq!(chart.kind, ChartKind::Rasi);
    assert_eq!(chart.bodies.len(), 10);
    for body in ALL_BODIES {
        assert!(chart.bodies.contains_key(&body), "missing {}", body);
    }
    assert_eq!(chart.houses.keys().copied().collect::<Vec<_>>(), (1..=12).collect::<Vec<u8>>());
    assert_eq!(chart.julian_day, 2_447_893.0);
    assert_approx!(chart.ayanamsa, 23.7169, 1e-12);
}

#[test]
fn test_positions_derive_sign_and_degree() {
    let chart = warsaw_chart();
    let sun = chart.position(Body::Sun).unwrap();
    assert_eq!(sun.sign, Sign::Sagittarius);
    assert_approx!(sun.degrees_in_sign, 17.18, 1e-9);
    assert_eq!(sun.original_longitude, None);

    let moon = chart.position(Body::Moon).unwrap();
    assert_eq!(moon.sign, Sign::Pisces);
    assert_approx!(moon.latitude, -4.1, 1e-12);

    let asc = chart.ascendant().unwrap();
    assert_eq!(asc.sign, Sign::Aries);
    assert_approx!(asc.longitude, 4.25, 1e-12);
}

#[test]
fn test_ketu_opposes_rahu() {
    let chart = warsaw_chart();
    let rahu = longitude(&chart, Body::Rahu);
    let ketu = chart.position(Body::Ketu).unwrap();
    assert_eq!(ketu.longitude, normalize_degrees(rahu + 180.0));
    assert_eq!(ketu.sign, Sign::Leo);
    assert_eq!(ketu.latitude, 0.0);
    assert_eq!(ketu.distance, 0.0);
}

#[test]
fn test_unnormalized_sample_longitudes_are_wrapped() {
    let mut sample = warsaw_sample();
    sample.bodies.get_mut(&Body::Sun).unwrap().longitude = 257.18 + 720.0;
    sample.bodies.get_mut(&Body::Rahu).unwrap().longitude = 300.9 - 360.0;
    let chart = build_chart(&warsaw_instant(), &sample).unwrap();
    assert_approx!(longitude(&chart, Body::Sun), 257.18, 1e-9);
    assert_approx!(longitude(&chart, Body::Rahu), 300.9, 1e-9);
    assert_approx!(longitude(&chart, Body::Ketu), 120.9, 1e-9);
}

#[test]
fn test_house_cusps_follow_sample() {
    let chart = warsaw_chart();
    for (number, cusp) in &chart.houses {
        assert_eq!(cusp.sign.index(), number - 1);
    }
    assert_approx!(chart.houses[&7].longitude, 184.25, 1e-12);
}

#[test]
fn test_missing_body_is_ephemeris_unavailable() {
    let mut sample = warsaw_sample();
    sample.bodies.remove(&Body::Saturn);
    let err = build_chart(&warsaw_instant(), &sample).unwrap_err();
    match err {
        JyotishError::EphemerisUnavailable(EphemerisError::CalculationFailed { body, .. }) => {
            assert_eq!(body, Body::Saturn)
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(!JyotishError::from(EphemerisError::HouseCalculationFailed {
        message: String::new()
    })
    .is_invalid_input());
}

#[test]
fn test_non_finite_cusp_is_ephemeris_unavailable() {
    let mut sample = warsaw_sample();
    sample.cusps[3] = f64::NAN;
    assert!(matches!(
        build_chart(&warsaw_instant(), &sample),
        Err(JyotishError::EphemerisUnavailable(_))
    ));
}

#[test]
fn test_d1_from_d1_is_bit_identical() {
    let chart = warsaw_chart();
    let again = derive_varga(&chart, 1).unwrap();
    for (body, position) in &chart.bodies {
        assert_eq!(
            again.bodies[body].longitude.to_bits(),
            position.longitude.to_bits()
        );
    }
    assert_eq!(again, chart);
}

#[test]
fn test_sampling_through_provider_matches_fixture() {
    let provider = FixedEphemeris::new(warsaw_sample());
    let sample = sample_ephemeris(
        &provider,
        &warsaw_instant(),
        &FixedOffsetResolver::default(),
        HouseSystem::Sripati,
    )
    .unwrap();
    assert_eq!(sample, warsaw_sample());
    let chart = build_chart(&warsaw_instant(), &sample).unwrap();
    assert_eq!(chart, warsaw_chart());
}

#[test]
fn test_chart_serializes_with_lowercase_keys() {
    let chart = warsaw_chart();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["kind"], "rasi");
    assert_eq!(json["bodies"]["sun"]["sign"], "sagittarius");
    assert!(json["bodies"]["ketu"].get("original_longitude").is_none());
    let back: jyotish::Chart = serde_json::from_value(json).unwrap();
    assert_eq!(back.bodies, chart.bodies);
}

#[test]
fn test_ayanamsa_names_map_to_sidereal_modes() {
    assert_eq!("lahiri".parse::<Ayanamsa>().unwrap(), Ayanamsa::Lahiri);
    assert_eq!(" Raman ".parse::<Ayanamsa>().unwrap().sidereal_mode(), 3);
    assert_eq!(Ayanamsa::FaganBradley.sidereal_mode(), 0);
    assert_eq!(Ayanamsa::default().to_string(), "lahiri");
    let err = "galactic".parse::<Ayanamsa>().unwrap_err();
    assert!(matches!(
        err,
        EphemerisError::InvalidAyanamsa { ref valid, .. } if valid.len() == 7
    ));
}
