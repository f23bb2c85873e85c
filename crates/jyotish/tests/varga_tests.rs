#[macro_use]
mod common;

use common::{longitude, warsaw_chart, warsaw_instant, warsaw_sample};
use jyotish::vedic::vargas::{derive_all_from_chart, navamsa_d9, VARGAS};
use jyotish::{
    derive_all_vargas, derive_varga, harmonic_longitude, Body, ChartKind, JyotishError, Sign,
    VargaLabel,
};

#[test]
fn test_aries_zero_navamsa_is_aries() {
    assert_eq!(harmonic_longitude(0.0, 9).unwrap(), 0.0);
    assert_eq!(navamsa_d9(0, 0), 0);
}

#[test]
fn test_varga_table_covers_d1_to_d12() {
    let harmonics: Vec<u8> = VARGAS.iter().map(|spec| spec.harmonic).collect();
    assert_eq!(harmonics, (1..=12).collect::<Vec<u8>>());
    assert_eq!(VARGAS[8].name, "Navamsa");
}

#[test]
fn test_navamsa_chart() {
    let d1 = warsaw_chart();
    let d9 = derive_varga(&d1, 9).unwrap();

    assert_eq!(d9.kind, ChartKind::Varga(9));
    assert_eq!(d9.label(), VargaLabel(9));
    assert_eq!(d9.bodies.len(), 10);
    assert!(d9.houses.is_empty());

    // Sun: Sagittarius 17.18°, fire base, part 5
    let sun = d9.position(Body::Sun).unwrap();
    assert_eq!(sun.sign, Sign::Virgo);
    assert_eq!(sun.longitude, 150.0);
    assert_eq!(sun.degrees_in_sign, 0.0);
    assert_approx!(sun.original_longitude.unwrap(), longitude(&d1, Body::Sun), 0.0);

    // Moon: Pisces 0.5°, water reuses the fire base
    assert_eq!(d9.position(Body::Moon).unwrap().sign, Sign::Aries);
    // Ascendant: Aries 4.25°, part 1
    assert_eq!(d9.ascendant().unwrap().sign, Sign::Taurus);
}

#[test]
fn test_varga_keeps_latitude_and_birth() {
    let d1 = warsaw_chart();
    let d3 = derive_varga(&d1, 3).unwrap();
    assert_eq!(d3.birth, d1.birth);
    assert_eq!(d3.julian_day, d1.julian_day);
    assert_eq!(
        d3.position(Body::Moon).unwrap().latitude,
        d1.position(Body::Moon).unwrap().latitude
    );
}

#[test]
fn test_varga_aspects_are_recomputed() {
    let d1 = warsaw_chart();
    let d2 = derive_varga(&d1, 2).unwrap();
    // Every body lands on 0° or 120°, so every pair is exact
    for position in d2.bodies.values() {
        assert!(position.longitude == 0.0 || position.longitude == 120.0);
    }
    assert!(!d2.aspects.is_empty());
    assert!(d2
        .aspects
        .iter()
        .filter(|a| !a.is_vedic())
        .all(|a| a.strength == 100.0));
    assert_ne!(d2.aspects, d1.aspects);
}

#[test]
fn test_invalid_harmonic_rejected() {
    let d1 = warsaw_chart();
    assert!(matches!(
        derive_varga(&d1, 0),
        Err(JyotishError::InvalidHarmonic(0))
    ));
    assert!(matches!(
        derive_varga(&d1, 13),
        Err(JyotishError::InvalidHarmonic(13))
    ));
    assert!(derive_varga(&d1, 16).unwrap_err().is_invalid_input());
}

#[test]
fn test_varga_of_varga_rejected() {
    let d9 = derive_varga(&warsaw_chart(), 9).unwrap();
    assert!(derive_varga(&d9, 3).unwrap_err().is_invalid_input());
}

#[test]
fn test_all_vargas() {
    let all = derive_all_vargas(&warsaw_instant(), &warsaw_sample()).unwrap();
    assert_eq!(all.len(), 12);
    assert_eq!(all.keys().next(), Some(&VargaLabel::D1));
    assert_eq!(all[&VargaLabel::D1], warsaw_chart());
    for (label, chart) in &all {
        assert_eq!(chart.label(), *label);
        assert_eq!(chart.bodies.len(), 10);
        if *label != VargaLabel::D1 {
            assert!(chart.houses.is_empty());
            assert!(chart
                .bodies
                .values()
                .all(|p| p.original_longitude.is_some() && p.longitude % 30.0 == 0.0));
        }
    }
    assert_eq!(derive_all_from_chart(&warsaw_chart()).unwrap(), all);
}

#[test]
fn test_varga_labels_serialize_as_strings() {
    let all = derive_all_vargas(&warsaw_instant(), &warsaw_sample()).unwrap();
    let json = serde_json::to_value(&all).unwrap();
    assert!(json.get("D1").is_some());
    assert!(json.get("D12").is_some());
    assert_eq!(serde_json::to_string(&VargaLabel(10)).unwrap(), "\"D10\"");
    let parsed: VargaLabel = serde_json::from_str("\"D7\"").unwrap();
    assert_eq!(parsed, VargaLabel(7));
    assert!(serde_json::from_str::<VargaLabel>("\"D42\"").is_err());
}
