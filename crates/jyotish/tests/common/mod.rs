#![allow(dead_code, unused_macros)]

use chrono::{NaiveDate, Offset, TimeZone, Utc};
use jyotish::{
    build_chart, BirthInstant, Body, Chart, EphemerisSample, GeoLocation, HouseSystem, RawPosition,
};
use std::collections::BTreeMap;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

pub const WARSAW: GeoLocation = GeoLocation {
    lat: 52.2297,
    lon: 21.0122,
};

/// 1990-01-01 12:00 UTC in Warsaw, entered as a UTC civil time.
pub fn warsaw_instant() -> BirthInstant {
    let civil = NaiveDate::from_ymd_opt(1990, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    BirthInstant::new(civil, WARSAW)
        .unwrap()
        .with_offset(Utc.fix())
}

/// Recorded sidereal (Lahiri) sample for the Warsaw birth.
///
/// Signs: Sun, Mercury, Saturn in Sagittarius; Moon in Pisces; Venus in
/// Capricorn; Mars in Scorpio; Jupiter in Gemini; Rahu in Aquarius;
/// ascendant in Aries. House n sits in sign n-1.
pub fn warsaw_sample() -> EphemerisSample {
    let bodies: BTreeMap<Body, RawPosition> = [
        (Body::Sun, 257.18, 0.0, 0.983),
        (Body::Moon, 330.50, -4.1, 0.0026),
        (Body::Mercury, 263.90, 1.2, 0.72),
        (Body::Venus, 272.30, 2.9, 0.27),
        (Body::Mars, 236.00, 0.4, 2.25),
        (Body::Jupiter, 70.80, -0.3, 4.18),
        (Body::Saturn, 261.50, 0.5, 10.9),
        (Body::Rahu, 300.90, 0.0, 0.0026),
    ]
    .into_iter()
    .map(|(body, longitude, latitude, distance)| {
        (
            body,
            RawPosition {
                longitude,
                latitude,
                distance,
            },
        )
    })
    .collect();

    EphemerisSample {
        utc: Utc.with_ymd_and_hms(1990, 1, 1, 12, 0, 0).unwrap(),
        julian_day: 2_447_893.0,
        ayanamsa: 23.7169,
        house_system: HouseSystem::Sripati,
        bodies,
        ascendant: 4.25,
        cusps: [
            4.25, 33.0, 61.5, 91.0, 121.2, 152.3, 184.25, 213.0, 241.5, 271.0, 301.2, 332.3,
        ],
    }
}

pub fn warsaw_chart() -> Chart {
    build_chart(&warsaw_instant(), &warsaw_sample()).unwrap()
}

pub fn longitude(chart: &Chart, body: Body) -> f64 {
    chart.position(body).unwrap().longitude
}
