use chrono::{NaiveDate, Offset, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jyotish::{
    build_chart, build_dasha_timeline, derive_all_vargas, derive_varga, harmonic_longitude,
    BirthInstant, Body, EphemerisSample, GeoLocation, HouseSystem, RawPosition,
};

fn instant() -> BirthInstant {
    let civil = NaiveDate::from_ymd_opt(1990, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    BirthInstant::new(
        civil,
        GeoLocation {
            lat: 52.2297,
            lon: 21.0122,
        },
    )
    .unwrap()
    .with_offset(Utc.fix())
}

fn sample() -> EphemerisSample {
    let bodies = [
        (Body::Sun, 257.18),
        (Body::Moon, 330.50),
        (Body::Mercury, 263.90),
        (Body::Venus, 272.30),
        (Body::Mars, 236.00),
        (Body::Jupiter, 70.80),
        (Body::Saturn, 261.50),
        (Body::Rahu, 300.90),
    ]
    .into_iter()
    .map(|(body, lon)| (body, RawPosition::at(lon)))
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

fn bench_harmonic_longitude(c: &mut Criterion) {
    c.bench_function("harmonic_longitude_d9", |b| {
        b.iter(|| harmonic_longitude(black_box(257.18), black_box(9)))
    });
}

fn bench_derive_varga(c: &mut Criterion) {
    let chart = build_chart(&instant(), &sample()).unwrap();

    c.bench_function("derive_varga_d9", |b| {
        b.iter(|| derive_varga(black_box(&chart), black_box(9)))
    });
}

fn bench_derive_all_vargas(c: &mut Criterion) {
    let instant = instant();
    let sample = sample();

    c.bench_function("derive_all_vargas", |b| {
        b.iter(|| derive_all_vargas(black_box(&instant), black_box(&sample)))
    });
}

fn bench_dasha_timeline(c: &mut Criterion) {
    let birth = Utc.with_ymd_and_hms(1990, 1, 1, 12, 0, 0).unwrap();

    c.bench_function("dasha_timeline_120y", |b| {
        b.iter(|| build_dasha_timeline(black_box(birth), black_box(330.5), black_box(120.0)))
    });
}

criterion_group!(
    benches,
    bench_harmonic_longitude,
    bench_derive_varga,
    bench_derive_all_vargas,
    bench_dasha_timeline
);
criterion_main!(benches);
