use crate::body::{Body, SAMPLED_BODIES};
use crate::ephemeris::types::{EphemerisSample, GeoLocation, HouseOutput, HouseSystem, RawPosition};
use crate::error::Result;
use crate::time::{self, BirthInstant, TimezoneResolver};
use chrono::{DateTime, Utc};
use log::debug;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Invalid ayanamsa: {ayanamsa}. Valid ayanamsas: {valid:?}")]
    InvalidAyanamsa { ayanamsa: String, valid: Vec<String> },
    #[error("Body {body} is not provided by this ephemeris")]
    UnsupportedBody { body: Body },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: Body,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Source of raw sidereal positions.
///
/// Implementations report positions; they do not normalize, derive Ketu or
/// retry.
pub trait EphemerisProvider {
    /// Julian Day (UT) for a UTC instant.
    fn julian_day(&self, utc: DateTime<Utc>) -> f64 {
        time::julian_day(utc)
    }

    fn body_position(&self, julian_day: f64, body: Body) -> std::result::Result<RawPosition, EphemerisError>;

    fn houses(
        &self,
        julian_day: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> std::result::Result<HouseOutput, EphemerisError>;

    /// Sidereal correction in degrees.
    fn ayanamsa(&self, julian_day: f64) -> std::result::Result<f64, EphemerisError>;
}

/// Normalize the birth time to UTC once and collect every raw value the
/// chart builder consumes.
pub fn sample_ephemeris<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: &BirthInstant,
    resolver: &dyn TimezoneResolver,
    house_system: HouseSystem,
) -> Result<EphemerisSample> {
    let utc = instant.to_utc(resolver)?;
    let julian_day = provider.julian_day(utc);

    let mut bodies = BTreeMap::new();
    for body in SAMPLED_BODIES {
        bodies.insert(body, provider.body_position(julian_day, body)?);
    }
    let houses = provider.houses(julian_day, &instant.location, house_system)?;
    let ayanamsa = provider.ayanamsa(julian_day)?;

    debug!(
        "Sampled ephemeris at JD {:.5} ({} bodies, {} houses)",
        julian_day,
        bodies.len(),
        house_system
    );

    Ok(EphemerisSample {
        utc,
        julian_day,
        ayanamsa,
        house_system,
        bodies,
        ascendant: houses.ascendant,
        cusps: houses.cusps,
    })
}
