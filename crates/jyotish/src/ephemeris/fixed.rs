use crate::body::Body;
use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{EphemerisSample, GeoLocation, HouseOutput, HouseSystem, RawPosition};
use chrono::{DateTime, Utc};

/// In-memory provider that replays one recorded sample for any request.
#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    sample: EphemerisSample,
}

impl FixedEphemeris {
    pub fn new(sample: EphemerisSample) -> Self {
        Self { sample }
    }

    pub fn sample(&self) -> &EphemerisSample {
        &self.sample
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn julian_day(&self, _utc: DateTime<Utc>) -> f64 {
        self.sample.julian_day
    }

    fn body_position(&self, _julian_day: f64, body: Body) -> Result<RawPosition, EphemerisError> {
        self.sample
            .bodies
            .get(&body)
            .copied()
            .ok_or(EphemerisError::UnsupportedBody { body })
    }

    fn houses(
        &self,
        _julian_day: f64,
        _location: &GeoLocation,
        _system: HouseSystem,
    ) -> Result<HouseOutput, EphemerisError> {
        Ok(HouseOutput {
            ascendant: self.sample.ascendant,
            cusps: self.sample.cusps,
        })
    }

    fn ayanamsa(&self, _julian_day: f64) -> Result<f64, EphemerisError> {
        Ok(self.sample.ayanamsa)
    }
}
