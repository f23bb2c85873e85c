use crate::aspects::AspectCalculator;
use crate::body::{Body, SAMPLED_BODIES};
use crate::chart::types::{BirthInfo, BodyPosition, Chart, ChartKind, HouseCusp};
use crate::ephemeris::{EphemerisError, EphemerisSample};
use crate::error::Result;
use crate::time::BirthInstant;
use log::debug;
use std::collections::BTreeMap;

/// Builds primary charts from ephemeris samples.
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    calculator: AspectCalculator,
}

impl ChartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(&self, instant: &BirthInstant, sample: &EphemerisSample) -> Result<Chart> {
        instant.location.validate()?;

        let mut bodies = BTreeMap::new();
        for body in SAMPLED_BODIES {
            let raw = sample
                .bodies
                .get(&body)
                .ok_or_else(|| EphemerisError::CalculationFailed {
                    body,
                    julian_day: sample.julian_day,
                    message: "missing from ephemeris sample".to_string(),
                })?;
            if !raw.longitude.is_finite() {
                return Err(EphemerisError::CalculationFailed {
                    body,
                    julian_day: sample.julian_day,
                    message: format!("non-finite longitude {}", raw.longitude),
                }
                .into());
            }
            bodies.insert(body, BodyPosition::new(raw.longitude, raw.latitude, raw.distance));
        }

        // Ketu is never sampled
        if let Some(rahu) = bodies.get(&Body::Rahu).copied() {
            bodies.insert(Body::Ketu, BodyPosition::at(rahu.longitude + 180.0));
        }

        if !sample.ascendant.is_finite() || sample.cusps.iter().any(|c| !c.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite ascendant or cusp at JD {}", sample.julian_day),
            }
            .into());
        }
        bodies.insert(Body::Ascendant, BodyPosition::at(sample.ascendant));

        let houses: BTreeMap<u8, HouseCusp> = sample
            .cusps
            .iter()
            .enumerate()
            .map(|(i, &cusp)| (i as u8 + 1, HouseCusp::at(cusp)))
            .collect();

        let aspects = self.calculator.compute(&bodies);

        debug!(
            "Built D1 chart at JD {:.5}: {} bodies, {} houses, {} aspects",
            sample.julian_day,
            bodies.len(),
            houses.len(),
            aspects.len()
        );

        Ok(Chart {
            kind: ChartKind::Rasi,
            birth: BirthInfo {
                civil: instant.civil,
                utc: sample.utc,
                location: instant.location,
            },
            julian_day: sample.julian_day,
            ayanamsa: sample.ayanamsa,
            bodies,
            houses,
            aspects,
        })
    }
}

/// Primary (D1) chart for a birth instant and its ephemeris sample.
pub fn build_chart(instant: &BirthInstant, sample: &EphemerisSample) -> Result<Chart> {
    ChartBuilder::new().build(instant, sample)
}
