use crate::aspects::Aspect;
use crate::body::Body;
use crate::chart::{BirthInfo, BodyPosition, Chart, HouseCusp};
use crate::error::{JyotishError, Result};
use crate::life_area::LifeAreaSpec;
use crate::vedic::VargaLabel;
use crate::zodiac::Sign;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sign placement of one body in one harmonic chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub longitude: f64,
    pub sign: Sign,
    pub degrees_in_sign: f64,
}

impl From<&BodyPosition> for Placement {
    fn from(position: &BodyPosition) -> Self {
        Self {
            longitude: position.longitude,
            sign: position.sign,
            degrees_in_sign: position.degrees_in_sign,
        }
    }
}

/// Positions from several harmonic charts keyed by body, then label.
/// The base chart supplies everything that is not a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeChart {
    pub base: VargaLabel,
    pub birth: BirthInfo,
    pub julian_day: f64,
    pub ayanamsa: f64,
    pub ascendant: Option<BodyPosition>,
    pub houses: BTreeMap<u8, HouseCusp>,
    pub aspects: Vec<Aspect>,
    pub bodies: BTreeMap<Body, BTreeMap<VargaLabel, Placement>>,
    /// Labels merged, in request order
    pub labels: Vec<VargaLabel>,
    /// Requested labels absent from the chart set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<VargaLabel>,
}

/// Merge the requested harmonic charts.
///
/// Labels missing from `charts` are skipped with a warning and listed in
/// [`CompositeChart::skipped`]; the first present label is the base.
pub fn combine_charts(
    charts: &BTreeMap<VargaLabel, Chart>,
    labels: &[VargaLabel],
) -> Result<CompositeChart> {
    if labels.is_empty() {
        return Err(JyotishError::invalid_input("No varga labels to combine"));
    }

    let mut present = Vec::new();
    let mut skipped = Vec::new();
    for label in labels {
        if present.contains(label) || skipped.contains(label) {
            continue;
        }
        if charts.contains_key(label) {
            present.push(*label);
        } else {
            warn!("Skipping {}: not in the supplied chart set", label);
            skipped.push(*label);
        }
    }

    let (base_label, base) = present
        .first()
        .and_then(|label| charts.get(label).map(|chart| (*label, chart)))
        .ok_or_else(|| {
            JyotishError::invalid_input(format!(
                "None of the requested vargas {:?} are available",
                labels.iter().map(ToString::to_string).collect::<Vec<_>>()
            ))
        })?;

    let mut bodies: BTreeMap<Body, BTreeMap<VargaLabel, Placement>> = BTreeMap::new();
    for label in &present {
        if let Some(chart) = charts.get(label) {
            for (body, position) in &chart.bodies {
                bodies
                    .entry(*body)
                    .or_default()
                    .insert(*label, Placement::from(position));
            }
        }
    }

    Ok(CompositeChart {
        base: base_label,
        birth: base.birth.clone(),
        julian_day: base.julian_day,
        ayanamsa: base.ayanamsa,
        ascendant: base.ascendant().copied(),
        houses: base.houses.clone(),
        aspects: base.aspects.clone(),
        bodies,
        labels: present,
        skipped,
    })
}

/// Combine the charts a life area asks for.
pub fn combine_for_life_area(
    charts: &BTreeMap<VargaLabel, Chart>,
    area: &LifeAreaSpec,
) -> Result<CompositeChart> {
    combine_charts(charts, &area.labels()?)
}
