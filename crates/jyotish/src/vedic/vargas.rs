//! Divisional chart (varga) derivation.
//!
//! Each sign is cut into `n` equal parts and every part is mapped to a
//! destination sign by a harmonic-specific rule. Only the destination sign
//! survives: the harmonic longitude is the start of that sign.

use crate::aspects::AspectCalculator;
use crate::chart::{build_chart, BodyPosition, Chart, ChartKind};
use crate::ephemeris::EphemerisSample;
use crate::error::{JyotishError, Result};
use crate::time::BirthInstant;
use crate::zodiac::{
    degrees_in_sign, normalize_degrees, sign_index, Element, Modality, Sign, SIGN_SPAN,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const MAX_HARMONIC: u8 = 12;

/// Harmonic chart label, "D1" through "D12".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VargaLabel(pub u8);

impl VargaLabel {
    pub const D1: VargaLabel = VargaLabel(1);

    pub fn new(harmonic: u8) -> Result<Self> {
        if (1..=MAX_HARMONIC).contains(&harmonic) {
            Ok(Self(harmonic))
        } else {
            Err(JyotishError::InvalidHarmonic(harmonic))
        }
    }

    pub fn harmonic(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = VargaLabel> {
        (1..=MAX_HARMONIC).map(VargaLabel)
    }

    /// Parse a comma-separated list such as `"D1,D9,D7"`.
    pub fn parse_list(combination: &str) -> Result<Vec<VargaLabel>> {
        combination
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<VargaLabel>())
            .collect()
    }
}

impl fmt::Display for VargaLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

impl FromStr for VargaLabel {
    type Err = JyotishError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .strip_prefix('D')
            .or_else(|| trimmed.strip_prefix('d'))
            .and_then(|digits| digits.parse::<u8>().ok())
            .filter(|n| (1..=MAX_HARMONIC).contains(n))
            .map(VargaLabel)
            .ok_or_else(|| JyotishError::UnknownVargaLabel(s.to_string()))
    }
}

impl TryFrom<String> for VargaLabel {
    type Error = JyotishError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<VargaLabel> for String {
    fn from(label: VargaLabel) -> Self {
        label.to_string()
    }
}

/// Destination sign for (rasi, part), both zero-based.
pub type DivisionRule = fn(u8, u8) -> u8;

pub struct VargaSpec {
    pub harmonic: u8,
    pub name: &'static str,
    pub rule: DivisionRule,
}

pub const VARGAS: &[VargaSpec] = &[
    VargaSpec { harmonic: 1, name: "Rasi", rule: rasi_d1 },
    VargaSpec { harmonic: 2, name: "Hora", rule: hora_d2 },
    VargaSpec { harmonic: 3, name: "Drekkana", rule: drekkana_d3 },
    VargaSpec { harmonic: 4, name: "Chaturthamsa", rule: chaturthamsa_d4 },
    VargaSpec { harmonic: 5, name: "Panchamsa", rule: panchamsa_d5 },
    VargaSpec { harmonic: 6, name: "Shashthamsa", rule: shashthamsa_d6 },
    VargaSpec { harmonic: 7, name: "Saptamsa", rule: saptamsa_d7 },
    VargaSpec { harmonic: 8, name: "Ashtamsa", rule: ashtamsa_d8 },
    VargaSpec { harmonic: 9, name: "Navamsa", rule: navamsa_d9 },
    VargaSpec { harmonic: 10, name: "Dasamsa", rule: dasamsa_d10 },
    VargaSpec { harmonic: 11, name: "Rudramsa", rule: rudramsa_d11 },
    VargaSpec { harmonic: 12, name: "Dvadasamsa", rule: dvadasamsa_d12 },
];

pub fn varga_spec(harmonic: u8) -> Result<&'static VargaSpec> {
    VARGAS
        .iter()
        .find(|spec| spec.harmonic == harmonic)
        .ok_or(JyotishError::InvalidHarmonic(harmonic))
}

/// Traditional name of a harmonic chart ("Navamsa" for 9).
pub fn varga_name(harmonic: u8) -> &'static str {
    varga_spec(harmonic).map(|spec| spec.name).unwrap_or("Unknown")
}

pub fn rasi_d1(rasi: u8, _part: u8) -> u8 {
    rasi % 12
}

/// Even (0-based) signs: first half to sign 4, second half to Aries.
/// Odd signs reverse the halves.
pub fn hora_d2(rasi: u8, part: u8) -> u8 {
    match (rasi % 2 == 0, part == 0) {
        (true, true) | (false, false) => 4,
        _ => 0,
    }
}

pub fn drekkana_d3(rasi: u8, part: u8) -> u8 {
    const OFFSETS: [u8; 3] = [0, 4, 8];
    (rasi + OFFSETS[usize::from(part.min(2))]) % 12
}

pub fn chaturthamsa_d4(rasi: u8, part: u8) -> u8 {
    (rasi * 4 + part) % 12
}

/// The sign's modality picks the starting offset.
pub fn panchamsa_d5(rasi: u8, part: u8) -> u8 {
    let offset = match Sign::from_index(rasi).modality() {
        Modality::Movable => 0,
        Modality::Fixed => 4,
        Modality::Dual => 8,
    };
    (rasi + offset + part) % 12
}

pub fn shashthamsa_d6(rasi: u8, part: u8) -> u8 {
    (rasi * 6 + part) % 12
}

pub fn saptamsa_d7(rasi: u8, part: u8) -> u8 {
    if rasi % 2 == 0 {
        (rasi + 6 + part) % 12
    } else {
        (rasi + part) % 12
    }
}

pub fn ashtamsa_d8(rasi: u8, part: u8) -> u8 {
    (rasi * 8 + part) % 12
}

/// Fire from Aries, earth from sign 4, air from sign 8; water reuses the
/// fire base.
pub fn navamsa_d9(rasi: u8, part: u8) -> u8 {
    let base = match Sign::from_index(rasi).element() {
        Element::Fire | Element::Water => 0,
        Element::Earth => 4,
        Element::Air => 8,
    };
    (base + part) % 12
}

pub fn dasamsa_d10(rasi: u8, part: u8) -> u8 {
    if rasi % 2 == 0 {
        (rasi * 10 + part) % 12
    } else {
        (rasi * 10 + 9 + part) % 12
    }
}

pub fn rudramsa_d11(rasi: u8, part: u8) -> u8 {
    (rasi * 11 + part) % 12
}

pub fn dvadasamsa_d12(rasi: u8, part: u8) -> u8 {
    (rasi * 12 + part) % 12
}

/// Zero-based part of the sign a degree falls in, for `n` divisions.
pub fn division_part(degree_in_sign: f64, n: u8) -> u8 {
    let n = n.max(1);
    let size = SIGN_SPAN / f64::from(n);
    ((degree_in_sign / size).floor().max(0.0) as u8).min(n - 1)
}

/// Harmonic longitude of a D1 longitude. Identity for `n == 1`.
pub fn harmonic_longitude(longitude: f64, n: u8) -> Result<f64> {
    let spec = varga_spec(n)?;
    if n == 1 {
        return Ok(longitude);
    }
    let rasi = sign_index(longitude);
    let part = division_part(degrees_in_sign(longitude), n);
    let destination = (spec.rule)(rasi, part);
    Ok(normalize_degrees(f64::from(destination) * SIGN_SPAN))
}

/// Derive the `n`th harmonic chart from a primary chart.
///
/// Bodies keep their latitude and distance and remember their D1 longitude.
/// Houses are not carried over; aspects are recomputed.
pub fn derive_varga(chart: &Chart, n: u8) -> Result<Chart> {
    varga_spec(n)?;
    if !chart.is_primary() {
        return Err(JyotishError::invalid_input(format!(
            "Harmonic charts are derived from D1, got {}",
            chart.label()
        )));
    }
    if n == 1 {
        return Ok(chart.clone());
    }

    let mut bodies = BTreeMap::new();
    for (body, position) in &chart.bodies {
        let longitude = harmonic_longitude(position.longitude, n)?;
        let mut derived = BodyPosition::new(longitude, position.latitude, position.distance);
        derived.original_longitude = Some(position.longitude);
        bodies.insert(*body, derived);
    }
    let aspects = AspectCalculator::new().compute(&bodies);

    debug!("Derived D{} chart with {} aspects", n, aspects.len());

    Ok(Chart {
        kind: ChartKind::Varga(n),
        birth: chart.birth.clone(),
        julian_day: chart.julian_day,
        ayanamsa: chart.ayanamsa,
        bodies,
        houses: BTreeMap::new(),
        aspects,
    })
}

/// D1 through D12 for an already-built primary chart.
pub fn derive_all_from_chart(chart: &Chart) -> Result<BTreeMap<VargaLabel, Chart>> {
    VargaLabel::all()
        .map(|label| derive_varga(chart, label.harmonic()).map(|varga| (label, varga)))
        .collect()
}

/// Build the primary chart and every harmonic chart for one birth.
pub fn derive_all_vargas(
    instant: &BirthInstant,
    sample: &EphemerisSample,
) -> Result<BTreeMap<VargaLabel, Chart>> {
    let primary = build_chart(instant, sample)?;
    derive_all_from_chart(&primary)
}
