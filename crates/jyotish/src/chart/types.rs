use crate::aspects::Aspect;
use crate::body::Body;
use crate::ephemeris::GeoLocation;
use crate::vedic::VargaLabel;
use crate::zodiac::{degrees_in_sign, normalize_degrees, Sign};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which sign system a chart is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// The primary (D1) chart
    Rasi,
    /// A harmonic subdivision D2..D12
    Varga(u8),
}

impl ChartKind {
    pub fn harmonic(self) -> u8 {
        match self {
            Self::Rasi => 1,
            Self::Varga(n) => n,
        }
    }

    pub fn label(self) -> VargaLabel {
        VargaLabel(self.harmonic())
    }
}

/// Descriptive fields of the birth the chart was cast for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub civil: NaiveDateTime,
    pub utc: DateTime<Utc>,
    pub location: GeoLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub sign: Sign,
    /// Position within the sign (0-30)
    pub degrees_in_sign: f64,
    /// D1 longitude a harmonic position was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_longitude: Option<f64>,
}

impl BodyPosition {
    pub fn new(longitude: f64, latitude: f64, distance: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        Self {
            longitude,
            latitude,
            distance,
            sign: Sign::from_longitude(longitude),
            degrees_in_sign: degrees_in_sign(longitude),
            original_longitude: None,
        }
    }

    pub fn at(longitude: f64) -> Self {
        Self::new(longitude, 0.0, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub longitude: f64,
    pub sign: Sign,
    pub degrees_in_sign: f64,
}

impl HouseCusp {
    pub fn at(longitude: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        Self {
            longitude,
            sign: Sign::from_longitude(longitude),
            degrees_in_sign: degrees_in_sign(longitude),
        }
    }
}

/// A primary or harmonic chart. Built once, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub birth: BirthInfo,
    pub julian_day: f64,
    pub ayanamsa: f64,
    /// All ten bodies, ascendant included
    pub bodies: BTreeMap<Body, BodyPosition>,
    /// Houses 1..12; empty for harmonic charts
    pub houses: BTreeMap<u8, HouseCusp>,
    pub aspects: Vec<Aspect>,
}

impl Chart {
    pub fn label(&self) -> VargaLabel {
        self.kind.label()
    }

    pub fn is_primary(&self) -> bool {
        self.kind == ChartKind::Rasi
    }

    pub fn position(&self, body: Body) -> Option<&BodyPosition> {
        self.bodies.get(&body)
    }

    pub fn ascendant(&self) -> Option<&BodyPosition> {
        self.position(Body::Ascendant)
    }
}
