use crate::body::Body;
use crate::error::{JyotishError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::EphemerisError;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(JyotishError::invalid_input(format!(
                "Latitude {} outside [-90, 90]",
                self.lat
            )));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(JyotishError::invalid_input(format!(
                "Longitude {} outside [-180, 180]",
                self.lon
            )));
        }
        Ok(())
    }
}

/// Raw sidereal position as the provider reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Longitude in degrees, not necessarily normalized
    pub longitude: f64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub distance: f64,
}

impl RawPosition {
    pub fn at(longitude: f64) -> Self {
        Self {
            longitude,
            latitude: 0.0,
            distance: 0.0,
        }
    }
}

/// Supported house systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Sripati,
    WholeSign,
    Placidus,
    Koch,
    Equal,
    Porphyry,
    Regiomontanus,
    Campanus,
}

/// House system name to Swiss Ephemeris system code
const HOUSE_SYSTEMS: &[(&str, HouseSystem, u8)] = &[
    ("sripati", HouseSystem::Sripati, b'S'),
    ("whole_sign", HouseSystem::WholeSign, b'W'),
    ("placidus", HouseSystem::Placidus, b'P'),
    ("koch", HouseSystem::Koch, b'K'),
    ("equal", HouseSystem::Equal, b'E'),
    ("porphyry", HouseSystem::Porphyry, b'O'),
    ("regiomontanus", HouseSystem::Regiomontanus, b'R'),
    ("campanus", HouseSystem::Campanus, b'C'),
];

impl HouseSystem {
    pub fn name(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| *system == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("sripati")
    }

    /// Single-letter system code used by Swiss Ephemeris.
    pub fn code(self) -> u8 {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| *system == self)
            .map(|(_, _, code)| *code)
            .unwrap_or(b'S')
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = EphemerisError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, _, _)| *name == wanted)
            .map(|(_, system, _)| *system)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(name, _, _)| name.to_string()).collect(),
            })
    }
}

/// Sidereal zodiac offsets the adapter can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ayanamsa {
    FaganBradley,
    #[default]
    Lahiri,
    DeLuce,
    Raman,
    Krishnamurti,
    Yukteshwar,
    TrueCitra,
}

/// Ayanamsa name to Swiss Ephemeris SIDM_* constant
const AYANAMSAS: &[(&str, Ayanamsa, i32)] = &[
    ("fagan_bradley", Ayanamsa::FaganBradley, 0),
    ("lahiri", Ayanamsa::Lahiri, 1),
    ("de_luce", Ayanamsa::DeLuce, 2),
    ("raman", Ayanamsa::Raman, 3),
    ("krishnamurti", Ayanamsa::Krishnamurti, 5),
    ("yukteshwar", Ayanamsa::Yukteshwar, 7),
    ("true_citra", Ayanamsa::TrueCitra, 27),
];

impl Ayanamsa {
    pub fn name(self) -> &'static str {
        AYANAMSAS
            .iter()
            .find(|(_, ayanamsa, _)| *ayanamsa == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("lahiri")
    }

    /// SIDM_* constant passed to `swe_set_sid_mode`.
    pub fn sidereal_mode(self) -> i32 {
        AYANAMSAS
            .iter()
            .find(|(_, ayanamsa, _)| *ayanamsa == self)
            .map(|(_, _, mode)| *mode)
            .unwrap_or(1)
    }
}

impl fmt::Display for Ayanamsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ayanamsa {
    type Err = EphemerisError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AYANAMSAS
            .iter()
            .find(|(name, _, _)| *name == wanted)
            .map(|(_, ayanamsa, _)| *ayanamsa)
            .ok_or_else(|| EphemerisError::InvalidAyanamsa {
                ayanamsa: s.to_string(),
                valid: AYANAMSAS.iter().map(|(name, _, _)| name.to_string()).collect(),
            })
    }
}

/// House cusps and ascendant for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseOutput {
    pub ascendant: f64,
    /// Cusp longitudes, houses 1..12 in order
    pub cusps: [f64; 12],
}

/// Everything the chart builder needs from the ephemeris for one birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSample {
    pub utc: DateTime<Utc>,
    pub julian_day: f64,
    pub ayanamsa: f64,
    #[serde(default)]
    pub house_system: HouseSystem,
    /// Sampled bodies, Sun through Rahu
    pub bodies: BTreeMap<Body, RawPosition>,
    pub ascendant: f64,
    pub cusps: [f64; 12],
}
