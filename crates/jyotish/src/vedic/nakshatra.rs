//! Nakshatra utilities.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use crate::body::Body;
use crate::zodiac::normalize_degrees;
use serde::{Deserialize, Serialize};

pub const NAKSHATRA_COUNT: usize = 27;
pub const NAKSHATRA_SPAN: f64 = 360.0 / NAKSHATRA_COUNT as f64;
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

// (display name, lord); lords repeat the Vimshottari cycle three times
pub const NAKSHATRA_ORDER: &[(&str, Body)] = &[
    ("Ashwini", Body::Ketu),
    ("Bharani", Body::Venus),
    ("Krittika", Body::Sun),
    ("Rohini", Body::Moon),
    ("Mrigashira", Body::Mars),
    ("Ardra", Body::Rahu),
    ("Punarvasu", Body::Jupiter),
    ("Pushya", Body::Saturn),
    ("Ashlesha", Body::Mercury),
    ("Magha", Body::Ketu),
    ("Purva Phalguni", Body::Venus),
    ("Uttara Phalguni", Body::Sun),
    ("Hasta", Body::Moon),
    ("Chitra", Body::Mars),
    ("Swati", Body::Rahu),
    ("Vishakha", Body::Jupiter),
    ("Anuradha", Body::Saturn),
    ("Jyeshtha", Body::Mercury),
    ("Mula", Body::Ketu),
    ("Purva Ashadha", Body::Venus),
    ("Uttara Ashadha", Body::Sun),
    ("Shravana", Body::Moon),
    ("Dhanishta", Body::Mars),
    ("Shatabhisha", Body::Rahu),
    ("Purva Bhadrapada", Body::Jupiter),
    ("Uttara Bhadrapada", Body::Saturn),
    ("Revati", Body::Mercury),
];

/// Where a longitude falls among the 27 mansions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPlacement {
    pub index: usize,
    pub name: String,
    pub lord: Body,
    pub start: f64,
    pub end: f64,
    /// Degrees past the mansion start
    pub offset: f64,
    /// Fraction of the mansion already traversed, [0, 1)
    pub elapsed_fraction: f64,
    pub pada: u8,
}

/// Mansion index 0-26 for a longitude.
pub fn nakshatra_index(longitude: f64) -> usize {
    ((normalize_degrees(longitude) / NAKSHATRA_SPAN) as usize).min(NAKSHATRA_COUNT - 1)
}

/// Return the nakshatra containing the given longitude.
pub fn nakshatra_for_longitude(longitude: f64) -> NakshatraPlacement {
    let lon = normalize_degrees(longitude);
    let index = nakshatra_index(lon);
    let (name, lord) = NAKSHATRA_ORDER[index];

    let start = index as f64 * NAKSHATRA_SPAN;
    let offset = (lon - start).max(0.0);
    let elapsed_fraction = (offset / NAKSHATRA_SPAN).min(1.0);
    let pada = ((offset / PADA_SPAN) as u8 + 1).min(4);

    NakshatraPlacement {
        index,
        name: name.to_string(),
        lord,
        start,
        end: start + NAKSHATRA_SPAN,
        offset,
        elapsed_fraction,
        pada,
    }
}
