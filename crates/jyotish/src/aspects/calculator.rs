use crate::aspects::types::{Aspect, AspectKind, AspectType};
use crate::body::Body;
use crate::chart::BodyPosition;
use std::collections::BTreeMap;

/// Aspect angles and orbs in order of frequency (most common first)
pub const ASPECT_ANGLES: &[(AspectType, f64, f64)] = &[
    (AspectType::Conjunction, 0.0, 10.0),
    (AspectType::Opposition, 180.0, 10.0),
    (AspectType::Trine, 120.0, 8.0),
    (AspectType::Square, 90.0, 8.0),
    (AspectType::Sextile, 60.0, 6.0),
];

/// Houses (counted from the caster's sign, caster = 1) receiving special aspects
pub const VEDIC_ASPECTS: &[(Body, &[u8])] = &[
    (Body::Mars, &[4, 7, 8]),
    (Body::Jupiter, &[5, 7, 9]),
    (Body::Saturn, &[3, 7, 10]),
    (Body::Rahu, &[5, 7, 9]),
    (Body::Ketu, &[5, 7, 9]),
];

/// Every body without a special aspect still casts the 7th
const UNIVERSAL_ASPECT: &[u8] = &[7];

pub fn vedic_aspect_houses(body: Body) -> &'static [u8] {
    VEDIC_ASPECTS
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, houses)| *houses)
        .unwrap_or(UNIVERSAL_ASPECT)
}

/// Shortest arc between two longitudes, 0-180
pub fn separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Classical aspects followed by Vedic special aspects.
    pub fn compute(&self, positions: &BTreeMap<Body, BodyPosition>) -> Vec<Aspect> {
        let mut aspects = self.classical_aspects(positions);
        aspects.extend(self.vedic_aspects(positions));
        aspects
    }

    /// Angular aspects for every unordered pair, in body-table order.
    pub fn classical_aspects(&self, positions: &BTreeMap<Body, BodyPosition>) -> Vec<Aspect> {
        let bodies: Vec<(&Body, &BodyPosition)> = positions.iter().collect();

        let mut aspects = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (from, p1) = bodies[i];
                let (to, p2) = bodies[j];
                aspects.extend(
                    self.calculate_aspects(p1.longitude, p2.longitude)
                        .map(|(kind, strength)| Aspect {
                            from: *from,
                            to: *to,
                            kind,
                            strength,
                        }),
                );
            }
        }
        aspects
    }

    /// Every classical aspect whose orb contains the separation of two
    /// longitudes. Orbs do not overlap, but matches are not suppressed.
    pub fn calculate_aspects(
        &self,
        lon1: f64,
        lon2: f64,
    ) -> impl Iterator<Item = (AspectKind, f64)> {
        let angle_diff = separation(lon1, lon2);

        ASPECT_ANGLES
            .iter()
            .filter_map(move |(aspect, aspect_angle, orb)| {
                let deviation = (angle_diff - aspect_angle).abs();
                if deviation > *orb {
                    return None;
                }
                let strength = (100.0 - deviation / orb * 100.0).clamp(0.0, 100.0);
                Some((
                    AspectKind::Classical {
                        aspect: *aspect,
                        angle: angle_diff,
                        orb: deviation,
                    },
                    strength,
                ))
            })
    }

    /// Sign-based special aspects, per caster in body-table order.
    pub fn vedic_aspects(&self, positions: &BTreeMap<Body, BodyPosition>) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for (caster, caster_pos) in positions {
            for &house in vedic_aspect_houses(*caster) {
                let target_sign = caster_pos.sign.nth_from(house);
                for (target, target_pos) in positions {
                    if target == caster || target_pos.sign != target_sign {
                        continue;
                    }
                    aspects.push(Aspect {
                        from: *caster,
                        to: *target,
                        kind: AspectKind::Vedic { house },
                        strength: 100.0,
                    });
                }
            }
        }
        aspects
    }
}
