use crate::body::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classical (angular) aspect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Opposition => "Opposition",
            Self::Trine => "Trine",
            Self::Square => "Square",
            Self::Sextile => "Sextile",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an aspect was formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "lowercase")]
pub enum AspectKind {
    Classical {
        aspect: AspectType,
        /// Measured separation, 0-180
        angle: f64,
        /// Deviation from the exact aspect angle
        orb: f64,
    },
    /// Sign-based drishti onto the nth house from the caster
    Vedic { house: u8 },
}

/// An aspect between two distinct bodies of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub from: Body,
    pub to: Body,
    #[serde(flatten)]
    pub kind: AspectKind,
    /// 0-100; Vedic aspects are always 100
    pub strength: f64,
}

impl Aspect {
    pub fn is_vedic(&self) -> bool {
        matches!(self.kind, AspectKind::Vedic { .. })
    }

    pub fn label(&self) -> String {
        match self.kind {
            AspectKind::Classical { aspect, .. } => aspect.name().to_string(),
            AspectKind::Vedic { house } => format!("Vedic {}{} house", house, ordinal_suffix(house)),
        }
    }
}

fn ordinal_suffix(n: u8) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
