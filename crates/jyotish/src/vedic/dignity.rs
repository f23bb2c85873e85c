//! Planetary dignity (placement strength).
//!
//! One static row per body holds its moolatrikona, exaltation and
//! debilitation signs plus its natural friends and enemies. Sign lordship
//! comes from [`Sign::ruler`].

use crate::body::Body;
use crate::chart::Chart;
use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exaltation,
    Moolatrikona,
    OwnSign,
    FriendSign,
    Neutral,
    EnemySign,
    Debilitation,
}

pub const MAX_SCORE: u32 = 10;

impl Dignity {
    pub fn score(self) -> u32 {
        match self {
            Self::Exaltation => 10,
            Self::Moolatrikona => 9,
            Self::OwnSign => 8,
            Self::FriendSign => 6,
            Self::Neutral => 5,
            Self::EnemySign => 2,
            Self::Debilitation => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Exaltation => "Exaltation",
            Self::Moolatrikona => "Moolatrikona",
            Self::OwnSign => "Own Sign",
            Self::FriendSign => "Friend's Sign",
            Self::Neutral => "Neutral",
            Self::EnemySign => "Enemy's Sign",
            Self::Debilitation => "Debilitation",
        }
    }
}

impl fmt::Display for Dignity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct DignityEntry {
    pub body: Body,
    pub moolatrikona: Option<Sign>,
    pub exaltation: Sign,
    pub debilitation: Sign,
    pub friends: &'static [Body],
    pub enemies: &'static [Body],
}

use Body::*;
use Sign::*;

pub const DIGNITY_TABLE: &[DignityEntry] = &[
    DignityEntry {
        body: Sun,
        moolatrikona: Some(Leo),
        exaltation: Aries,
        debilitation: Libra,
        friends: &[Moon, Mars, Jupiter],
        enemies: &[Saturn, Venus],
    },
    DignityEntry {
        body: Moon,
        moolatrikona: Some(Cancer),
        exaltation: Taurus,
        debilitation: Scorpio,
        friends: &[Sun, Mercury],
        enemies: &[Rahu, Ketu],
    },
    DignityEntry {
        body: Mercury,
        moolatrikona: Some(Virgo),
        exaltation: Virgo,
        debilitation: Pisces,
        friends: &[Sun, Venus],
        enemies: &[Moon],
    },
    DignityEntry {
        body: Venus,
        moolatrikona: Some(Libra),
        exaltation: Pisces,
        debilitation: Virgo,
        friends: &[Mercury, Saturn],
        enemies: &[Sun, Moon],
    },
    DignityEntry {
        body: Mars,
        moolatrikona: Some(Aries),
        exaltation: Capricorn,
        debilitation: Cancer,
        friends: &[Sun, Moon, Jupiter],
        enemies: &[Mercury],
    },
    DignityEntry {
        body: Jupiter,
        moolatrikona: Some(Sagittarius),
        exaltation: Cancer,
        debilitation: Capricorn,
        friends: &[Sun, Moon, Mars],
        enemies: &[Mercury, Venus],
    },
    DignityEntry {
        body: Saturn,
        moolatrikona: Some(Aquarius),
        exaltation: Libra,
        debilitation: Aries,
        friends: &[Mercury, Venus],
        enemies: &[Sun, Moon, Mars],
    },
    DignityEntry {
        body: Rahu,
        moolatrikona: None,
        exaltation: Taurus,
        debilitation: Scorpio,
        friends: &[Venus, Saturn],
        enemies: &[Sun, Moon],
    },
    DignityEntry {
        body: Ketu,
        moolatrikona: None,
        exaltation: Scorpio,
        debilitation: Taurus,
        friends: &[Mars, Sun],
        enemies: &[Venus, Mercury],
    },
];

lazy_static::lazy_static! {
    static ref DIGNITY_INDEX: HashMap<Body, &'static DignityEntry> =
        DIGNITY_TABLE.iter().map(|entry| (entry.body, entry)).collect();
}

pub fn dignity_entry(body: Body) -> Option<&'static DignityEntry> {
    DIGNITY_INDEX.get(&body).copied()
}

/// Classify a body in a sign. The first matching rule wins:
/// moolatrikona, exaltation, debilitation, then the sign lord's relation.
/// Bodies without a table row (the ascendant) are always neutral.
pub fn dignity_for(body: Body, sign: Sign) -> Dignity {
    let Some(entry) = dignity_entry(body) else {
        return Dignity::Neutral;
    };

    if entry.moolatrikona == Some(sign) {
        return Dignity::Moolatrikona;
    }
    if entry.exaltation == sign {
        return Dignity::Exaltation;
    }
    if entry.debilitation == sign {
        return Dignity::Debilitation;
    }

    let ruler = sign.ruler();
    if ruler == body {
        Dignity::OwnSign
    } else if entry.friends.contains(&ruler) {
        Dignity::FriendSign
    } else if entry.enemies.contains(&ruler) {
        Dignity::EnemySign
    } else {
        Dignity::Neutral
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStrength {
    pub sign: Sign,
    pub dignity: Dignity,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub bodies: BTreeMap<Body, BodyStrength>,
    /// Sum of scores over the non-nodal bodies
    pub total_score: u32,
    pub max_score: u32,
    /// total / max * 100
    pub percent: f64,
}

/// Per-body dignities and the whole-chart strength. Rahu and Ketu are
/// classified but left out of the aggregate.
pub fn score_strength(chart: &Chart) -> StrengthReport {
    let mut bodies = BTreeMap::new();
    let mut total_score = 0;
    let mut max_score = 0;

    for (body, position) in &chart.bodies {
        let dignity = dignity_for(*body, position.sign);
        let score = dignity.score();
        if !body.is_node() {
            total_score += score;
            max_score += MAX_SCORE;
        }
        bodies.insert(
            *body,
            BodyStrength {
                sign: position.sign,
                dignity,
                score,
            },
        );
    }

    let percent = if max_score > 0 {
        f64::from(total_score) / f64::from(max_score) * 100.0
    } else {
        0.0
    };

    StrengthReport {
        bodies,
        total_score,
        max_score,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ALL_BODIES;
    use crate::zodiac::ALL_SIGNS;

    #[test]
    fn test_moolatrikona_beats_exaltation() {
        // Mercury's moolatrikona and exaltation are both Virgo
        assert_eq!(dignity_for(Mercury, Virgo), Dignity::Moolatrikona);
        assert_eq!(dignity_for(Sun, Leo), Dignity::Moolatrikona);
    }

    #[test]
    fn test_exaltation_and_debilitation() {
        assert_eq!(dignity_for(Sun, Aries), Dignity::Exaltation);
        assert_eq!(dignity_for(Sun, Libra), Dignity::Debilitation);
        assert_eq!(dignity_for(Rahu, Taurus), Dignity::Exaltation);
        assert_eq!(dignity_for(Ketu, Taurus), Dignity::Debilitation);
    }

    #[test]
    fn test_relationship_rules() {
        // Mars rules Scorpio (moolatrikona is Aries)
        assert_eq!(dignity_for(Mars, Scorpio), Dignity::OwnSign);
        // Sagittarius is ruled by Jupiter, a friend of the Sun
        assert_eq!(dignity_for(Sun, Sagittarius), Dignity::FriendSign);
        // Capricorn is ruled by Saturn, an enemy of the Sun
        assert_eq!(dignity_for(Sun, Capricorn), Dignity::EnemySign);
        // Gemini is ruled by Mercury, neither friend nor enemy of the Sun
        assert_eq!(dignity_for(Sun, Gemini), Dignity::Neutral);
        // Nodes have no moolatrikona; Libra is Venus-ruled, a Rahu friend
        assert_eq!(dignity_for(Rahu, Libra), Dignity::FriendSign);
    }

    #[test]
    fn test_ascendant_is_neutral() {
        for sign in ALL_SIGNS {
            assert_eq!(dignity_for(Ascendant, sign), Dignity::Neutral);
        }
    }

    #[test]
    fn test_every_pair_classifies() {
        for body in ALL_BODIES {
            for sign in ALL_SIGNS {
                let score = dignity_for(body, sign).score();
                assert!(score <= MAX_SCORE);
            }
        }
    }
}
