//! Vimshottari dasha timeline.
//!
//! The Moon's nakshatra at birth picks the first lord. Whatever part of that
//! nakshatra the Moon has not yet crossed is the share of the lord's period
//! still to run; the nine lords then follow in fixed order.

use crate::body::Body;
use crate::chart::Chart;
use crate::error::{JyotishError, Result};
use crate::time::add_years;
use crate::vedic::nakshatra::{nakshatra_for_longitude, NakshatraPlacement};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;
pub const DEFAULT_HORIZON_YEARS: f64 = 120.0;

/// Remainders below this are treated as a closed horizon.
const YEAR_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

impl DashaLevel {
    pub fn child(self) -> Option<DashaLevel> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

pub const VIMSHOTTARI_SEQUENCE: &[(Body, f64)] = &[
    (Body::Ketu, 7.0),
    (Body::Venus, 20.0),
    (Body::Sun, 6.0),
    (Body::Moon, 10.0),
    (Body::Mars, 7.0),
    (Body::Rahu, 18.0),
    (Body::Jupiter, 16.0),
    (Body::Saturn, 19.0),
    (Body::Mercury, 17.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Body,
    pub level: DashaLevel,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Length of the part between `start` and `end`, in years
    pub years: f64,
    /// Length of the whole period, including parts cut off at either end
    pub full_years: f64,
    /// Years of the whole period that had already run at `start`
    #[serde(default)]
    pub elapsed_years: f64,
}

impl DashaPeriod {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Where the Moon stands in its birth nakshatra, as dasha time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaBalance {
    pub nakshatra: NakshatraPlacement,
    pub lord: Body,
    pub period_years: f64,
    pub elapsed_fraction: f64,
    pub years_elapsed: f64,
    pub years_remaining: f64,
}

fn sequence_index(lord: Body) -> Result<usize> {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(body, _)| *body == lord)
        .ok_or_else(|| JyotishError::invalid_input(format!("{} has no Vimshottari period", lord)))
}

pub fn dasha_balance(moon_longitude: f64) -> Result<DashaBalance> {
    if !moon_longitude.is_finite() {
        return Err(JyotishError::invalid_input(format!(
            "Moon longitude must be finite, got {}",
            moon_longitude
        )));
    }
    let nakshatra = nakshatra_for_longitude(moon_longitude);
    let lord = nakshatra.lord;
    let (_, period_years) = VIMSHOTTARI_SEQUENCE[sequence_index(lord)?];
    let elapsed_fraction = nakshatra.elapsed_fraction;
    let years_elapsed = period_years * elapsed_fraction;

    Ok(DashaBalance {
        nakshatra,
        lord,
        period_years,
        elapsed_fraction,
        years_elapsed,
        years_remaining: period_years - years_elapsed,
    })
}

fn build_period(
    lord: Body,
    level: DashaLevel,
    start: DateTime<Utc>,
    years: f64,
    full_years: f64,
    elapsed_years: f64,
) -> Result<DashaPeriod> {
    Ok(DashaPeriod {
        lord,
        level,
        start,
        end: add_years(start, years)?,
        years,
        full_years,
        elapsed_years,
    })
}

/// Mahadashas from birth until `horizon_years` have been covered.
///
/// The first entry is the unexpired balance of the birth lord; the last is
/// cut short so the durations add up to the horizon.
pub fn build_dasha_timeline(
    birth: DateTime<Utc>,
    moon_longitude: f64,
    horizon_years: f64,
) -> Result<Vec<DashaPeriod>> {
    if !horizon_years.is_finite() || horizon_years <= 0.0 {
        return Err(JyotishError::invalid_input(format!(
            "Dasha horizon must be a positive number of years, got {}",
            horizon_years
        )));
    }

    let balance = dasha_balance(moon_longitude)?;
    let mut index = sequence_index(balance.lord)?;
    let mut periods = Vec::new();
    let mut covered = 0.0;
    let mut current = birth;

    if balance.years_remaining > 0.0 {
        let years = balance.years_remaining.min(horizon_years);
        let period = build_period(
            balance.lord,
            DashaLevel::Mahadasha,
            current,
            years,
            balance.period_years,
            balance.years_elapsed,
        )?;
        current = period.end;
        covered += years;
        periods.push(period);
    }

    while horizon_years - covered > YEAR_EPSILON {
        index = (index + 1) % VIMSHOTTARI_SEQUENCE.len();
        let (lord, full_years) = VIMSHOTTARI_SEQUENCE[index];
        let years = full_years.min(horizon_years - covered);
        let period = build_period(lord, DashaLevel::Mahadasha, current, years, full_years, 0.0)?;
        current = period.end;
        covered += years;
        periods.push(period);
    }

    debug!(
        "Dasha timeline from {} ({} balance {:.3}y): {} periods over {}y",
        birth,
        balance.lord,
        balance.years_remaining,
        periods.len(),
        horizon_years
    );

    Ok(periods)
}

/// Timeline from a chart's UTC birth time and Moon.
pub fn timeline_for_chart(chart: &Chart, horizon_years: f64) -> Result<Vec<DashaPeriod>> {
    let moon = chart
        .position(Body::Moon)
        .ok_or_else(|| JyotishError::invalid_input("Moon position required for dasha timeline"))?;
    let longitude = moon.original_longitude.unwrap_or(moon.longitude);
    build_dasha_timeline(chart.birth.utc, longitude, horizon_years)
}

/// Split a period into its sub-periods, starting with its own lord.
///
/// The nine children are laid out over the parent's full length, each
/// lasting `parent.full_years * lord_years / 120`, then clipped to the part
/// the parent actually covers. A birth balance therefore keeps only the
/// unexpired tail of the sequence. The last child ends exactly where the
/// parent ends.
pub fn sub_periods(parent: &DashaPeriod) -> Result<Vec<DashaPeriod>> {
    let level = parent.level.child().ok_or_else(|| {
        JyotishError::invalid_input("Pratyantardasha is the deepest supported level")
    })?;
    let start_index = sequence_index(parent.lord)?;
    let window_start = parent.elapsed_years;
    let window_end = parent.elapsed_years + parent.years;

    let mut children = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    let mut cumulative = 0.0;
    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let (lord, lord_years) =
            VIMSHOTTARI_SEQUENCE[(start_index + offset) % VIMSHOTTARI_SEQUENCE.len()];
        let full_years = parent.full_years * lord_years / VIMSHOTTARI_TOTAL_YEARS;
        let child_start = cumulative;
        cumulative += full_years;

        let from = child_start.max(window_start);
        let to = cumulative.min(window_end);
        if to - from <= YEAR_EPSILON {
            continue;
        }
        children.push(DashaPeriod {
            lord,
            level,
            start: add_years(parent.start, from - window_start)?,
            end: add_years(parent.start, to - window_start)?,
            years: to - from,
            full_years,
            elapsed_years: from - child_start,
        });
    }

    if let Some(last) = children.last_mut() {
        last.end = parent.end;
    }
    Ok(children)
}

/// The period running at `instant`, if any.
pub fn current_period(periods: &[DashaPeriod], instant: DateTime<Utc>) -> Option<&DashaPeriod> {
    periods.iter().find(|period| period.contains(instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn birth() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sequence_totals_120() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
        assert_eq!(total, VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn test_balance_at_zero() {
        let balance = dasha_balance(0.0).unwrap();
        assert_eq!(balance.nakshatra.index, 0);
        assert_eq!(balance.lord, Body::Ketu);
        assert_eq!(balance.elapsed_fraction, 0.0);
        assert_eq!(balance.years_remaining, 7.0);
    }

    #[test]
    fn test_balance_halfway_through_bharani() {
        // Bharani: 13°20' - 26°40', Venus 20 years
        let balance = dasha_balance(20.0).unwrap();
        assert_eq!(balance.lord, Body::Venus);
        assert!((balance.elapsed_fraction - 0.5).abs() < 1e-9);
        assert!((balance.years_remaining - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_timeline_from_ashwini_start() {
        let periods = build_dasha_timeline(birth(), 0.0, DEFAULT_HORIZON_YEARS).unwrap();
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].lord, Body::Ketu);
        assert_eq!(periods[0].years, 7.0);
        assert_eq!(periods[0].end, Utc.with_ymd_and_hms(1997, 1, 1, 12, 0, 0).unwrap());
        assert_eq!(periods[8].lord, Body::Mercury);
    }

    #[test]
    fn test_short_horizon_truncates_first_period() {
        let periods = build_dasha_timeline(birth(), 0.0, 3.0).unwrap();
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].years, 3.0);
    }

    #[test]
    fn test_rejects_bad_horizon() {
        assert!(build_dasha_timeline(birth(), 0.0, 0.0).is_err());
        assert!(build_dasha_timeline(birth(), 0.0, -5.0).is_err());
        assert!(build_dasha_timeline(birth(), 0.0, f64::NAN).is_err());
        assert!(build_dasha_timeline(birth(), f64::INFINITY, 120.0).is_err());
    }

    #[test]
    fn test_sub_periods_fill_parent() {
        let parent =
            build_period(Body::Venus, DashaLevel::Mahadasha, birth(), 20.0, 20.0, 0.0).unwrap();
        let children = sub_periods(&parent).unwrap();
        assert_eq!(children.len(), 9);
        assert_eq!(children[0].lord, Body::Venus);
        assert_eq!(children[1].lord, Body::Sun);
        assert_eq!(children[0].level, DashaLevel::Antardasha);
        // Venus-Venus antardasha: 20 * 20 / 120
        assert!((children[0].years - 20.0 * 20.0 / 120.0).abs() < 1e-9);
        assert_eq!(children[0].start, parent.start);
        assert_eq!(children[8].end, parent.end);
        for pair in children.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let total: f64 = children.iter().map(|c| c.years).sum();
        assert!((total - parent.years).abs() < 1e-9);
    }

    #[test]
    fn test_pratyantardasha_has_no_children() {
        let leaf =
            build_period(Body::Sun, DashaLevel::Pratyantardasha, birth(), 0.1, 0.1, 0.0).unwrap();
        assert!(sub_periods(&leaf).is_err());
    }

    #[test]
    fn test_current_period() {
        let periods = build_dasha_timeline(birth(), 0.0, 120.0).unwrap();
        let at = Utc.with_ymd_and_hms(2000, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(current_period(&periods, at).map(|p| p.lord), Some(Body::Venus));
    }
}
