use jyotish::vedic::DashaPeriod;
use jyotish::zodiac::to_dms;
use jyotish::{Chart, HouseAnalysis, StrengthReport};
use std::collections::BTreeMap;
use std::fmt::Write;

/// One line per house; cusps are shown within their sign as DMS.
pub fn houses_text(chart: &Chart, houses: &BTreeMap<u8, HouseAnalysis>) -> String {
    let mut out = String::from("== HOUSE ANALYSIS ==\n");
    for (number, house) in houses {
        let cusp = chart
            .houses
            .get(number)
            .map(|cusp| format!(" {}", to_dms(cusp.degrees_in_sign)))
            .unwrap_or_default();
        let ruler_house = house
            .ruler_house
            .map(|h| format!("house {h}"))
            .unwrap_or_else(|| "no house".to_string());
        let occupants: Vec<&str> = house.occupants.iter().map(|b| b.name()).collect();
        let _ = writeln!(
            out,
            "House {number}: {}{cusp} (lord {} in {ruler_house}) occupants: {}",
            house.sign,
            house.ruler,
            if occupants.is_empty() {
                "-".to_string()
            } else {
                occupants.join(", ")
            }
        );
    }
    out
}

pub fn strength_text(report: &StrengthReport) -> String {
    let mut out = String::from("== DIGNITY ==\n");
    for (body, strength) in &report.bodies {
        let _ = writeln!(
            out,
            "{body}: {} - {} ({}/10)",
            strength.sign, strength.dignity, strength.score
        );
    }
    let _ = writeln!(
        out,
        "Total: {}/{} ({:.1}%)",
        report.total_score, report.max_score, report.percent
    );
    out
}

pub fn dasha_text(periods: &[DashaPeriod]) -> String {
    let mut out = String::from("== VIMSHOTTARI DASHA ==\n");
    for period in periods {
        let _ = writeln!(
            out,
            "{:<8} {} -> {} ({:.2} years)",
            period.lord.name(),
            period.start.format("%Y-%m-%d"),
            period.end.format("%Y-%m-%d"),
            period.years
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use jyotish::{analyze_houses, build_chart, BirthInstant, EphemerisSample, GeoLocation};
    use jyotish::{build_dasha_timeline, HouseSystem, RawPosition, ALL_BODIES};

    #[test]
    fn test_dasha_text_lists_every_period() {
        let birth = Utc.with_ymd_and_hms(1990, 1, 1, 12, 0, 0).unwrap();
        let periods = build_dasha_timeline(birth, 0.0, 120.0).unwrap();
        let text = dasha_text(&periods);
        assert_eq!(text.lines().count(), periods.len() + 1);
        assert!(text.contains("Ketu     1990-01-01 -> 1997-01-01 (7.00 years)"));
    }

    #[test]
    fn test_houses_text_shows_cusp_dms() {
        let civil = chrono::NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let instant = BirthInstant::new(civil, GeoLocation { lat: 52.2, lon: 21.0 }).unwrap();
        let sample = EphemerisSample {
            utc: Utc.with_ymd_and_hms(1990, 1, 1, 12, 0, 0).unwrap(),
            julian_day: 2_447_893.0,
            ayanamsa: 23.7,
            house_system: HouseSystem::Sripati,
            bodies: ALL_BODIES[..8]
                .iter()
                .map(|body| (*body, RawPosition::at(45.0)))
                .collect(),
            ascendant: 4.25,
            cusps: std::array::from_fn(|i| 4.25 + 30.0 * i as f64),
        };
        let chart = build_chart(&instant, &sample).unwrap();
        let text = houses_text(&chart, &analyze_houses(&chart).unwrap());
        assert!(text.contains("House 1: Aries 4° 15' 0\" (lord Mars in house 2) occupants: Ascendant"));
        assert!(text.contains("House 2: Taurus 4° 15' 0\" (lord Venus in house 2)"));
    }
}
