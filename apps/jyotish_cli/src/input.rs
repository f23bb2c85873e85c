use anyhow::Context;
use chrono::{FixedOffset, NaiveDateTime};
use jyotish::{BirthInstant, EphemerisSample, GeoLocation};
use std::fs;
use std::path::Path;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Civil birth time, seconds optional.
pub fn parse_civil(text: &str) -> anyhow::Result<NaiveDateTime> {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Could not parse --date {:?} (expected YYYY-MM-DD HH:MM[:SS])",
                text
            )
        })
}

/// UTC offset such as `+01:00` or `-0530`.
pub fn parse_offset(text: &str) -> anyhow::Result<FixedOffset> {
    text.trim()
        .parse::<FixedOffset>()
        .map_err(|e| anyhow::anyhow!("Invalid --offset {:?}: {e}", text))
}

pub fn birth_instant(
    date: &str,
    lat: f64,
    lon: f64,
    offset: Option<&str>,
) -> anyhow::Result<BirthInstant> {
    let civil = parse_civil(date)?;
    let instant = BirthInstant::new(civil, GeoLocation { lat, lon })
        .context("Invalid birth location")?;
    match offset {
        Some(text) => Ok(instant.with_offset(parse_offset(text)?)),
        None => Ok(instant),
    }
}

pub fn load_sample(path: &Path) -> anyhow::Result<EphemerisSample> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ephemeris sample {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse ephemeris sample {}", path.display()))
}
