//! Birth instants, timezone resolution and calendar arithmetic.

use crate::ephemeris::GeoLocation;
use crate::error::{JyotishError, Result};
use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, Months, NaiveDateTime, Offset, TimeZone, Utc,
};

/// Julian Day of the Unix epoch (1970-01-01T00:00:00 UT).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Days per year used by the fractional part of period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// A civil birth date-time at a place.
///
/// When `utc_offset` is set it wins over any [`TimezoneResolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInstant {
    pub civil: NaiveDateTime,
    pub utc_offset: Option<FixedOffset>,
    pub location: GeoLocation,
}

impl BirthInstant {
    pub fn new(civil: NaiveDateTime, location: GeoLocation) -> Result<Self> {
        location.validate()?;
        Ok(Self {
            civil,
            utc_offset: None,
            location,
        })
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Normalize the civil time to UTC.
    pub fn to_utc(&self, resolver: &dyn TimezoneResolver) -> Result<DateTime<Utc>> {
        self.location.validate()?;
        let offset = match self.utc_offset {
            Some(offset) => offset,
            None => resolver.offset_for(&self.civil, &self.location)?,
        };
        match offset.from_local_datetime(&self.civil) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
            LocalResult::None => Err(JyotishError::invalid_input(format!(
                "Local time {} does not exist at offset {}",
                self.civil, offset
            ))),
        }
    }
}

/// Supplies the UTC offset in force at a civil time and place.
pub trait TimezoneResolver {
    fn offset_for(&self, civil: &NaiveDateTime, location: &GeoLocation) -> Result<FixedOffset>;
}

/// Always answers with the same offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedOffsetResolver(pub FixedOffset);

impl Default for FixedOffsetResolver {
    fn default() -> Self {
        Self(Utc.fix())
    }
}

impl TimezoneResolver for FixedOffsetResolver {
    fn offset_for(&self, _civil: &NaiveDateTime, _location: &GeoLocation) -> Result<FixedOffset> {
        Ok(self.0)
    }
}

/// Resolves offsets from an IANA zone, ignoring the coordinates.
///
/// Ambiguous local times (DST fall-back) take the earlier mapping.
#[derive(Debug, Clone, Copy)]
pub struct NamedZoneResolver(pub chrono_tz::Tz);

impl NamedZoneResolver {
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<chrono_tz::Tz>()
            .map(Self)
            .map_err(|e| JyotishError::invalid_input(format!("Unknown timezone '{}': {}", name, e)))
    }
}

impl TimezoneResolver for NamedZoneResolver {
    fn offset_for(&self, civil: &NaiveDateTime, _location: &GeoLocation) -> Result<FixedOffset> {
        match self.0.from_local_datetime(civil) {
            LocalResult::Single(dt) => Ok(dt.offset().fix()),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest.offset().fix()),
            LocalResult::None => Err(JyotishError::invalid_input(format!(
                "Local time {} does not exist in {}",
                civil,
                self.0.name()
            ))),
        }
    }
}

/// Julian Day (UT) for a UTC instant.
pub fn julian_day(utc: DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + utc.timestamp_millis() as f64 / 86_400_000.0
}

/// Advance `start` by a fractional number of years.
///
/// Whole years shift the calendar year keeping month and day (Feb 29 clamps
/// to Feb 28). The fractional remainder is `round(fraction * 365.25)` days.
pub fn add_years(start: DateTime<Utc>, years: f64) -> Result<DateTime<Utc>> {
    if !years.is_finite() || years < 0.0 {
        return Err(JyotishError::invalid_input(format!(
            "Cannot advance a date by {} years",
            years
        )));
    }
    let whole = years.trunc();
    let fraction = years - whole;
    let months = u32::try_from((whole as u64) * 12)
        .map_err(|_| JyotishError::invalid_input(format!("{} years is out of range", years)))?;

    let shifted = start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| JyotishError::invalid_input(format!("{} + {} years overflows", start, whole)))?;
    let days = (fraction * DAYS_PER_YEAR).round() as i64;
    shifted
        .checked_add_signed(Duration::days(days))
        .ok_or_else(|| JyotishError::invalid_input(format!("{} + {} days overflows", shifted, days)))
}
