//! Sidereal (Vedic) chart derivation.
//!
//! A birth instant and one raw ephemeris sample produce a primary chart;
//! everything else (harmonic charts, aspects, dignity, houses, the dasha
//! timeline, life-area composites) is a pure function over chart data.

pub mod aspects;
pub mod body;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod life_area;
pub mod report;
pub mod time;
pub mod vedic;
pub mod zodiac;

pub use aspects::{Aspect, AspectCalculator, AspectKind, AspectType};
pub use body::{Body, ALL_BODIES};
pub use chart::{build_chart, BodyPosition, Chart, ChartBuilder, ChartKind, HouseCusp};
pub use ephemeris::{
    sample_ephemeris, Ayanamsa, EphemerisError, EphemerisProvider, EphemerisSample, FixedEphemeris,
    GeoLocation, HouseSystem, RawPosition,
};
pub use error::{JyotishError, Result};
pub use life_area::{default_life_areas, LifeAreaSpec};
pub use report::{format_chart, format_composite, InterpretationError, Interpreter};
pub use time::{BirthInstant, FixedOffsetResolver, NamedZoneResolver, TimezoneResolver};
pub use vedic::{
    analyze_houses, build_dasha_timeline, combine_charts, derive_all_vargas, derive_varga,
    harmonic_longitude, score_strength, CompositeChart, DashaPeriod, Dignity, HouseAnalysis,
    StrengthReport, VargaLabel,
};
pub use zodiac::{normalize_degrees, Sign};

#[cfg(feature = "swisseph")]
pub use ephemeris::SwissEphemerisAdapter;
