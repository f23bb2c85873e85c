pub mod combine;
pub mod dashas;
pub mod dignity;
pub mod houses;
pub mod nakshatra;
pub mod vargas;

pub use combine::{combine_charts, combine_for_life_area, CompositeChart, Placement};
pub use dashas::{
    build_dasha_timeline, current_period, dasha_balance, sub_periods, timeline_for_chart,
    DashaBalance, DashaLevel, DashaPeriod, DEFAULT_HORIZON_YEARS, VIMSHOTTARI_SEQUENCE,
};
pub use dignity::{dignity_for, score_strength, BodyStrength, Dignity, StrengthReport};
pub use houses::{analyze_houses, HouseAnalysis};
pub use nakshatra::{nakshatra_for_longitude, NakshatraPlacement};
pub use vargas::{
    derive_all_from_chart, derive_all_vargas, derive_varga, harmonic_longitude, varga_name,
    VargaLabel, VargaSpec, VARGAS,
};
