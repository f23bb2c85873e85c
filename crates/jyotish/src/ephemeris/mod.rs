pub mod fixed;
pub mod provider;
pub mod types;

#[cfg(feature = "swisseph")]
pub mod adapter;

#[cfg(feature = "swisseph")]
pub use adapter::SwissEphemerisAdapter;
pub use fixed::FixedEphemeris;
pub use provider::{sample_ephemeris, EphemerisError, EphemerisProvider};
pub use types::{Ayanamsa, EphemerisSample, GeoLocation, HouseOutput, HouseSystem, RawPosition};
