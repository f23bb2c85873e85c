use crate::body::Body;
use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{Ayanamsa, GeoLocation, HouseOutput, HouseSystem, RawPosition};
use crate::zodiac::normalize_degrees;
use lazy_static::lazy_static;
use log::debug;
use std::env;
use std::ffi::CString;
use std::os::raw::{c_char, c_double, c_int};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use swisseph::swe::{calc_ut, houses_ex};
use swisseph::{AscMc, Cusp};

/// FLG_SWIEPH
const FLAG_SWIEPH: i32 = 2;
/// FLG_SIDEREAL
const FLAG_SIDEREAL: i32 = 64;

// Swiss Ephemeris body numbers; Rahu is the mean lunar node
const BODY_IDS: &[(Body, i32)] = &[
    (Body::Sun, 0),
    (Body::Moon, 1),
    (Body::Mercury, 2),
    (Body::Venus, 3),
    (Body::Mars, 4),
    (Body::Jupiter, 5),
    (Body::Saturn, 6),
    (Body::Rahu, 10),
];

// Entry points of the Swiss Ephemeris C library linked by `swisseph`
// that its safe wrapper does not expose.
mod bindings {
    use super::*;

    extern "C" {
        pub fn swe_set_ephe_path(path: *const c_char);
        pub fn swe_set_sid_mode(sid_mode: c_int, t0: c_double, ayan_t0: c_double);
    }
}

lazy_static! {
    /// Data path and sidereal mode are process-wide library state.
    static ref LIBRARY: Mutex<()> = Mutex::new(());
}

fn library_lock() -> MutexGuard<'static, ()> {
    LIBRARY.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Provider backed by the Swiss Ephemeris data files.
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    c_path: CString,
    ayanamsa: Ayanamsa,
}

impl SwissEphemerisAdapter {
    /// Create an adapter. Without an explicit path, `SWISS_EPHEMERIS_PATH`
    /// and then `/usr/local/share/swisseph` are tried.
    pub fn new(ephemeris_path: Option<PathBuf>, ayanamsa: &str) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        let ayanamsa: Ayanamsa = ayanamsa.parse()?;
        let c_path = CString::new(path.to_string_lossy().into_owned()).map_err(|_| {
            EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path contains a NUL byte".to_string(),
            }
        })?;
        debug!(
            "Swiss Ephemeris at {} with {} ayanamsa",
            path.display(),
            ayanamsa
        );

        Ok(Self {
            ephemeris_path: path,
            c_path,
            ayanamsa,
        })
    }

    pub fn ephemeris_path(&self) -> &PathBuf {
        &self.ephemeris_path
    }

    pub fn ayanamsa_kind(&self) -> Ayanamsa {
        self.ayanamsa
    }

    /// Point the library at this adapter's data files and ayanamsa.
    ///
    /// The returned guard must be held for the whole calculation.
    fn configure(&self) -> MutexGuard<'static, ()> {
        let guard = library_lock();
        unsafe {
            bindings::swe_set_ephe_path(self.c_path.as_ptr());
            bindings::swe_set_sid_mode(self.ayanamsa.sidereal_mode(), 0.0, 0.0);
        }
        guard
    }

    fn calc(&self, julian_day: f64, body: Body, flags: i32) -> Result<RawPosition, EphemerisError> {
        let code = BODY_IDS
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, code)| *code)
            .ok_or(EphemerisError::UnsupportedBody { body })?;

        let result = calc_ut(julian_day, code as u32, flags as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;
        let out = result.out;
        Ok(RawPosition {
            longitude: out[0],
            latitude: out[1],
            distance: out[2],
        })
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn body_position(&self, julian_day: f64, body: Body) -> Result<RawPosition, EphemerisError> {
        let _library = self.configure();
        self.calc(julian_day, body, FLAG_SWIEPH | FLAG_SIDEREAL)
    }

    fn houses(
        &self,
        julian_day: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseOutput, EphemerisError> {
        let _library = self.configure();
        let (c, a) = houses_ex(
            julian_day,
            FLAG_SWIEPH | FLAG_SIDEREAL,
            location.lat,
            location.lon,
            system.code() as i32,
        );
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if values.iter().chain([&ascmc.ascendant]).any(|v| !v.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite cusp for {} at JD {}", system, julian_day),
            });
        }

        Ok(HouseOutput {
            ascendant: normalize_degrees(ascmc.ascendant),
            cusps: values.map(normalize_degrees),
        })
    }

    fn ayanamsa(&self, julian_day: f64) -> Result<f64, EphemerisError> {
        let _library = self.configure();
        let tropical = self.calc(julian_day, Body::Sun, FLAG_SWIEPH)?;
        let sidereal = self.calc(julian_day, Body::Sun, FLAG_SWIEPH | FLAG_SIDEREAL)?;
        Ok(normalize_degrees(tropical.longitude - sidereal.longitude))
    }
}
