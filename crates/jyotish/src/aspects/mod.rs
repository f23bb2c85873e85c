pub mod calculator;
pub mod types;

pub use calculator::{separation, vedic_aspect_houses, AspectCalculator, ASPECT_ANGLES, VEDIC_ASPECTS};
pub use types::{Aspect, AspectKind, AspectType};
