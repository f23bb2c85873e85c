pub mod builder;
pub mod types;

pub use builder::{build_chart, ChartBuilder};
pub use types::{BirthInfo, BodyPosition, Chart, ChartKind, HouseCusp};
