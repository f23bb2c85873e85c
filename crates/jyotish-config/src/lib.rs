use anyhow::Context;
use jyotish::time::{FixedOffsetResolver, NamedZoneResolver, TimezoneResolver};
use jyotish::vedic::DEFAULT_HORIZON_YEARS;
use jyotish::{default_life_areas, Ayanamsa, HouseSystem, LifeAreaSpec};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_PATHS: [&str; 2] = ["configs/jyotish.toml", "../../configs/jyotish.toml"];

#[derive(Debug, Clone)]
pub struct JyotishSettings {
    pub ephemeris_path: Option<PathBuf>,
    pub house_system: HouseSystem,
    pub ayanamsa: String,
    pub dasha_horizon_years: f64,
    pub timezone: Option<String>,
    pub life_areas: Vec<LifeAreaSpec>,
}

impl Default for JyotishSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            house_system: HouseSystem::default(),
            ayanamsa: default_ayanamsa(),
            dasha_horizon_years: DEFAULT_HORIZON_YEARS,
            timezone: None,
            life_areas: default_life_areas(),
        }
    }
}

impl JyotishSettings {
    pub fn life_area(&self, name: &str) -> Option<&LifeAreaSpec> {
        self.life_areas
            .iter()
            .find(|area| area.name.eq_ignore_ascii_case(name))
    }

    /// Resolver for civil birth times given without an explicit offset.
    pub fn timezone_resolver(&self) -> anyhow::Result<Box<dyn TimezoneResolver>> {
        match &self.timezone {
            Some(name) => {
                let resolver = NamedZoneResolver::from_name(name)
                    .with_context(|| format!("Invalid timezone in config: {name}"))?;
                Ok(Box::new(resolver))
            }
            None => Ok(Box::new(FixedOffsetResolver::default())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct JyotishToml {
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default = "default_house_system")]
    house_system: String,
    #[serde(default = "default_ayanamsa")]
    ayanamsa: String,
    #[serde(default = "default_horizon")]
    dasha_horizon_years: f64,
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    life_areas: Vec<LifeAreaSpec>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    jyotish: Option<JyotishToml>,
}

fn default_house_system() -> String {
    HouseSystem::default().name().to_string()
}

fn default_ayanamsa() -> String {
    "lahiri".to_string()
}

fn default_horizon() -> f64 {
    DEFAULT_HORIZON_YEARS
}

/// Try the usual relative locations of `configs/jyotish.toml`.
pub fn read_config_toml_text() -> anyhow::Result<String> {
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load jyotish.toml from {:?}", CONFIG_PATHS);
}

/// Parse and validate settings from TOML text. A missing `[jyotish]`
/// table yields the defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<JyotishSettings> {
    let root: RootConfigToml =
        toml::from_str(text).context("Failed to parse jyotish.toml")?;
    let Some(cfg) = root.jyotish else {
        return Ok(JyotishSettings::default());
    };
    let JyotishToml {
        ephemeris_path,
        house_system,
        ayanamsa,
        dasha_horizon_years,
        timezone,
        life_areas,
    } = cfg;

    let house_system: HouseSystem = house_system
        .parse()
        .with_context(|| format!("jyotish.house_system is invalid: {house_system}"))?;

    if !dasha_horizon_years.is_finite() || dasha_horizon_years <= 0.0 {
        anyhow::bail!(
            "jyotish.dasha_horizon_years must be a positive number of years, got {}",
            dasha_horizon_years
        );
    }

    let ayanamsa = ayanamsa
        .parse::<Ayanamsa>()
        .with_context(|| format!("jyotish.ayanamsa is invalid: {ayanamsa}"))?
        .name()
        .to_string();

    if let Some(name) = &timezone {
        NamedZoneResolver::from_name(name)
            .with_context(|| format!("jyotish.timezone is not a known zone: {name}"))?;
    }

    let life_areas = if life_areas.is_empty() {
        default_life_areas()
    } else {
        life_areas
    };
    for area in &life_areas {
        let labels = area
            .labels()
            .with_context(|| format!("Life area '{}' has an invalid varga combination", area.name))?;
        if labels.is_empty() {
            anyhow::bail!("Life area '{}' names no vargas", area.name);
        }
    }

    Ok(JyotishSettings {
        ephemeris_path,
        house_system,
        ayanamsa,
        dasha_horizon_years,
        timezone,
        life_areas,
    })
}

pub fn load_jyotish_settings() -> anyhow::Result<JyotishSettings> {
    let text = read_config_toml_text()?;
    parse_settings(&text)
}
