mod input;
mod render;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use jyotish::ephemeris::EphemerisProvider;
use jyotish::vedic::{combine_for_life_area, derive_all_from_chart, timeline_for_chart};
use jyotish::{
    analyze_houses, build_chart, derive_varga, format_chart, format_composite, sample_ephemeris,
    score_strength, FixedEphemeris,
};
use jyotish_config::{load_jyotish_settings, JyotishSettings};
use serde_json::{json, Map, Value};
use std::path::PathBuf;

#[derive(Clone, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Sidereal chart derivation")]
struct Args {
    /// Civil birth time, `YYYY-MM-DD HH:MM[:SS]`.
    #[arg(long)]
    date: String,

    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Explicit UTC offset of the civil time, e.g. `+01:00`.
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<String>,

    /// IANA zone used when no offset is given (overrides the config).
    #[arg(long)]
    timezone: Option<String>,

    /// Recorded `EphemerisSample` JSON to replay.
    #[arg(long, conflicts_with = "swiss")]
    sample: Option<PathBuf>,

    /// Sample the Swiss Ephemeris (needs the `swisseph` feature).
    #[arg(long)]
    swiss: bool,

    /// Harmonic chart to print instead of D1.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    varga: Option<u8>,

    /// All harmonic charts D1..D12.
    #[arg(long)]
    all: bool,

    #[arg(long)]
    houses: bool,

    #[arg(long)]
    strength: bool,

    #[arg(long)]
    dasha: bool,

    /// Dasha horizon in years (defaults to the config value).
    #[arg(long)]
    horizon: Option<f64>,

    /// Combine the charts of a configured life area, e.g. `Career`.
    #[arg(long)]
    life_area: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Config file (defaults to configs/jyotish.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_settings(args: &Args) -> anyhow::Result<JyotishSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            jyotish_config::parse_settings(&text)?
        }
        None => load_jyotish_settings().unwrap_or_else(|e| {
            log::warn!("{e:#}; using built-in defaults");
            JyotishSettings::default()
        }),
    };
    if let Some(zone) = &args.timezone {
        settings.timezone = Some(zone.clone());
    }
    if let Some(horizon) = args.horizon {
        settings.dasha_horizon_years = horizon;
    }
    Ok(settings)
}

fn provider(args: &Args, settings: &JyotishSettings) -> anyhow::Result<Box<dyn EphemerisProvider>> {
    if let Some(path) = &args.sample {
        return Ok(Box::new(FixedEphemeris::new(input::load_sample(path)?)));
    }
    if args.swiss {
        return swiss_provider(settings);
    }
    anyhow::bail!("No ephemeris source: pass --sample <json> or --swiss");
}

#[cfg(feature = "swisseph")]
fn swiss_provider(settings: &JyotishSettings) -> anyhow::Result<Box<dyn EphemerisProvider>> {
    let adapter =
        jyotish::SwissEphemerisAdapter::new(settings.ephemeris_path.clone(), &settings.ayanamsa)
            .context("Failed to open the Swiss Ephemeris")?;
    Ok(Box::new(adapter))
}

#[cfg(not(feature = "swisseph"))]
fn swiss_provider(_settings: &JyotishSettings) -> anyhow::Result<Box<dyn EphemerisProvider>> {
    anyhow::bail!("--swiss requires building jyotish_cli with the `swisseph` feature");
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = load_settings(&args)?;

    let instant = input::birth_instant(&args.date, args.lat, args.lon, args.offset.as_deref())?;
    let resolver = settings.timezone_resolver()?;
    let provider = provider(&args, &settings)?;
    let sample = sample_ephemeris(
        provider.as_ref(),
        &instant,
        resolver.as_ref(),
        settings.house_system,
    )?;
    let chart = build_chart(&instant, &sample)?;
    log::info!(
        "Chart for {} UTC at {:.4}, {:.4}",
        chart.birth.utc,
        args.lat,
        args.lon
    );

    let mut json_out = Map::new();
    let mut text_out = Vec::new();

    if let Some(name) = &args.life_area {
        let area = settings
            .life_area(name)
            .with_context(|| format!("Unknown life area {name:?}"))?;
        let charts = derive_all_from_chart(&chart)?;
        let composite = combine_for_life_area(&charts, area)?;
        text_out.push(format_composite(&composite, Some(area)));
        json_out.insert("life_area".into(), serde_json::to_value(&composite)?);
    } else if args.all {
        let charts = derive_all_from_chart(&chart)?;
        for varga in charts.values() {
            text_out.push(format_chart(varga, None));
        }
        json_out.insert("vargas".into(), serde_json::to_value(&charts)?);
    } else {
        let shown = match args.varga {
            Some(n) => derive_varga(&chart, n)?,
            None => chart.clone(),
        };
        text_out.push(format_chart(&shown, None));
        json_out.insert("chart".into(), serde_json::to_value(&shown)?);
    }

    if args.houses {
        let houses = analyze_houses(&chart)?;
        text_out.push(render::houses_text(&chart, &houses));
        json_out.insert("houses".into(), serde_json::to_value(&houses)?);
    }
    if args.strength {
        let report = score_strength(&chart);
        text_out.push(render::strength_text(&report));
        json_out.insert("strength".into(), serde_json::to_value(&report)?);
    }
    if args.dasha {
        let periods = timeline_for_chart(&chart, settings.dasha_horizon_years)?;
        text_out.push(render::dasha_text(&periods));
        json_out.insert("dasha".into(), serde_json::to_value(&periods)?);
    }

    match args.format {
        Format::Text => println!("{}", text_out.join("\n")),
        Format::Json => {
            let mut root = json!({
                "julian_day": sample.julian_day,
                "ayanamsa": sample.ayanamsa,
            });
            if let Value::Object(map) = &mut root {
                map.extend(json_out);
            }
            println!("{}", serde_json::to_string_pretty(&root)?);
        }
    }
    Ok(())
}
