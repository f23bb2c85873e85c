//! Plain-text chart rendering for the interpretation collaborator.

use crate::body::Body;
use crate::chart::{BirthInfo, BodyPosition, Chart};
use crate::life_area::LifeAreaSpec;
use crate::vedic::{nakshatra_for_longitude, varga_name, CompositeChart};
use async_trait::async_trait;
use std::fmt::Write;
use thiserror::Error;

/// Aspects at or below this strength are left out of the report.
pub const STRONG_ASPECT_THRESHOLD: f64 = 90.0;

/// Render a chart as the text block handed to an [`Interpreter`].
pub fn format_chart(chart: &Chart, life_area: Option<&LifeAreaSpec>) -> String {
    let mut out = String::new();
    write_header(&mut out, &chart.birth, chart.ayanamsa, chart.ascendant());

    let _ = writeln!(out, "== BODY POSITIONS ==");
    for (body, position) in &chart.bodies {
        if *body == Body::Ascendant {
            continue;
        }
        let _ = write!(
            out,
            "{}: {} {:.2}°",
            body, position.sign, position.degrees_in_sign
        );
        if chart.is_primary() {
            let nakshatra = nakshatra_for_longitude(position.longitude);
            let _ = write!(out, " ({}, pada {})", nakshatra.name, nakshatra.pada);
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out);

    if !chart.houses.is_empty() {
        let _ = writeln!(out, "== HOUSES ==");
        for (number, cusp) in &chart.houses {
            let _ = writeln!(
                out,
                "House {}: {} {:.2}°",
                number, cusp.sign, cusp.degrees_in_sign
            );
        }
        let _ = writeln!(out);
    }

    let strong: Vec<_> = chart
        .aspects
        .iter()
        .filter(|aspect| aspect.strength > STRONG_ASPECT_THRESHOLD)
        .collect();
    if !strong.is_empty() {
        let _ = writeln!(out, "== MAJOR ASPECTS ==");
        for aspect in strong {
            let _ = writeln!(out, "{} - {}: {}", aspect.from, aspect.to, aspect.label());
        }
        let _ = writeln!(out);
    }

    if !chart.is_primary() {
        let _ = writeln!(
            out,
            "== CHART {} - {} ==",
            chart.label(),
            varga_name(chart.label().harmonic())
        );
        let _ = writeln!(
            out,
            "This chart is a harmonic division (varga) of the birth chart."
        );
        let _ = writeln!(out);
    }

    if let Some(area) = life_area {
        write_life_area(&mut out, area);
    }

    out
}

/// Render a combined chart: base context plus each body's sign per varga.
pub fn format_composite(composite: &CompositeChart, life_area: Option<&LifeAreaSpec>) -> String {
    let mut out = String::new();
    write_header(
        &mut out,
        &composite.birth,
        composite.ayanamsa,
        composite.ascendant.as_ref(),
    );

    let labels: Vec<String> = composite.labels.iter().map(ToString::to_string).collect();
    let _ = writeln!(out, "== POSITIONS BY VARGA ({}) ==", labels.join(", "));
    for (body, placements) in &composite.bodies {
        let row: Vec<String> = placements
            .iter()
            .map(|(label, placement)| {
                format!("{} {} {:.2}°", label, placement.sign, placement.degrees_in_sign)
            })
            .collect();
        let _ = writeln!(out, "{}: {}", body, row.join(" | "));
    }
    let _ = writeln!(out);

    if let Some(area) = life_area {
        write_life_area(&mut out, area);
    }
    out
}

fn write_header(
    out: &mut String,
    birth: &BirthInfo,
    ayanamsa: f64,
    ascendant: Option<&BodyPosition>,
) {
    let _ = writeln!(out, "== VEDIC CHART DATA ==");
    let _ = writeln!(out, "Birth date: {}", birth.civil);
    let _ = writeln!(
        out,
        "Location: Latitude {}, Longitude {}",
        birth.location.lat, birth.location.lon
    );
    let _ = writeln!(out, "Ayanamsa: {:.2}°", ayanamsa);
    let _ = writeln!(out);

    if let Some(asc) = ascendant {
        let _ = writeln!(
            out,
            "Ascendant (Lagna): {} {:.2}°",
            asc.sign, asc.degrees_in_sign
        );
        let _ = writeln!(out);
    }
}

fn write_life_area(out: &mut String, area: &LifeAreaSpec) {
    let _ = writeln!(out, "== LIFE AREA: {} ==", area.name);
    let _ = writeln!(out, "{}", area.description);
    let _ = writeln!(out, "Vargas included: {}", area.varga_combination);
    let _ = writeln!(out);
}

#[derive(Error, Debug)]
pub enum InterpretationError {
    #[error("Interpreter unavailable: {0}")]
    Unavailable(String),
    #[error("Interpretation failed: {0}")]
    Failed(String),
}

/// External text-generation service turning a prompt into a reading.
#[async_trait]
pub trait Interpreter: Send + Sync {
    fn name(&self) -> &str;

    async fn interpret(&self, prompt: &str) -> Result<String, InterpretationError>;
}

/// Render the area's prompt around the chart text and ask the interpreter.
pub async fn interpret_life_area(
    interpreter: &dyn Interpreter,
    chart_text: &str,
    area: &LifeAreaSpec,
) -> Result<String, InterpretationError> {
    let prompt = area.render_prompt(chart_text);
    log::debug!(
        "Sending {} prompt ({} chars) to {}",
        area.name,
        prompt.len(),
        interpreter.name()
    );
    interpreter.interpret(&prompt).await
}
