use crate::body::Body;
use crate::chart::Chart;
use crate::error::{JyotishError, Result};
use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseAnalysis {
    pub sign: Sign,
    pub ruler: Body,
    /// First house (ascending) whose cusp sign matches the ruler's sign
    pub ruler_house: Option<u8>,
    /// Bodies whose sign equals the house sign, in body-table order
    pub occupants: Vec<Body>,
}

/// Sign, lord, lord placement and occupants of each house of a primary chart.
pub fn analyze_houses(chart: &Chart) -> Result<BTreeMap<u8, HouseAnalysis>> {
    if !chart.is_primary() || chart.houses.is_empty() {
        return Err(JyotishError::invalid_input(format!(
            "House analysis needs a primary chart with houses, got {}",
            chart.label()
        )));
    }

    let mut analysis = BTreeMap::new();
    for (number, cusp) in &chart.houses {
        let ruler = cusp.sign.ruler();
        let ruler_house = chart.position(ruler).and_then(|ruler_pos| {
            chart
                .houses
                .iter()
                .find(|(_, other)| other.sign == ruler_pos.sign)
                .map(|(house, _)| *house)
        });
        let occupants = chart
            .bodies
            .iter()
            .filter(|(_, position)| position.sign == cusp.sign)
            .map(|(body, _)| *body)
            .collect();

        analysis.insert(
            *number,
            HouseAnalysis {
                sign: cusp.sign,
                ruler,
                ruler_house,
                occupants,
            },
        );
    }
    Ok(analysis)
}
