//! Layout over loosely typed stored placements.
//!
//! Persisted rows carry sign names as text, in English or Portuguese. A wrong
//! ascendant name falls back to Aries and a placement whose sign cannot be
//! read is left out, so a partial chart is still produced. Callers can spot
//! degraded output by comparing `glyphs.len()` with the number of placements
//! passed in. A non-finite degree reads as 0; anything else outside the sign
//! is clamped to its edges.

use crate::error::ChartError;
use crate::layout::engine::ChartLayoutEngine;
use crate::layout::types::{ChartLayout, LayoutSettings};
use crate::zodiac::{PlanetPosition, Sign, SIGN_SPAN};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlacement {
    pub planet: String,
    pub sign: String,
    #[serde(default, alias = "degree")]
    pub degree_in_sign: f64,
    #[serde(default)]
    pub retrograde: bool,
}

impl StoredPlacement {
    /// Typed position, or `None` when the sign is unknown.
    pub fn to_position(&self) -> Option<PlanetPosition> {
        let sign = Sign::from_name(&self.sign)?;
        Some(PlanetPosition::new(
            self.planet.clone(),
            sign,
            clamp_degree(self.degree_in_sign),
            self.retrograde,
        ))
    }
}

fn clamp_degree(degree: f64) -> f64 {
    if !degree.is_finite() || degree < 0.0 {
        0.0
    } else if degree >= SIGN_SPAN {
        // largest value still inside the sign
        SIGN_SPAN - f64::EPSILON * SIGN_SPAN
    } else {
        degree
    }
}

/// Ascendant sign by name, Aries when the name is not recognized.
pub fn resolve_ascendant(name: &str) -> Sign {
    Sign::from_name(name).unwrap_or(Sign::Aries)
}

pub fn layout_stored(
    ascendant: &str,
    placements: &[StoredPlacement],
    chart_size: f64,
    settings: &LayoutSettings,
) -> Result<ChartLayout, ChartError> {
    let planets: Vec<PlanetPosition> = placements
        .iter()
        .filter_map(StoredPlacement::to_position)
        .collect();

    ChartLayoutEngine::new(settings.clone()).layout(resolve_ascendant(ascendant), &planets, chart_size)
}
