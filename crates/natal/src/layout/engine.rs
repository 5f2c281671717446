use crate::error::ChartError;
use crate::houses::HouseSet;
use crate::layout::placement::place_planets;
use crate::layout::types::{ChartLayout, LayoutSettings};
use crate::layout::wheel::{build_house_lines, build_segments};
use crate::zodiac::{PlanetPosition, Sign};

/// Computes chart geometry for a render pass.
#[derive(Debug, Clone, Default)]
pub struct ChartLayoutEngine {
    settings: LayoutSettings,
}

impl ChartLayoutEngine {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Segments and glyphs for a wheel rotated to `ascendant`.
    pub fn layout(
        &self,
        ascendant: Sign,
        planets: &[PlanetPosition],
        chart_size: f64,
    ) -> Result<ChartLayout, ChartError> {
        validate_chart_size(chart_size)?;

        Ok(ChartLayout {
            chart_size,
            ascendant,
            segments: build_segments(ascendant, chart_size, &self.settings),
            glyphs: place_planets(ascendant, planets, chart_size, &self.settings),
            house_lines: Vec::new(),
        })
    }

    /// Like [`layout`](Self::layout), rotated to the houses' ascendant and
    /// with a spoke per house cusp.
    pub fn layout_with_houses(
        &self,
        houses: &HouseSet,
        planets: &[PlanetPosition],
        chart_size: f64,
    ) -> Result<ChartLayout, ChartError> {
        let ascendant = houses.ascendant();
        let mut layout = self.layout(ascendant, planets, chart_size)?;
        layout.house_lines = build_house_lines(houses, ascendant);
        Ok(layout)
    }
}

fn validate_chart_size(chart_size: f64) -> Result<(), ChartError> {
    if chart_size.is_finite() && chart_size > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidChartSize(chart_size))
    }
}

/// Lay out a chart with explicit settings.
pub fn layout(
    ascendant: Sign,
    planets: &[PlanetPosition],
    chart_size: f64,
    settings: &LayoutSettings,
) -> Result<ChartLayout, ChartError> {
    ChartLayoutEngine::new(settings.clone()).layout(ascendant, planets, chart_size)
}
