use crate::zodiac::{Element, Sign};
use serde::{Deserialize, Serialize};

/// Tunables for chart geometry. Radii are fractions of half the chart size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Width in degrees of the declutter bands inside a sign.
    pub band_width: f64,
    /// Fraction of a sign's 30° used as angular step between grouped glyphs.
    pub spread_factor: f64,
    pub ring_inner_ratio: f64,
    pub ring_outer_ratio: f64,
    /// Base radius of the planet glyph ring.
    pub glyph_ratio: f64,
    /// Extra radius per position inside a glyph group.
    pub radial_step_ratio: f64,
    /// Radius of the sign labels as a fraction of the outer ring radius.
    pub label_ratio: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            band_width: 5.0,
            spread_factor: 0.2,
            ring_inner_ratio: 0.75,
            ring_outer_ratio: 0.95,
            glyph_ratio: 0.6,
            radial_step_ratio: 0.04,
            label_ratio: 0.85,
        }
    }
}

/// One 30° zodiac wedge, rotated so the ascendant sits at the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSegment {
    pub sign: Sign,
    /// Degrees, screen frame (0 = 3 o'clock, -90 = 12 o'clock, clockwise positive)
    pub start_angle: f64,
    pub end_angle: f64,
    /// Position counted clockwise from the ascendant's segment
    pub rotation_index: usize,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Drives the wedge fill, see [`Element::fill_color`].
    pub element: Element,
    /// Label anchor at the wedge's mid angle.
    pub label_x: f64,
    pub label_y: f64,
}

impl ChartSegment {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Where a planet glyph is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetGlyphPosition {
    pub planet: String,
    /// Astronomical glyph when the planet is a catalogued body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub angle: f64,
}

/// Rotated spoke for a house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseLine {
    pub house_number: u8,
    pub angle: f64,
}

/// Geometry for a single render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub chart_size: f64,
    pub ascendant: Sign,
    pub segments: Vec<ChartSegment>,
    pub glyphs: Vec<PlanetGlyphPosition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub house_lines: Vec<HouseLine>,
}

impl ChartLayout {
    pub fn center(&self) -> (f64, f64) {
        (self.chart_size / 2.0, self.chart_size / 2.0)
    }

    pub fn segment(&self, sign: Sign) -> Option<&ChartSegment> {
        self.segments.iter().find(|s| s.sign == sign)
    }

    pub fn glyph(&self, planet: &str) -> Option<&PlanetGlyphPosition> {
        self.glyphs.iter().find(|g| g.planet == planet)
    }
}
