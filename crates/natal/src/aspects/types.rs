use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspect types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectType {
    pub fn name(self) -> &'static str {
        match self {
            AspectType::Conjunction => "conjunction",
            AspectType::Sextile => "sextile",
            AspectType::Square => "square",
            AspectType::Trine => "trine",
            AspectType::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the aspect catalogue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRule {
    pub aspect_type: AspectType,
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub angle: f64,
    /// Largest tolerated deviation from `angle`
    pub max_orb: f64,
}

/// An aspect between two planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub planet_a: String,
    pub planet_b: String,
    pub aspect_type: AspectType,
    /// Absolute deviation from the exact angle, in degrees
    pub orb: f64,
    pub exact_angle: f64,
    /// Orb under 0.1 degrees
    pub is_exact: bool,
}

impl Aspect {
    /// Whether this aspect links `a` and `b`, in either order.
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        (self.planet_a == a && self.planet_b == b) || (self.planet_a == b && self.planet_b == a)
    }
}
