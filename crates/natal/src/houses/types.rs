use crate::zodiac::{reduce_longitude, Sign};
use serde::{Deserialize, Serialize};

/// A single house cusp classified into its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// 1..=12
    pub house_number: u8,
    pub sign: Sign,
    pub degree_in_sign: f64,
}

impl HouseCusp {
    pub fn longitude(&self) -> f64 {
        self.sign.start_longitude() + self.degree_in_sign
    }
}

/// The twelve house cusps of a chart, in house order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseSet {
    pub cusps: Vec<HouseCusp>,
}

impl HouseSet {
    /// Sign on the first house cusp.
    pub fn ascendant(&self) -> Sign {
        self.cusps.first().map(|c| c.sign).unwrap_or(Sign::Aries)
    }

    pub fn cusp(&self, house_number: u8) -> Option<&HouseCusp> {
        self.cusps.iter().find(|c| c.house_number == house_number)
    }

    /// House (1..=12) whose cusp arc contains `longitude`.
    ///
    /// Arcs run from each cusp to the next one, wrapping through 0°.
    /// Falls back to house 1 when no arc matches (degenerate cusps).
    pub fn house_of(&self, longitude: f64) -> u8 {
        let lon = reduce_longitude(longitude);
        let n = self.cusps.len();
        for i in 0..n {
            let current = &self.cusps[i];
            let start = current.longitude();
            let end = self.cusps[(i + 1) % n].longitude();

            let inside = if end < start {
                lon >= start || lon < end
            } else {
                lon >= start && lon < end
            };
            if inside {
                return current.house_number;
            }
        }
        1
    }
}
