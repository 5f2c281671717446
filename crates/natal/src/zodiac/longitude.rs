use crate::zodiac::bodies::Body;
use crate::zodiac::signs::{Sign, SIGN_SPAN};
use serde::{Deserialize, Serialize};

/// Full circle in degrees.
pub const FULL_CIRCLE: f64 = 360.0;

/// A longitude classified into sign + degree within that sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub sign: Sign,
    /// Degrees into the sign, always in [0, 30).
    pub degree_in_sign: f64,
}

impl Placement {
    /// Absolute ecliptic longitude in [0, 360).
    pub fn absolute_longitude(&self) -> f64 {
        self.sign.start_longitude() + self.degree_in_sign
    }
}

/// Reduce any finite longitude into [0, 360).
pub fn reduce_longitude(longitude: f64) -> f64 {
    let reduced = ((longitude % FULL_CIRCLE) + FULL_CIRCLE) % FULL_CIRCLE;
    // -tiny % 360 + 360 can round to exactly 360
    if reduced >= FULL_CIRCLE {
        0.0
    } else {
        reduced
    }
}

/// Classify a raw ecliptic longitude into its sign and degree-in-sign.
///
/// Assumes a finite input; NaN and infinities must be rejected by the caller.
pub fn normalize(longitude: f64) -> Placement {
    let reduced = reduce_longitude(longitude);
    let raw_index = (reduced / SIGN_SPAN).floor() as usize;
    let mut sign_index = raw_index % 12;
    let mut degree_in_sign = reduced - raw_index as f64 * SIGN_SPAN;

    if raw_index >= 12 || degree_in_sign >= SIGN_SPAN {
        sign_index = (sign_index + usize::from(raw_index < 12)) % 12;
        degree_in_sign = 0.0;
    }
    if degree_in_sign < 0.0 {
        degree_in_sign = 0.0;
    }

    Placement {
        sign: Sign::from_index(sign_index),
        degree_in_sign,
    }
}

/// A body's normalized zodiac position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: String,
    pub sign: Sign,
    pub degree_in_sign: f64,
    pub retrograde: bool,
}

impl PlanetPosition {
    pub fn new(planet: impl Into<String>, sign: Sign, degree_in_sign: f64, retrograde: bool) -> Self {
        Self {
            planet: planet.into(),
            sign,
            degree_in_sign,
            retrograde,
        }
    }

    /// Build a position from a raw (possibly unreduced) longitude.
    pub fn from_longitude(planet: impl Into<String>, longitude: f64, retrograde: bool) -> Self {
        let placement = normalize(longitude);
        Self::new(planet, placement.sign, placement.degree_in_sign, retrograde)
    }

    /// `sign_index * 30 + degree_in_sign`
    pub fn absolute_longitude(&self) -> f64 {
        self.sign.start_longitude() + self.degree_in_sign
    }

    /// Catalogue entry for this planet's name, if it is one of the ten bodies.
    pub fn body(&self) -> Option<Body> {
        Body::from_name(&self.planet)
    }

    pub fn placement(&self) -> Placement {
        Placement {
            sign: self.sign,
            degree_in_sign: self.degree_in_sign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_wraps_past_full_circle() {
        let p = normalize(365.0);
        assert_eq!(p.sign, Sign::Aries);
        assert!((p.degree_in_sign - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_negative() {
        let p = normalize(-10.0);
        assert_eq!(p.sign, Sign::Pisces);
        assert!((p.degree_in_sign - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_tiny_negative_stays_in_range() {
        let p = normalize(-1e-20);
        assert!(p.degree_in_sign >= 0.0 && p.degree_in_sign < 30.0);
    }

    #[test]
    fn test_sign_boundaries() {
        assert_eq!(normalize(30.0).sign, Sign::Taurus);
        assert_eq!(normalize(29.999).sign, Sign::Aries);
        assert_eq!(normalize(359.999).sign, Sign::Pisces);
        assert_eq!(normalize(720.0).sign, Sign::Aries);
    }

    #[test]
    fn test_planet_position_absolute_longitude() {
        let pos = PlanetPosition::from_longitude("venus", 185.5, true);
        assert_eq!(pos.sign, Sign::Libra);
        assert!((pos.absolute_longitude() - 185.5).abs() < 1e-9);
        assert!(pos.retrograde);
    }
}
