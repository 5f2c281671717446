use crate::aspects::types::{Aspect, AspectRule, AspectType};
use crate::zodiac::{PlanetPosition, FULL_CIRCLE};

/// Aspect catalogue in priority order. Rules are evaluated top to bottom and
/// the first one within orb wins, so a pair never carries two aspect types.
pub const ASPECT_RULES: [AspectRule; 5] = [
    AspectRule {
        aspect_type: AspectType::Conjunction,
        angle: 0.0,
        max_orb: 8.0,
    },
    AspectRule {
        aspect_type: AspectType::Sextile,
        angle: 60.0,
        max_orb: 4.0,
    },
    AspectRule {
        aspect_type: AspectType::Square,
        angle: 90.0,
        max_orb: 6.0,
    },
    AspectRule {
        aspect_type: AspectType::Trine,
        angle: 120.0,
        max_orb: 6.0,
    },
    AspectRule {
        aspect_type: AspectType::Opposition,
        angle: 180.0,
        max_orb: 8.0,
    },
];

/// Orb below which an aspect counts as exact.
const EXACT_ORB: f64 = 0.1;

/// Shorter-arc separation between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (lon1 - lon2).abs() % FULL_CIRCLE;
    if diff > 180.0 {
        FULL_CIRCLE - diff
    } else {
        diff
    }
}

/// Classify a folded separation against the catalogue.
pub fn classify_separation(separation: f64) -> Option<(&'static AspectRule, f64)> {
    ASPECT_RULES.iter().find_map(|rule| {
        let orb = (separation - rule.angle).abs();
        (orb <= rule.max_orb).then_some((rule, orb))
    })
}

/// Aspect detector over a set of normalized planet positions.
pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute aspects for every unordered pair (i < j) of `planets`.
    pub fn detect_aspects(&self, planets: &[PlanetPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                if let Some(aspect) = self.calculate_aspect(&planets[i], &planets[j]) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    /// Aspect between two planets, if any rule matches.
    pub fn calculate_aspect(&self, a: &PlanetPosition, b: &PlanetPosition) -> Option<Aspect> {
        let separation = angular_separation(a.absolute_longitude(), b.absolute_longitude());
        let (rule, orb) = classify_separation(separation)?;

        Some(Aspect {
            planet_a: a.planet.clone(),
            planet_b: b.planet.clone(),
            aspect_type: rule.aspect_type,
            orb,
            exact_angle: rule.angle,
            is_exact: orb < EXACT_ORB,
        })
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper around [`AspectCalculator::detect_aspects`].
pub fn detect_aspects(planets: &[PlanetPosition]) -> Vec<Aspect> {
    AspectCalculator::new().detect_aspects(planets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_folds_to_short_arc() {
        assert!((angular_separation(10.0, 350.0) - 20.0).abs() < 1e-9);
        assert!((angular_separation(0.0, 182.0) - 178.0).abs() < 1e-9);
        assert!((angular_separation(720.0, 0.0)).abs() < 1e-9);
    }

    #[test]
    fn test_classify_priority_order() {
        let (rule, orb) = classify_separation(0.0).unwrap();
        assert_eq!(rule.aspect_type, AspectType::Conjunction);
        assert_eq!(orb, 0.0);

        assert!(classify_separation(30.0).is_none());
        assert!(classify_separation(64.5).is_none());
        assert_eq!(classify_separation(64.0).unwrap().0.aspect_type, AspectType::Sextile);
        assert_eq!(classify_separation(172.0).unwrap().0.aspect_type, AspectType::Opposition);
    }
}
