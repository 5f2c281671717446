//! Planet glyph placement with declutter.
//!
//! Planets sharing a sign and a `band_width` band are fanned out around their
//! true position: member `k` of a group of `m` is shifted by
//! `(k - (m-1)/2) * spread_factor * 30°` and pushed outward by `k` radial steps.

use crate::layout::types::{LayoutSettings, PlanetGlyphPosition};
use crate::layout::wheel::segment_start_angle;
use crate::zodiac::{PlanetPosition, Sign, SIGN_SPAN};
use std::collections::HashMap;

/// Declutter bucket: (sign index, band index within the sign).
pub type BandKey = (usize, i64);

pub fn band_key(planet: &PlanetPosition, band_width: f64) -> BandKey {
    (
        planet.sign.index(),
        (planet.degree_in_sign / band_width).floor() as i64,
    )
}

/// Angular offset for member `k` of a group of `m`.
pub fn group_offset(k: usize, m: usize, spread_factor: f64) -> f64 {
    (k as f64 - (m as f64 - 1.0) / 2.0) * spread_factor * SIGN_SPAN
}

/// Glyph positions for `planets`, in input order.
pub fn place_planets(
    ascendant: Sign,
    planets: &[PlanetPosition],
    chart_size: f64,
    settings: &LayoutSettings,
) -> Vec<PlanetGlyphPosition> {
    let keys: Vec<BandKey> = planets
        .iter()
        .map(|p| band_key(p, settings.band_width))
        .collect();

    let mut group_sizes: HashMap<BandKey, usize> = HashMap::new();
    for key in &keys {
        *group_sizes.entry(*key).or_insert(0) += 1;
    }

    let half = chart_size / 2.0;
    let mut seen: HashMap<BandKey, usize> = HashMap::new();

    planets
        .iter()
        .zip(&keys)
        .map(|(planet, key)| {
            let slot = seen.entry(*key).or_insert(0);
            let k = *slot;
            *slot += 1;
            let m = group_sizes.get(key).copied().unwrap_or(1);

            let angle = segment_start_angle(planet.sign, ascendant)
                + planet.degree_in_sign
                + group_offset(k, m, settings.spread_factor);
            let radius = half * (settings.glyph_ratio + k as f64 * settings.radial_step_ratio);
            let theta = angle.to_radians();

            PlanetGlyphPosition {
                planet: planet.planet.clone(),
                symbol: planet.body().map(|b| b.symbol().to_string()),
                x: half + radius * theta.cos(),
                y: half + radius * theta.sin(),
                radius,
                angle,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_offset_is_centered() {
        assert_eq!(group_offset(0, 1, 0.2), 0.0);
        assert!((group_offset(0, 3, 0.2) + 6.0).abs() < 1e-9);
        assert!(group_offset(1, 3, 0.2).abs() < 1e-9);
        assert!((group_offset(2, 3, 0.2) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_key() {
        let p = PlanetPosition::new("mars", Sign::Gemini, 14.9, false);
        assert_eq!(band_key(&p, 5.0), (2, 2));
    }
}
