//! Zodiac wheel rotation.
//!
//! Unrotated, sign `k` starts at `k*30 - 90`, so Aries begins at 12 o'clock.
//! Rotation shifts every sign by the ascendant's index so the ascendant's
//! own wedge starts at 12 o'clock and the rest follow clockwise.

use crate::layout::types::{ChartSegment, HouseLine, LayoutSettings};
use crate::houses::HouseSet;
use crate::zodiac::{normalize, Sign, SIGN_SPAN};

/// Screen angle of the reference position (12 o'clock, y-down frame).
pub const REFERENCE_ANGLE: f64 = -90.0;

/// Index of `sign` counted clockwise from the ascendant.
pub fn rotation_index(sign: Sign, ascendant: Sign) -> usize {
    (sign.index() + 12 - ascendant.index()) % 12
}

/// Rendered start angle of `sign`'s wedge.
pub fn segment_start_angle(sign: Sign, ascendant: Sign) -> f64 {
    rotation_index(sign, ascendant) as f64 * SIGN_SPAN + REFERENCE_ANGLE
}

/// Screen angle of a raw ecliptic longitude on a wheel rotated to `ascendant`.
pub fn longitude_angle(longitude: f64, ascendant: Sign) -> f64 {
    let placement = normalize(longitude);
    segment_start_angle(placement.sign, ascendant) + placement.degree_in_sign
}

/// Twelve segments in canonical sign order.
pub fn build_segments(ascendant: Sign, chart_size: f64, settings: &LayoutSettings) -> Vec<ChartSegment> {
    let half = chart_size / 2.0;
    Sign::ALL
        .iter()
        .map(|&sign| {
            let start_angle = segment_start_angle(sign, ascendant);
            let outer_radius = half * settings.ring_outer_ratio;
            let label_radius = outer_radius * settings.label_ratio;
            let label_theta = (start_angle + SIGN_SPAN / 2.0).to_radians();
            ChartSegment {
                sign,
                start_angle,
                end_angle: start_angle + SIGN_SPAN,
                rotation_index: rotation_index(sign, ascendant),
                inner_radius: half * settings.ring_inner_ratio,
                outer_radius,
                element: sign.element(),
                label_x: half + label_radius * label_theta.cos(),
                label_y: half + label_radius * label_theta.sin(),
            }
        })
        .collect()
}

pub fn build_house_lines(houses: &HouseSet, ascendant: Sign) -> Vec<HouseLine> {
    houses
        .cusps
        .iter()
        .map(|cusp| HouseLine {
            house_number: cusp.house_number,
            angle: segment_start_angle(cusp.sign, ascendant) + cusp.degree_in_sign,
        })
        .collect()
}
