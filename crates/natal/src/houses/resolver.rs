use crate::error::ChartError;
use crate::houses::types::{HouseCusp, HouseSet};
use crate::zodiac::normalize;

/// Number of houses in a chart.
pub const HOUSE_COUNT: usize = 12;

/// Classify the oracle's cusp longitudes into house cusps.
///
/// House numbers follow input order, so `cusps[0]` is house 1 (the ascendant).
/// Each cusp is normalized on its own; out-of-order or degenerate cusps are
/// classified as given. Values past the twelfth are ignored.
pub fn resolve_houses(cusps: &[f64]) -> Result<HouseSet, ChartError> {
    if cusps.len() < HOUSE_COUNT {
        return Err(ChartError::InsufficientData {
            expected: HOUSE_COUNT,
            received: cusps.len(),
        });
    }

    let cusps = cusps
        .iter()
        .take(HOUSE_COUNT)
        .enumerate()
        .map(|(i, &lon)| {
            let placement = normalize(lon);
            HouseCusp {
                house_number: (i + 1) as u8,
                sign: placement.sign,
                degree_in_sign: placement.degree_in_sign,
            }
        })
        .collect();

    Ok(HouseSet { cusps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::Sign;

    #[test]
    fn test_rejects_short_input() {
        let err = resolve_houses(&[0.0; 11]).unwrap_err();
        assert_eq!(
            err,
            ChartError::InsufficientData {
                expected: 12,
                received: 11
            }
        );
    }

    #[test]
    fn test_ignores_extra_cusps() {
        let mut cusps: Vec<f64> = (0..12).map(|i| i as f64 * 30.0 + 3.0).collect();
        cusps.push(999.0);
        let houses = resolve_houses(&cusps).unwrap();
        assert_eq!(houses.cusps.len(), 12);
        assert_eq!(houses.cusps[11].sign, Sign::Pisces);
    }
}
