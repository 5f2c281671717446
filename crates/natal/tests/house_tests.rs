use approx::assert_abs_diff_eq;
use natal::houses::resolve_houses;
use natal::zodiac::Sign;
use natal::ChartError;

fn placidus_like() -> Vec<f64> {
    vec![
        93.1, 118.0, 145.2, 177.4, 211.6, 244.8, 273.1, 298.0, 325.2, 357.4, 31.6, 64.8,
    ]
}

#[test]
fn test_resolve_houses_numbers_in_input_order() {
    let houses = resolve_houses(&placidus_like()).unwrap();

    assert_eq!(houses.cusps.len(), 12);
    for (i, cusp) in houses.cusps.iter().enumerate() {
        assert_eq!(cusp.house_number as usize, i + 1);
    }
    assert_eq!(houses.ascendant(), Sign::Cancer);
    assert_abs_diff_eq!(houses.cusps[0].degree_in_sign, 3.1, epsilon = 1e-9);
    assert_eq!(houses.cusp(10).map(|c| c.sign), Some(Sign::Pisces));
}

#[test]
fn test_unequal_houses_can_skip_and_repeat_signs() {
    let cusps = vec![
        2.0, 10.0, 20.0, 95.0, 150.0, 170.0, 182.0, 190.0, 200.0, 275.0, 330.0, 350.0,
    ];
    let houses = resolve_houses(&cusps).unwrap();
    let signs: Vec<Sign> = houses.cusps.iter().map(|c| c.sign).collect();

    assert_eq!(&signs[..3], &[Sign::Aries, Sign::Aries, Sign::Aries]);
    assert!(!signs.contains(&Sign::Taurus));
}

#[test]
fn test_out_of_range_cusps_are_normalized() {
    let cusps: Vec<f64> = (0..12).map(|i| -30.0 * i as f64 + 370.0).collect();
    let houses = resolve_houses(&cusps).unwrap();
    assert_eq!(houses.ascendant(), Sign::Aries);
    assert_eq!(houses.cusps[1].sign, Sign::Pisces);
}

#[test]
fn test_insufficient_data() {
    let result = resolve_houses(&placidus_like()[..7]);
    assert_eq!(
        result.unwrap_err(),
        ChartError::InsufficientData {
            expected: 12,
            received: 7
        }
    );
    assert!(resolve_houses(&[]).is_err());
}

#[test]
fn test_house_of_with_wraparound() {
    let houses = resolve_houses(&placidus_like()).unwrap();

    assert_eq!(houses.house_of(100.0), 1);
    assert_eq!(houses.house_of(93.1), 1);
    assert_eq!(houses.house_of(120.0), 2);
    // house 10 runs from 357.4 through 0° to 31.6
    assert_eq!(houses.house_of(359.0), 10);
    assert_eq!(houses.house_of(5.0), 10);
    assert_eq!(houses.house_of(365.0), 10);
    assert_eq!(houses.house_of(80.0), 12);
}

#[test]
fn test_house_of_degenerate_cusps_falls_back_to_first() {
    let houses = resolve_houses(&[42.0; 12]).unwrap();
    assert_eq!(houses.house_of(200.0), 1);
}
