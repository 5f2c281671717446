use approx::assert_abs_diff_eq;
use natal::zodiac::{normalize, reduce_longitude, Element, PlanetPosition, Sign};

#[test]
fn test_normalize_365_is_five_aries() {
    let placement = normalize(365.0);
    assert_eq!(placement.sign, Sign::Aries);
    assert_abs_diff_eq!(placement.degree_in_sign, 5.0, epsilon = 1e-9);
}

#[test]
fn test_normalize_each_sign_start() {
    for sign in Sign::ALL {
        let placement = normalize(sign.start_longitude() + 0.5);
        assert_eq!(placement.sign, sign);
        assert_abs_diff_eq!(placement.degree_in_sign, 0.5, epsilon = 1e-9);
    }
}

#[test]
fn test_normalize_large_negative() {
    // -725 = -2*360 - 5  ->  355 -> 25° Pisces
    let placement = normalize(-725.0);
    assert_eq!(placement.sign, Sign::Pisces);
    assert_abs_diff_eq!(placement.degree_in_sign, 25.0, epsilon = 1e-9);
}

#[test]
fn test_reduce_longitude_range() {
    assert_abs_diff_eq!(reduce_longitude(360.0), 0.0);
    assert_abs_diff_eq!(reduce_longitude(-90.0), 270.0);
    assert_abs_diff_eq!(reduce_longitude(1080.25), 0.25, epsilon = 1e-9);
}

#[test]
fn test_placement_round_trips_to_absolute_longitude() {
    let placement = normalize(247.75);
    assert_eq!(placement.sign, Sign::Sagittarius);
    assert_abs_diff_eq!(placement.absolute_longitude(), 247.75, epsilon = 1e-9);
}

#[test]
fn test_retrograde_carried_through() {
    let pos = PlanetPosition::from_longitude("mercury", 61.0, true);
    assert_eq!(pos.sign, Sign::Gemini);
    assert!(pos.retrograde);
    assert_eq!(pos.placement().sign, Sign::Gemini);
}

#[test]
fn test_elements_cycle_fire_earth_air_water() {
    let expected = [Element::Fire, Element::Earth, Element::Air, Element::Water];
    for sign in Sign::ALL {
        assert_eq!(sign.element(), expected[sign.index() % 4]);
    }
}

#[test]
fn test_sign_serializes_lowercase() {
    let json = serde_json::to_string(&Sign::Capricorn).unwrap();
    assert_eq!(json, "\"capricorn\"");
    let back: Sign = serde_json::from_str("\"aquarius\"").unwrap();
    assert_eq!(back, Sign::Aquarius);
}
