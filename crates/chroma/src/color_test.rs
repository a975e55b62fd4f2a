use crate::color::Color;

#[test]
fn hsv_primaries_convert_exactly() {
    assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::new(255, 0, 0));
    assert_eq!(Color::from_hsv(120.0, 1.0, 1.0), Color::new(0, 255, 0));
    assert_eq!(Color::from_hsv(240.0, 1.0, 1.0), Color::new(0, 0, 255));
}

#[test]
fn hsv_hue_wraps_modulo_360() {
    assert_eq!(
        Color::from_hsv(390.0, 0.8, 0.5),
        Color::from_hsv(30.0, 0.8, 0.5)
    );
    assert_eq!(
        Color::from_hsv(-60.0, 1.0, 1.0),
        Color::from_hsv(300.0, 1.0, 1.0)
    );
}

#[test]
fn hsv_zero_saturation_is_gray() {
    let c = Color::from_hsv(215.0, 0.0, 0.5);
    assert_eq!(c.r, c.g);
    assert_eq!(c.g, c.b);
}

#[test]
fn cool_temperature_is_reddish() {
    let c = Color::from_temperature(2500.0);
    assert!(c.r > c.b, "2500K should lean red: {:?}", c);
}

#[test]
fn hot_temperature_is_bluish() {
    let c = Color::from_temperature(25000.0);
    assert!(c.b > c.r, "25000K should lean blue: {:?}", c);
}

#[test]
fn solar_temperature_is_near_white() {
    let c = Color::from_temperature(5800.0);
    let spread = c.r.max(c.g).max(c.b) - c.r.min(c.g).min(c.b);
    assert!(spread < 80, "5800K should be near white: {:?}", c);
}

#[test]
fn temperature_clamps_out_of_range_inputs() {
    assert_eq!(Color::from_temperature(10.0), Color::from_temperature(1000.0));
    assert_eq!(
        Color::from_temperature(1e6),
        Color::from_temperature(40000.0)
    );
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Color::new(0, 0, 0);
    let b = Color::new(255, 255, 255);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    let mid = a.lerp(b, 0.5);
    assert_eq!(mid, Color::new(128, 128, 128));
}

#[test]
fn pow_biases_channels_darker() {
    let c = Color::new(128, 128, 128).pow(2.0);
    assert!(c.r < 128, "squaring should darken midtones: {:?}", c);
    // Channel extremes are fixed points
    assert_eq!(Color::new(0, 255, 0).pow(2.0), Color::new(0, 255, 0));
}

#[test]
fn luminance_orders_dark_to_bright() {
    assert!(Color::BLACK.luminance() < 1e-9);
    assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-9);
    assert!(Color::new(40, 40, 40).luminance() < Color::new(200, 200, 200).luminance());
}

#[test]
fn hex_round_trip() {
    let c = Color::new(255, 153, 68);
    assert_eq!(c.to_hex(), "#FF9944");
    assert_eq!(Color::from_hex("#FF9944").unwrap(), c);
    assert_eq!(Color::from_hex("ff9944").unwrap(), c);
}

#[test]
fn hex_rejects_malformed_input() {
    assert!(Color::from_hex("#FF99").is_err());
    assert!(Color::from_hex("GGGGGG").is_err());
}
