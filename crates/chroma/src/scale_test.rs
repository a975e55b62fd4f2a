use crate::color::Color;
use crate::scale::ColorScale;

fn three_stop() -> ColorScale {
    ColorScale::new(vec![
        (0.0, Color::new(0, 0, 0)),
        (0.5, Color::new(100, 200, 50)),
        (1.0, Color::new(255, 255, 255)),
    ])
}

#[test]
fn below_first_position_returns_first_color_exactly() {
    let scale = three_stop();
    assert_eq!(scale.color(-2.0), Color::new(0, 0, 0));
    assert_eq!(scale.color(0.0), Color::new(0, 0, 0));
}

#[test]
fn above_last_position_returns_last_color_exactly() {
    let scale = three_stop();
    assert_eq!(scale.color(1.0), Color::new(255, 255, 255));
    assert_eq!(scale.color(7.5), Color::new(255, 255, 255));
}

#[test]
fn interior_knot_returns_knot_color_exactly() {
    let scale = three_stop();
    assert_eq!(scale.color(0.5), Color::new(100, 200, 50));
}

#[test]
fn interpolates_channels_independently() {
    let scale = ColorScale::gradient(Color::new(0, 100, 200), Color::new(200, 100, 0));
    let mid = scale.color(0.5);
    assert_eq!(mid, Color::new(100, 100, 100));
}

#[test]
fn duplicate_positions_first_match_wins() {
    let scale = ColorScale::new(vec![
        (0.0, Color::new(0, 0, 0)),
        (0.5, Color::new(10, 10, 10)),
        (0.5, Color::new(99, 99, 99)),
        (1.0, Color::new(255, 255, 255)),
    ]);
    assert_eq!(scale.color(0.5), Color::new(10, 10, 10));
}

#[test]
fn clamped_scale_ignores_positions_outside_stop_range() {
    let scale = ColorScale::new(vec![(0.25, Color::new(10, 0, 0)), (0.75, Color::new(90, 0, 0))]);
    assert_eq!(scale.color(0.1), Color::new(10, 0, 0));
    assert_eq!(scale.color(0.9), Color::new(90, 0, 0));
}
