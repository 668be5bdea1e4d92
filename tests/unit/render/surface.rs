use super::*;

const BLACK: Color = Color::rgb(0, 0, 0);
const WHITE: Color = Color::rgb(255, 255, 255);

#[test]
fn solid_is_constant() {
    let p = Paint::Solid(Color::rgb(1, 2, 3));
    assert_eq!(p.color_at(Point::new(-5.0, 1e6)), Color::rgb(1, 2, 3));
}

#[test]
fn linear_runs_corner_to_corner() {
    let p = Paint::Linear {
        start: Point::new(0.0, 0.0),
        end: Point::new(100.0, 50.0),
        from: BLACK,
        to: WHITE,
    };
    assert_eq!(p.color_at(Point::new(0.0, 0.0)), BLACK);
    assert_eq!(p.color_at(Point::new(100.0, 50.0)), WHITE);
    assert_eq!(p.color_at(Point::new(50.0, 25.0)), Color::rgb(128, 128, 128));
    assert_eq!(p.color_at(Point::new(-10.0, -10.0)), BLACK);
    assert_eq!(p.color_at(Point::new(500.0, 500.0)), WHITE);
}

#[test]
fn radial_reaches_outer_color_at_radius() {
    let p = Paint::Radial {
        center: Point::new(50.0, 50.0),
        radius: 50.0,
        from: BLACK,
        to: WHITE,
    };
    assert_eq!(p.color_at(Point::new(50.0, 50.0)), BLACK);
    assert_eq!(p.color_at(Point::new(100.0, 50.0)), WHITE);
    assert_eq!(p.color_at(Point::new(0.0, 0.0)), WHITE);
    assert_eq!(p.color_at(Point::new(75.0, 50.0)), Color::rgb(128, 128, 128));
}

#[test]
fn degenerate_ramps_use_end_color() {
    let p = Paint::Radial {
        center: Point::new(0.0, 0.0),
        radius: 0.0,
        from: BLACK,
        to: WHITE,
    };
    assert_eq!(p.color_at(Point::new(0.0, 0.0)), WHITE);
}
