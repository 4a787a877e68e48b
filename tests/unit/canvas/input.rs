use super::*;

#[test]
fn identity_viewport_maps_points_unchanged() {
    let v = ViewportRect::identity(400, 400);
    assert_eq!(
        v.to_surface(Point::new(12.5, 300.0), 400, 400),
        Some(Point::new(12.5, 300.0))
    );
}

#[test]
fn css_scaled_viewport_maps_into_backing_pixels() {
    // 400x400 surface shown at 200x100 with an offset.
    let v = ViewportRect {
        left: 10.0,
        top: 20.0,
        width: 200.0,
        height: 100.0,
    };
    assert_eq!(
        v.to_surface(Point::new(110.0, 70.0), 400, 400),
        Some(Point::new(200.0, 200.0))
    );
}

#[test]
fn collapsed_viewport_yields_none() {
    let v = ViewportRect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 100.0,
    };
    assert_eq!(v.to_surface(Point::new(1.0, 1.0), 400, 400), None);
}

#[test]
fn only_one_contact_draws() {
    assert_eq!(
        Contacts::Mouse(Point::new(1.0, 2.0)).single(),
        Some(Point::new(1.0, 2.0))
    );
    assert_eq!(
        Contacts::Touch(vec![Point::new(3.0, 4.0)]).single(),
        Some(Point::new(3.0, 4.0))
    );
    assert_eq!(Contacts::Touch(vec![]).single(), None);
    assert_eq!(
        Contacts::Touch(vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)]).single(),
        None
    );
}
