use portal3d::math::{Isometry, Point};
use portal3d::query;
use portal3d::shape::{Ball, Triangle};

fn triangle() -> Triangle {
    Triangle::new(
        Point::new(1.5, 0.0, 1.5),
        Point::new(-2.5, 0.0, -2.5),
        Point::new(-2.5, 0.0, 1.5),
    )
}

#[test]
fn ball_resting_in_triangle() {
    let tri = triangle();
    let ball = Ball::new(1.0);
    let pos1 = Isometry::identity();

    let pos2 = Isometry::translation(0.2, 0.5, 0.1);
    assert!(query::intersect(&pos1, &tri, &pos2, &ball));
    let contact = query::contact(&pos1, &tri, &pos2, &ball).expect("Penetration not found.");
    assert!(contact.penetration > 0.4 && contact.penetration < 0.6);

    let pos2 = Isometry::translation(0.2, 0.9, 0.1);
    assert!(query::intersect(&pos1, &tri, &pos2, &ball));
    let contact = query::contact(&pos1, &tri, &pos2, &ball).expect("Penetration not found.");
    assert!(contact.penetration > 0.05 && contact.penetration < 0.15);
}

#[test]
fn ball_above_triangle() {
    let tri = triangle();
    let ball = Ball::new(1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.2, 1.5, 0.1);

    assert!(!query::intersect(&pos1, &tri, &pos2, &ball));
    assert_eq!(query::contact(&pos1, &tri, &pos2, &ball), None);
}
