use portal3d::math::{Isometry, Point, Real, Vector};
use portal3d::query;
use portal3d::shape::Cuboid;
use std::f32::consts::FRAC_PI_4;

fn unit_cuboid() -> Cuboid {
    Cuboid::new(Vector::repeat(0.5))
}

#[test]
fn aligned_cuboids_penetration_depth() {
    let c = unit_cuboid();
    let pos1 = Isometry::identity();

    for d in [0.1, 0.25, 0.5, 0.75, 0.9] {
        let pos2 = Isometry::translation(d, 0.0, 0.0);
        assert!(query::intersect(&pos1, &c, &pos2, &c));

        let contact = query::contact(&pos1, &c, &pos2, &c).expect("Penetration not found.");
        assert!(relative_eq!(contact.penetration, 1.0 - d, epsilon = 1.0e-5));
        assert!(relative_eq!(*contact.normal, -Vector::x(), epsilon = 1.0e-5));
        assert!(relative_eq!(
            contact.position,
            Point::new(d / 2.0, 0.5, 0.5),
            epsilon = 1.0e-5
        ));
    }
}

#[test]
fn aligned_cuboids_contact_in_world_space() {
    let c = unit_cuboid();
    let pos1 = Isometry::translation(1.0, 2.0, 3.0);
    let pos2 = Isometry::translation(1.25, 2.0, 3.0);

    let contact = query::contact(&pos1, &c, &pos2, &c).expect("Penetration not found.");
    assert!(relative_eq!(contact.penetration, 0.75, epsilon = 1.0e-5));
    assert!(relative_eq!(
        contact.position,
        Point::new(1.125, 2.5, 3.5),
        epsilon = 1.0e-5
    ));
    assert!(relative_eq!(
        contact.point1,
        Point::new(1.5, 2.5, 3.5),
        epsilon = 1.0e-5
    ));
}

#[test]
fn touching_or_separated_cuboids() {
    let c = unit_cuboid();
    let pos1 = Isometry::identity();

    for d in [1.0, 1.2, 3.0] {
        let pos2 = Isometry::translation(d, 0.0, 0.0);
        assert!(!query::intersect(&pos1, &c, &pos2, &c));
        assert_eq!(query::contact(&pos1, &c, &pos2, &c), None);
    }
}

#[test]
fn offset_cuboids_penetration_depth() {
    let c = unit_cuboid();
    let pos1 = Isometry::identity();

    let pos2 = Isometry::translation(0.8, 0.1, 0.05);
    let contact = query::contact(&pos1, &c, &pos2, &c).expect("Penetration not found.");
    assert!(relative_eq!(contact.penetration, 0.2, epsilon = 1.0e-3));
    assert!(relative_eq!(*contact.normal, -Vector::x(), epsilon = 1.0e-3));

    let pos2 = Isometry::translation(0.6, 0.3, -0.2);
    let contact = query::contact(&pos1, &c, &pos2, &c).expect("Penetration not found.");
    assert!(relative_eq!(contact.penetration, 0.4, epsilon = 1.0e-3));

    let pos2 = Isometry::translation(0.2, 0.9, 0.1);
    let contact = query::contact(&pos1, &c, &pos2, &c).expect("Penetration not found.");
    assert!(relative_eq!(contact.penetration, 0.1, epsilon = 1.0e-3));
    assert!(relative_eq!(*contact.normal, -Vector::y(), epsilon = 1.0e-3));
}

#[test]
fn rotated_cuboid_intersects() {
    let c = unit_cuboid();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::new(Vector::x(), Vector::y() * FRAC_PI_4 as Real);

    assert!(query::intersect(&pos1, &c, &pos2, &c));
}

#[test]
fn rotated_cuboid_corner_penetration() {
    let c = unit_cuboid();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::new(Vector::x(), Vector::z() * FRAC_PI_4 as Real);

    let contact = query::contact(&pos1, &c, &pos2, &c).expect("Penetration not found.");
    let expected = 0.5 - (1.0 - (0.5 as Real).sqrt());
    assert!(relative_eq!(contact.penetration, expected, epsilon = 1.0e-3));
    assert!(relative_eq!(*contact.normal, -Vector::x(), epsilon = 1.0e-3));
}

#[test]
fn contact_is_deterministic() {
    let c = unit_cuboid();
    let pos1 = Isometry::new(Vector::new(0.1, -0.2, 0.3), Vector::new(0.2, 0.4, -0.1));
    let pos2 = Isometry::new(Vector::new(0.7, 0.1, 0.2), Vector::new(-0.3, 0.5, 0.8));

    let first = query::contact(&pos1, &c, &pos2, &c);
    let second = query::contact(&pos1, &c, &pos2, &c);

    assert!(first.is_some());
    assert_eq!(first, second);
}
