use portal3d::math::{Isometry, Real, Vector};
use portal3d::query;
use portal3d::shape::{Cone, Cylinder};
use std::f32::consts::PI;

// The cone is flipped so that its apex points down, toward the top disk of the cylinder.
fn flipped_cone_at(height: Real) -> Isometry<Real> {
    Isometry::new(Vector::new(0.0, height, 0.0), Vector::x() * PI as Real)
}

#[test]
fn cone_apex_penetrates_cylinder_top() {
    let cylinder = Cylinder::new(1.0, 0.5);
    let cone = Cone::new(1.0, 0.5);
    let pos1 = Isometry::identity();
    let pos2 = flipped_cone_at(1.8);

    assert!(query::intersect(&pos1, &cylinder, &pos2, &cone));

    let contact = query::contact(&pos1, &cylinder, &pos2, &cone).expect("Penetration not found.");
    assert!(relative_eq!(contact.penetration, 0.2, epsilon = 1.0e-4));
    assert!(relative_eq!(*contact.normal, -Vector::y(), epsilon = 1.0e-4));
}

#[test]
fn cone_apex_above_cylinder_top() {
    let cylinder = Cylinder::new(1.0, 0.5);
    let cone = Cone::new(1.0, 0.5);
    let pos1 = Isometry::identity();
    let pos2 = flipped_cone_at(2.1);

    assert!(!query::intersect(&pos1, &cylinder, &pos2, &cone));
    assert_eq!(query::contact(&pos1, &cylinder, &pos2, &cone), None);
}
