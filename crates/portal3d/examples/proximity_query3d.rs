extern crate nalgebra as na;

use na::{Isometry3, Vector3};
use portal3d::query;
use portal3d::shape::{Cone, Cylinder, Shape};
use std::f32::consts::FRAC_PI_2;

fn main() {
    let cylinder = Cylinder::new(1.0, 0.5);
    let cone = Cone::new(2.0, 1.0);

    let cylinder_pos = Isometry3::identity();
    // The cone lies on its side, with its apex pointing toward the cylinder.
    let cone_pos_intersecting = Isometry3::new(Vector3::new(2.0, 0.0, 0.0), Vector3::z() * FRAC_PI_2);
    let cone_pos_disjoint = Isometry3::new(Vector3::new(3.0, 0.0, 0.0), Vector3::z() * FRAC_PI_2);

    let shapes: [&dyn Shape; 2] = [&cylinder, &cone];

    let intersecting =
        query::intersection_test(&cylinder_pos, shapes[0], &cone_pos_intersecting, shapes[1])
            .unwrap();
    let disjoint =
        query::intersection_test(&cylinder_pos, shapes[0], &cone_pos_disjoint, shapes[1])
            .unwrap();

    assert!(intersecting);
    assert!(!disjoint);
}
