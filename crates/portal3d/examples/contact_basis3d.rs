extern crate nalgebra as na;

use na::{Isometry3, Vector3};
use portal3d::query;
use portal3d::shape::Cuboid;
use std::f32::consts::FRAC_PI_4;

fn main() {
    let cuboid = Cuboid::new(Vector3::new(0.5, 0.5, 0.5));

    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::new(Vector3::new(1.0, 0.0, 0.0), Vector3::y() * FRAC_PI_4);

    let ctct = query::contact(&pos1, &cuboid, &pos2, &cuboid).expect("the cuboids should overlap");
    let basis = ctct.basis();

    println!("penetration: {}", ctct.penetration);
    println!("contact frame (normal, tangent1, tangent2): {}", basis);

    assert!((basis.determinant() - 1.0).abs() < 1.0e-5);
}
