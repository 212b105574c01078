extern crate nalgebra as na;

use na::{Isometry3, Vector3};
use portal3d::query;
use portal3d::shape::{Ball, Cuboid};

fn main() {
    let cuboid = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
    let ball = Ball::new(1.0);

    let cuboid_pos = Isometry3::identity();
    let ball_pos_penetrating = Isometry3::translation(1.5, 0.5, 0.0);
    let ball_pos_too_far = Isometry3::translation(3.0, 3.0, 3.0);

    let ctct_penetrating =
        query::contact(&cuboid_pos, &cuboid, &ball_pos_penetrating, &ball);
    let ctct_too_far = query::contact(&cuboid_pos, &cuboid, &ball_pos_too_far, &ball);

    let ctct = ctct_penetrating.expect("the ball should penetrate the cuboid");
    assert!(ctct.penetration >= 0.0);
    assert_eq!(ctct_too_far, None);

    println!(
        "normal: {:?}, position: {:?}, penetration: {}",
        ctct.normal.as_ref(),
        ctct.position,
        ctct.penetration
    );
}
