#[macro_use]
extern crate approx;

mod cuboid_cuboid_contact;
mod cylinder_cone_contact;
mod dynamic_shapes;
mod iteration_limit;
mod triangle_ball_contact;
