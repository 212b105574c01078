//! Shapes supported by portal3d.

pub use self::ball::Ball;
pub use self::cone::Cone;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType, TypedShape};
pub use self::shape_error::ShapeError;
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;

mod ball;
mod cone;
mod cuboid;
mod cylinder;
mod shape;
mod shape_error;
mod support_map;
mod triangle;
