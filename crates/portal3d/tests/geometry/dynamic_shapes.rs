use portal3d::math::{Isometry, Vector};
use portal3d::query::{self, Unsupported};
use portal3d::shape::{Ball, Cuboid, Shape, ShapeType, TypedShape};

struct Marker;

impl Shape for Marker {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Custom
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Custom(self)
    }
}

#[test]
fn dynamic_queries_match_static_ones() {
    let ball = Ball::new(1.0);
    let cuboid = Cuboid::new(Vector::repeat(0.5));
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(1.2, 0.0, 0.0);

    let shapes: [&dyn Shape; 2] = [&ball, &cuboid];

    assert_eq!(
        query::intersection_test(&pos1, shapes[0], &pos2, shapes[1]),
        Ok(query::intersect(&pos1, &ball, &pos2, &cuboid))
    );
    assert_eq!(
        query::contact_shape_shape(&pos1, shapes[0], &pos2, shapes[1]),
        Ok(query::contact(&pos1, &ball, &pos2, &cuboid))
    );
    assert!(query::contact(&pos1, &ball, &pos2, &cuboid).is_some());
}

#[test]
fn shapes_without_support_map_are_unsupported() {
    let ball = Ball::new(1.0);
    let pos = Isometry::identity();

    assert_eq!(
        query::intersection_test(&pos, &Marker, &pos, &ball),
        Err(Unsupported)
    );
    assert_eq!(
        query::contact_shape_shape(&pos, &ball, &pos, &Marker),
        Err(Unsupported)
    );
}
