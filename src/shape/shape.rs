use crate::shape::{Ball, Cone, Cuboid, Cylinder, SupportMap, Triangle};
use downcast_rs::{impl_downcast, DowncastSync};
use num_derive::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// A cylindrical shape.
    Cylinder,
    /// A conical shape.
    Cone,
    /// A triangle shape.
    Triangle,
    /// A custom user-defined shape.
    Custom,
}

#[derive(Copy, Clone)]
/// Enum representing the shape with its actual type
pub enum TypedShape<'a> {
    /// A ball shape.
    Ball(&'a Ball),
    /// A cuboid shape.
    Cuboid(&'a Cuboid),
    /// A cylindrical shape.
    Cylinder(&'a Cylinder),
    /// A conical shape.
    Cone(&'a Cone),
    /// A triangle shape.
    Triangle(&'a Triangle),
    /// A custom user-defined shape.
    Custom(&'a dyn Shape),
}

impl core::fmt::Debug for TypedShape<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ball(shape) => write!(f, "Ball({:?})", shape),
            Self::Cuboid(shape) => write!(f, "Cuboid({:?})", shape),
            Self::Cylinder(shape) => write!(f, "Cylinder({:?})", shape),
            Self::Cone(shape) => write!(f, "Cone({:?})", shape),
            Self::Triangle(shape) => write!(f, "Triangle({:?})", shape),
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// Trait implemented by shapes usable by the narrow-phase queries.
///
/// A shape only describes local geometry. Its placement in the world is
/// always given separately, as an `Isometry`, to each query.
pub trait Shape: DowncastSync {
    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;

    /// Is this shape known to be convex?
    ///
    /// If this returns `true` then `self` is known to be convex.
    /// If this returns `false` then it is not known whether or
    /// not `self` is convex.
    fn is_convex(&self) -> bool {
        false
    }

    /// Converts this shape into its support mapping, if it has one.
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        None
    }
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cylinder, if it is one.
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cone, if it is one.
    pub fn as_cone(&self) -> Option<&Cone> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a triangle, if it is one.
    pub fn as_triangle(&self) -> Option<&Triangle> {
        self.downcast_ref()
    }
}

macro_rules! impl_support_map_shape(
    ($($Shape: ident),*) => {$(
        impl Shape for $Shape {
            fn is_convex(&self) -> bool {
                true
            }

            fn shape_type(&self) -> ShapeType {
                ShapeType::$Shape
            }

            fn as_typed_shape(&self) -> TypedShape<'_> {
                TypedShape::$Shape(self)
            }

            fn as_support_map(&self) -> Option<&dyn SupportMap> {
                Some(self as &dyn SupportMap)
            }
        }
    )*}
);

impl_support_map_shape!(Ball, Cuboid, Cylinder, Cone, Triangle);
