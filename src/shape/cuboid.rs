//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::{ShapeError, SupportMap};

/// Shape of a box.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// Creates a new box, checking that every half-extent is finite and non-negative.
    pub fn try_new(half_extents: Vector<Real>) -> Result<Cuboid, ShapeError> {
        for i in 0..DIM {
            ShapeError::check_dimension("half_extents", half_extents[i])?;
        }

        Ok(Cuboid::new(half_extents))
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // A zero component (including -0.0) selects the positive face.
        let mut res = self.half_extents;

        for i in 0..DIM {
            if dir[i] < 0.0 {
                res[i] = -res[i];
            }
        }

        Point::from(res)
    }
}
