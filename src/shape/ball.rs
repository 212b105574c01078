use na::Unit;

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap};

/// A Ball shape.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }

    /// Creates a new ball, checking that the radius is finite and non-negative.
    pub fn try_new(radius: Real) -> Result<Ball, ShapeError> {
        ShapeError::check_dimension("radius", radius)?;
        Ok(Ball::new(radius))
    }
}

// A ball is isotropic: the rotational part of the pose is never used.
impl SupportMap for Ball {
    #[inline]
    fn support_point(&self, m: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        Point::from(m.translation.vector) + self.local_support_point(dir).coords
    }

    #[inline]
    fn support_point_toward(&self, m: &Isometry<Real>, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(m.translation.vector) + **dir * self.radius
    }

    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match Unit::try_new(*dir, 0.0) {
            Some(dir) => self.local_support_point_toward(&dir),
            None => Point::origin(),
        }
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }
}
