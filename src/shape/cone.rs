//! Support mapping based Cone shape.

use crate::math::{Point, Real, Vector, DEFAULT_TOLERANCE};
use crate::shape::{ShapeError, SupportMap};
use num::Zero;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .sqrt()

/// Cone shape with its principal axis aligned with the `y` axis.
///
/// The center of the base disk lies at the local origin and the apex at
/// `(0, height, 0)`.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    /// The height of the apex above the base disk.
    pub height: Real,
    /// The base radius of the cone.
    pub radius: Real,
}

impl Cone {
    /// Creates a new cone.
    ///
    /// # Arguments:
    /// * `height` - the distance between the base disk and the apex along the `y` axis.
    /// * `radius` - the radius of the base disk.
    pub fn new(height: Real, radius: Real) -> Cone {
        Cone { height, radius }
    }

    /// Creates a new cone, checking that both dimensions are finite and non-negative.
    pub fn try_new(height: Real, radius: Real) -> Result<Cone, ShapeError> {
        ShapeError::check_dimension("height", height)?;
        ShapeError::check_dimension("radius", radius)?;
        Ok(Cone::new(height, radius))
    }

    /// The sine of the half-angle at the apex.
    #[inline]
    pub fn sin_half_angle(&self) -> Real {
        self.radius / (self.radius * self.radius + self.height * self.height).sqrt()
    }
}

impl SupportMap for Cone {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let v = dir.normalize();

        // The apex wins whenever `dir` lies inside the cone of directions
        // normal to the lateral surface around the apex.
        if v.y >= self.sin_half_angle() {
            return Point::new(0.0, self.height, 0.0);
        }

        let mut w = v;
        w.y = 0.0;
        let w_len = w.norm();

        if w_len > DEFAULT_TOLERANCE {
            Point::from(w * (self.radius / w_len))
        } else {
            Point::from(Vector::zero())
        }
    }
}
