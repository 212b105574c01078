//! Support mapping based Cylinder shape.

use crate::math::{Point, Real, Vector, DEFAULT_TOLERANCE};
use crate::shape::{ShapeError, SupportMap};
use num::Zero;

/// Cylinder shape with its principal axis aligned with the `y` axis.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The half-height of the cylinder.
    pub half_height: Real,
    /// The radius fo the cylinder.
    pub radius: Real,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cylinder along the `y` axis.
    /// * `radius` - the length of the cylinder along all other axis.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        Cylinder {
            half_height,
            radius,
        }
    }

    /// Creates a new cylinder, checking that both dimensions are finite and non-negative.
    pub fn try_new(half_height: Real, radius: Real) -> Result<Cylinder, ShapeError> {
        ShapeError::check_dimension("half_height", half_height)?;
        ShapeError::check_dimension("radius", radius)?;
        Ok(Cylinder::new(half_height, radius))
    }
}

impl SupportMap for Cylinder {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let v = dir.normalize();
        let axial = if v.y >= 0.0 {
            self.half_height
        } else {
            -self.half_height
        };

        // Radial part of the direction, orthogonal to the `y` axis.
        let mut w = v;
        w.y = 0.0;
        let w_len = w.norm();

        let mut res = if w_len > DEFAULT_TOLERANCE {
            w * (self.radius / w_len)
        } else {
            Vector::zero()
        };

        res.y = axial;
        Point::from(res)
    }
}
