//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector, DEFAULT_TOLERANCE};
use crate::shape::{ShapeError, SupportMap};

/// A flat, zero-thickness triangle shape.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates a triangle from three points, rejecting collinear or non-finite vertices.
    pub fn try_new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Result<Triangle, ShapeError> {
        let triangle = Triangle::new(a, b, c);

        if !triangle
            .vertices()
            .iter()
            .all(|pt| pt.coords.iter().all(|e| e.is_finite()))
        {
            return Err(ShapeError::NonFiniteVertex);
        }

        if triangle.scaled_normal().norm() <= DEFAULT_TOLERANCE {
            return Err(ShapeError::DegenerateTriangle);
        }

        Ok(triangle)
    }

    /// The three vertices of this triangle, in order.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// A vector normal of this triangle, with a length equal to twice its area.
    ///
    /// The normal points such that it is collinear to `AB × AC`.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // Ties keep the vertex encountered first.
        let mut best = self.a;
        let mut best_dot = self.a.coords.dot(dir);

        for pt in [self.b, self.c] {
            let dot = pt.coords.dot(dir);
            if dot > best_dot {
                best_dot = dot;
                best = pt;
            }
        }

        best
    }
}
