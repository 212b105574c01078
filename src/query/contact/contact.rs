use crate::math::{Isometry, Matrix, Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils;
use approx::{AbsDiffEq, RelativeEq};
use core::mem;
use na::Unit;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// Geometric description of a penetrating contact between two shapes.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Contact {
    /// Witness point of the contact on the surface of the first shape.
    pub point1: Point<Real>,

    /// Witness point of the contact on the surface of the second shape.
    pub point2: Point<Real>,

    /// Contact normal, pointing from `point1` toward `point2`.
    ///
    /// Moving the second shape by `-normal * penetration` resolves the overlap.
    pub normal: Unit<Vector<Real>>,

    /// The representative contact point, halfway between both witness points.
    pub position: Point<Real>,

    /// Penetration depth along the normal. Always non-negative.
    pub penetration: Real,
}

impl Contact {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        point1: Point<Real>,
        point2: Point<Real>,
        normal: Unit<Vector<Real>>,
        position: Point<Real>,
        penetration: Real,
    ) -> Self {
        Contact {
            point1,
            point2,
            normal,
            position,
            penetration,
        }
    }

    /// Builds a contact from its two witness points and its normal.
    ///
    /// The position is the midpoint of the witness points, and the penetration
    /// depth is the sum of their distances to this midpoint along the normal.
    pub(crate) fn from_witnesses(
        point1: Point<Real>,
        point2: Point<Real>,
        normal: Unit<Vector<Real>>,
    ) -> Self {
        let position = na::center(&point1, &point2);
        let penetration =
            normal.dot(&(position - point1)).abs() + normal.dot(&(point2 - position)).abs();

        Contact::new(point1, point2, normal, position, penetration)
    }
}

impl Contact {
    /// Swaps the points and reverses the normal of this contact.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.point1, &mut self.point2);
        self.normal = -self.normal;
    }

    /// Returns a new contact containing the swapped points and reversed normal of `self`.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Transform the points and normal of this contact by the given isometry.
    #[inline]
    pub fn transform_by_mut(&mut self, pos: &Isometry<Real>) {
        self.point1 = pos * self.point1;
        self.point2 = pos * self.point2;
        self.position = pos * self.position;
        self.normal = pos * self.normal;
    }

    /// Returns this contact with its points and normal transformed by the given isometry.
    #[inline]
    pub fn transform_by(mut self, pos: &Isometry<Real>) -> Self {
        self.transform_by_mut(pos);
        self
    }

    /// Two unit vectors orthogonal to each other and to the contact normal.
    ///
    /// `normal`, `tangents[0]`, `tangents[1]` form a right-handed frame.
    #[inline]
    pub fn tangents(&self) -> [Vector<Real>; 2] {
        utils::contact_basis(&self.normal)
    }

    /// The orthonormal contact frame, with the columns `[normal, tangent1, tangent2]`.
    pub fn basis(&self) -> Matrix<Real> {
        let [t1, t2] = self.tangents();
        Matrix::from_columns(&[*self.normal, t1, t2])
    }
}

impl AbsDiffEq for Contact {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.point1.abs_diff_eq(&other.point1, epsilon)
            && self.point2.abs_diff_eq(&other.point2, epsilon)
            && self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.position.abs_diff_eq(&other.position, epsilon)
            && self.penetration.abs_diff_eq(&other.penetration, epsilon)
    }
}

impl RelativeEq for Contact {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.point1
            .relative_eq(&other.point1, epsilon, max_relative)
            && self
                .point2
                .relative_eq(&other.point2, epsilon, max_relative)
            && self
                .normal
                .relative_eq(&other.normal, epsilon, max_relative)
            && self
                .position
                .relative_eq(&other.position, epsilon, max_relative)
            && self
                .penetration
                .relative_eq(&other.penetration, epsilon, max_relative)
    }
}
