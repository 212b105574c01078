//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// The support mapping is the only information Minkowski Portal Refinement
/// needs about a shape: the engine never looks at its actual geometry.
pub trait SupportMap {
    /// Evaluates the support function of this shape in its local-space.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product. `dir` does not need to be normalized.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape placed at `pose`.
    ///
    /// `dir` is rotated into the local-space of the shape, and the local
    /// support point is mapped back to world-space by `pose`. Only the
    /// rotational part of `pose` affects which point is selected.
    fn support_point(&self, pose: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        pose * self.local_support_point(&pose.inverse_transform_vector(dir))
    }

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(
        &self,
        pose: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        self.support_point(pose, dir.as_ref())
    }
}
