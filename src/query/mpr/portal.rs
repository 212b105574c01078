use core::mem;

use crate::math::{Isometry, Real, Vector};
use crate::query::mpr::{CsoPoint, MprOptions};
use crate::shape::SupportMap;

/// Outcome of the portal discovery phase.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Discovery {
    /// A support plane separates the origin from the Minkowski difference.
    Separated,
    /// The first support point lies on the line through the interior point and the origin.
    Collinear(CsoPoint),
    /// A portal crossed by the origin ray was found.
    Portal(Portal),
    /// The iteration limit was reached during discovery.
    Stalled,
}

/// A tetrahedron of the Minkowski difference `B - A`.
///
/// `v0` is an interior point and the triangle `(v1, v2, v3)` is the portal:
/// the ray starting at `v0` and passing through the origin crosses it.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Portal {
    pub v0: CsoPoint,
    pub v1: CsoPoint,
    pub v2: CsoPoint,
    pub v3: CsoPoint,
}

impl Portal {
    /// Searches for a portal crossed by the ray from `v0` to the origin.
    ///
    /// Every correction of the candidate portal consumes one iteration of `niter`.
    pub fn discover<G1, G2>(
        pos12: &Isometry<Real>,
        g1: &G1,
        g2: &G2,
        v0: CsoPoint,
        options: &MprOptions,
        niter: &mut u32,
    ) -> Discovery
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let origin_ray = -v0.point.coords;

        let mut v1 = CsoPoint::from_shapes(pos12, g1, g2, &origin_ray);
        if v1.point.coords.dot(&origin_ray) <= 0.0 {
            return Discovery::Separated;
        }

        let dir = v1.point.coords.cross(&v0.point.coords);
        if dir.norm() <= options.tolerance {
            return Discovery::Collinear(v1);
        }

        let mut v2 = CsoPoint::from_shapes(pos12, g1, g2, &dir);
        if v2.point.coords.dot(&dir) <= 0.0 {
            return Discovery::Separated;
        }

        loop {
            if *niter >= options.max_iterations {
                return Discovery::Stalled;
            }
            *niter += 1;

            let n = (v1 - v0).cross(&(v2 - v0));
            let v3 = CsoPoint::from_shapes(pos12, g1, g2, &n);

            if v3.point.coords.dot(&n) <= 0.0 {
                return Discovery::Separated;
            }

            // The origin is outside of the plane (v0, v1, v2).
            if n.dot(&origin_ray) < 0.0 {
                mem::swap(&mut v1, &mut v2);
                continue;
            }

            // The origin is outside of the plane (v0, v2, v3).
            if v3.point.coords.cross(&v2.point.coords).dot(&v0.point.coords) < 0.0 {
                v1 = v3;
                continue;
            }

            // The origin is outside of the plane (v0, v3, v1).
            if v1.point.coords.cross(&v3.point.coords).dot(&v0.point.coords) < 0.0 {
                v2 = v3;
                continue;
            }

            return Discovery::Portal(Portal { v0, v1, v2, v3 });
        }
    }

    /// The portal normal, with a length equal to twice the portal area.
    ///
    /// It points away from `v0`.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        (self.v2 - self.v1).cross(&(self.v3 - self.v1))
    }

    /// Does the portal plane have the origin on the same side as `v0`?
    #[inline]
    pub fn encloses_origin(&self, normal: &Vector<Real>) -> bool {
        normal.dot(&self.v1.point.coords) >= 0.0
    }

    /// Replaces one of the portal vertices by `v4` so that the origin ray still crosses it.
    pub fn refine(&mut self, v4: CsoPoint) {
        let p4 = v4.point.coords;
        let p0 = self.v0.point.coords;

        if p4.cross(&self.v1.point.coords).dot(&p0) < 0.0 {
            if p4.cross(&self.v2.point.coords).dot(&p0) < 0.0 {
                self.v1 = v4;
            } else {
                self.v3 = v4;
            }
        } else if p4.cross(&self.v3.point.coords).dot(&p0) < 0.0 {
            self.v2 = v4;
        } else {
            self.v1 = v4;
        }
    }
}
