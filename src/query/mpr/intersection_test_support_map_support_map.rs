use crate::math::{Isometry, Real};
use crate::query::mpr::{CsoPoint, Discovery, MprOptions, MprResult, Portal};
use crate::shape::SupportMap;

/// Intersection test between support-mapped shapes (`Cuboid`, `Cone`, etc.)
///
/// `pos12` is the position of the second shape relative to the first one.
pub fn intersection_test_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    intersection_test_support_map_support_map_with_params(pos12, g1, g2, &MprOptions::default())
        .is_intersection()
}

/// Intersection test between support-mapped shapes (`Cuboid`, `Cone`, etc.)
///
/// This allows a more fine grained control over the underlying MPR algorithm.
/// Reaching `options.max_iterations` yields `MprResult::Stalled`.
pub fn intersection_test_support_map_support_map_with_params<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    options: &MprOptions,
) -> MprResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let v0 = CsoPoint::from_centers(pos12);

    // Both centers coincide: the origin is the interior point itself.
    if v0.point.coords.norm() <= options.tolerance {
        return MprResult::Intersection;
    }

    let mut niter = 0;
    let mut portal = match Portal::discover(pos12, g1, g2, v0, options, &mut niter) {
        Discovery::Portal(portal) => portal,
        Discovery::Collinear(_) => return MprResult::Intersection,
        Discovery::Separated => return MprResult::Separated,
        Discovery::Stalled => {
            log::debug!(
                "MPR portal discovery reached the iteration limit ({}).",
                options.max_iterations
            );
            return MprResult::Stalled;
        }
    };

    loop {
        if niter >= options.max_iterations {
            log::debug!(
                "MPR portal refinement reached the iteration limit ({}).",
                options.max_iterations
            );
            return MprResult::Stalled;
        }
        niter += 1;

        let scaled_normal = portal.scaled_normal();
        if portal.encloses_origin(&scaled_normal) {
            return MprResult::Intersection;
        }

        let v4 = CsoPoint::from_shapes(pos12, g1, g2, &scaled_normal);
        let normal = scaled_normal.normalize();

        if v4.point.coords.dot(&normal) <= 0.0
            || (v4 - portal.v3).dot(&normal) <= options.tolerance
        {
            return MprResult::Separated;
        }

        portal.refine(v4);
    }
}
