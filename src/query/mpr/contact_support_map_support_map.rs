use na::Unit;

use crate::math::{Isometry, Point, Real, Vector};
use crate::query::mpr::{CsoPoint, Discovery, MprOptions, Portal};
use crate::query::Contact;
use crate::shape::SupportMap;

/// Interior point used instead of the center difference when both centers coincide.
const COINCIDENT_CENTERS_OFFSET: Real = 1.0e-4;

/// Contact between support-mapped shapes (`Cuboid`, `Cone`, etc.)
///
/// The returned contact is expressed in the local-space of the first shape.
pub fn contact_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
) -> Option<Contact>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    contact_support_map_support_map_with_params(pos12, g1, g2, &MprOptions::default())
}

/// Contact between support-mapped shapes (`Cuboid`, `Cone`, etc.)
///
/// This allows a more fine grained control over the underlying MPR algorithm.
/// The contact is recomputed at every refinement step where the portal encloses
/// the origin, and the last one is returned once refinement stops, including
/// when `options.max_iterations` is reached.
pub fn contact_support_map_support_map_with_params<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    options: &MprOptions,
) -> Option<Contact>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut v0 = CsoPoint::from_centers(pos12);

    if v0.point.coords.norm() <= options.tolerance {
        v0.point = Point::new(COINCIDENT_CENTERS_OFFSET, 0.0, 0.0);
    }

    let mut niter = 0;
    let mut portal = match Portal::discover(pos12, g1, g2, v0, options, &mut niter) {
        Discovery::Portal(portal) => portal,
        Discovery::Collinear(v1) => return collinear_contact(&v0, &v1),
        Discovery::Separated => return None,
        Discovery::Stalled => {
            log::debug!(
                "MPR portal discovery reached the iteration limit ({}).",
                options.max_iterations
            );
            return None;
        }
    };

    let mut last_contact = None;

    loop {
        if niter >= options.max_iterations {
            log::debug!(
                "MPR portal refinement reached the iteration limit ({}).",
                options.max_iterations
            );
            return last_contact;
        }
        niter += 1;

        let Some(normal) = Unit::try_new(portal.scaled_normal(), 0.0) else {
            log::debug!("MPR found a degenerate portal during contact refinement.");
            return last_contact;
        };

        if portal.encloses_origin(&normal) {
            if let Some(contact) = portal_contact(pos12, g1, g2, &portal, &normal) {
                last_contact = Some(contact);
            }
        }

        let v4 = CsoPoint::from_shapes_toward(pos12, g1, g2, &normal);

        if normal.dot(&v4.point.coords) <= 0.0
            || normal.dot(&(v4 - portal.v3)) <= options.tolerance
        {
            return last_contact;
        }

        portal.refine(v4);
    }
}

/// The contact obtained when the origin lies on the line through `v0` and `v1`.
fn collinear_contact(v0: &CsoPoint, v1: &CsoPoint) -> Option<Contact> {
    let normal = Unit::try_new(*v1 - *v0, 0.0)?;
    Some(Contact::from_witnesses(v1.orig1, v1.orig2, normal))
}

/// The contact obtained by projecting the origin on the portal.
fn portal_contact<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    portal: &Portal,
    normal: &Unit<Vector<Real>>,
) -> Option<Contact>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let vertices = [portal.v0, portal.v1, portal.v2, portal.v3];
    let weights = origin_weights(portal, normal)?;

    let mut pt1 = Vector::zeros();
    let mut pt2 = Vector::zeros();

    for (v, w) in vertices.iter().zip(weights.iter()) {
        pt1 += v.orig1.coords * *w;
        pt2 += v.orig2.coords * *w;
    }

    // Move both blended points onto the support planes orthogonal to the normal.
    let support1 = g1.local_support_point_toward(&-*normal);
    let support2 = g2.support_point_toward(pos12, normal);
    let pt1 = Point::from(pt1 + **normal * normal.dot(&(support1.coords - pt1)));
    let pt2 = Point::from(pt2 + **normal * normal.dot(&(support2.coords - pt2)));

    Some(Contact::from_witnesses(pt1, pt2, *normal))
}

/// Normalized barycentric weights of the origin with respect to the
/// tetrahedron `(v0, v1, v2, v3)`.
///
/// Falls back to the weights of the origin projected on the portal triangle
/// when the tetrahedron is degenerate.
fn origin_weights(portal: &Portal, normal: &Unit<Vector<Real>>) -> Option<[Real; 4]> {
    let p0 = portal.v0.point.coords;
    let p1 = portal.v1.point.coords;
    let p2 = portal.v2.point.coords;
    let p3 = portal.v3.point.coords;

    let mut weights = [
        p1.cross(&p2).dot(&p3),
        p3.cross(&p2).dot(&p0),
        p0.cross(&p1).dot(&p3),
        p2.cross(&p1).dot(&p0),
    ];
    let mut sum: Real = weights.iter().sum();

    if sum <= 0.0 {
        weights = [
            0.0,
            normal.dot(&p2.cross(&p3)),
            normal.dot(&p3.cross(&p1)),
            normal.dot(&p1.cross(&p2)),
        ];
        sum = weights.iter().sum();
    }

    if sum.is_nan() || sum <= 0.0 {
        log::debug!("MPR found a degenerate portal weighting, skipping contact update.");
        return None;
    }

    for w in &mut weights {
        *w /= sum;
    }

    Some(weights)
}
