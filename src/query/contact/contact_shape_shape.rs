use crate::math::{Isometry, Real};
use crate::query::mpr::contact_support_map_support_map;
use crate::query::{Contact, Unsupported};
use crate::shape::{Shape, SupportMap};

/// Computes the penetrating contact between two support-mapped shapes.
///
/// Returns `None` if the shapes do not overlap. The contact is expressed in world-space.
pub fn contact<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
) -> Option<Contact>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let pos12 = pos1.inv_mul(pos2);
    contact_support_map_support_map(&pos12, g1, g2).map(|c| c.transform_by(pos1))
}

/// Computes the penetrating contact between two shapes of any type.
///
/// Returns `Err(Unsupported)` if one of the shapes has no support mapping.
pub fn contact_shape_shape(
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
) -> Result<Option<Contact>, Unsupported> {
    match (g1.as_support_map(), g2.as_support_map()) {
        (Some(s1), Some(s2)) => Ok(contact(pos1, s1, pos2, s2)),
        _ => Err(Unsupported),
    }
}
