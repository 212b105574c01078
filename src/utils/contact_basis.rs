use crate::math::{Real, UnitVector, Vector};

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs() and .sqrt()

/// Computes two unit vectors which, together with `normal`, form a right-handed orthonormal basis.
///
/// The first tangent is built from the two components of `normal` that are not
/// the smallest of `|x|` and `|y|`, so it never comes from a nearly parallel
/// cross product. The second tangent is `normal × tangent1`.
pub fn contact_basis(normal: &UnitVector<Real>) -> [Vector<Real>; 2] {
    let n = normal.as_ref();

    let tangent1 = if n.x.abs() > n.y.abs() {
        let inv_len = 1.0 / (n.x * n.x + n.z * n.z).sqrt();
        Vector::new(n.z * inv_len, 0.0, -n.x * inv_len)
    } else {
        let inv_len = 1.0 / (n.y * n.y + n.z * n.z).sqrt();
        Vector::new(0.0, -n.z * inv_len, n.y * inv_len)
    };

    [tangent1, n.cross(&tangent1)]
}
