use crate::math::Real;

/// Error returned by the checked shape constructors.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A shape dimension was negative, infinite, or NaN.
    #[error("the shape dimension `{name}` must be finite and non-negative, found {value}.")]
    NegativeOrNonFiniteDimension {
        /// The name of the offending dimension.
        name: &'static str,
        /// The rejected value.
        value: Real,
    },
    /// A triangle vertex had an infinite or NaN coordinate.
    #[error("the triangle has a vertex with a non-finite coordinate.")]
    NonFiniteVertex,
    /// The three vertices of a triangle are collinear.
    #[error("the triangle vertices are collinear.")]
    DegenerateTriangle,
}

impl ShapeError {
    pub(crate) fn check_dimension(name: &'static str, value: Real) -> Result<(), ShapeError> {
        // NaN fails both comparisons.
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(ShapeError::NegativeOrNonFiniteDimension { name, value })
        }
    }
}
