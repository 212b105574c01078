use core::fmt;

/// Error indicating that a geometric query is not supported between certain shapes.
///
/// Every built-in shape has a support mapping, so this is only returned for
/// custom shapes whose [`as_support_map`](crate::shape::Shape::as_support_map)
/// returns `None`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported between these shapes")
    }
}

impl core::error::Error for Unsupported {}
