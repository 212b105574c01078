use crate::math::{Real, DEFAULT_TOLERANCE};

/// The default maximum number of iterations of the portal discovery and refinement loops.
pub const DEFAULT_MAX_ITERATIONS: u32 = 64;

/// Parameters of the Minkowski Portal Refinement algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct MprOptions {
    /// Lengths and progress steps smaller than this are considered degenerate.
    pub tolerance: Real,
    /// Maximum number of portal corrections and refinement steps, counted together.
    pub max_iterations: u32,
}

impl Default for MprOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MprOptions {
    /// Options with the given tolerance and iteration limit.
    pub fn new(tolerance: Real, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

/// Result of the Minkowski Portal Refinement intersection test.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MprResult {
    /// The origin lies inside the Minkowski difference: the shapes overlap.
    Intersection,
    /// A separating support plane was found: the shapes do not overlap.
    Separated,
    /// The iteration limit was reached before reaching a decision.
    Stalled,
}

impl MprResult {
    /// Is this an intersection?
    #[inline]
    pub fn is_intersection(self) -> bool {
        self == MprResult::Intersection
    }
}
