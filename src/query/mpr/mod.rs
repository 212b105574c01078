//! The Minkowski Portal Refinement algorithm.
//!
//! Given an interior point `v0` of the Minkowski difference `B - A`, the
//! algorithm first discovers a triangular portal of the difference crossed by
//! the ray from `v0` to the origin, and then refines this portal toward the
//! boundary until it can tell on which side of the boundary the origin lies.

pub use self::contact_support_map_support_map::{
    contact_support_map_support_map, contact_support_map_support_map_with_params,
};
pub use self::cso_point::CsoPoint;
pub use self::intersection_test_support_map_support_map::{
    intersection_test_support_map_support_map,
    intersection_test_support_map_support_map_with_params,
};
pub use self::mpr_options::{MprOptions, MprResult, DEFAULT_MAX_ITERATIONS};
pub(crate) use self::portal::{Discovery, Portal};

mod contact_support_map_support_map;
mod cso_point;
mod intersection_test_support_map_support_map;
mod mpr_options;
mod portal;
