//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersect()`] to determine if two support-mapped shapes are intersecting or not.
//! * [`query::contact()`] to compute the penetrating contact between two support-mapped shapes.
//! * [`query::intersection_test()`] and [`query::contact_shape_shape()`], their counterparts
//!   for shapes only known as `&dyn Shape`.
//!
//! All of them take world-space positions and return world-space results.
//!
//! # Specific cases
//! The functions exported by the `details` submodule work in the local-space of the first
//! shape and take the relative position `pos12 = pos1⁻¹ * pos2` of the second one.
//!
//! [`query::intersect()`]: crate::query::intersect
//! [`query::contact()`]: crate::query::contact()
//! [`query::intersection_test()`]: crate::query::intersection_test
//! [`query::contact_shape_shape()`]: crate::query::contact_shape_shape

pub use self::contact::{contact, contact_shape_shape, Contact};
pub use self::error::Unsupported;
pub use self::intersection_test::{intersect, intersection_test};

pub mod contact;
mod error;
mod intersection_test;
pub mod mpr;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::mpr::{
        contact_support_map_support_map, contact_support_map_support_map_with_params,
        intersection_test_support_map_support_map,
        intersection_test_support_map_support_map_with_params,
    };
}
