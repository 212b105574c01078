//! Various unsorted geometrical operators.

pub use self::contact_basis::contact_basis;

mod contact_basis;
