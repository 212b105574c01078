//! Implementation details of the `contact` function.

pub use self::contact::Contact;
pub use self::contact_shape_shape::{contact, contact_shape_shape};

mod contact;
mod contact_shape_shape;
